//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod powerbi_import_repository;
pub mod powerbi_workspace_repository;

pub use powerbi_import_repository::PowerBiImportRepository;
pub use powerbi_workspace_repository::PowerBiWorkspaceRepository;
