//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層でPower BI REST APIを使った具体的な実装を提供
//! - テストではモックに差し替え可能

pub mod import_repository;
pub mod token_provider;
pub mod workspace_repository;
