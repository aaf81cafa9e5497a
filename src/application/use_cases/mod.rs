//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ResolveWorkspaceUseCase**: ワークスペース名からIDを解決
//! - **ListReportsUseCase**: ワークスペース内のレポート一覧
//! - **ListDatasetsUseCase**: ワークスペース内のデータセット一覧
//! - **PublishReportUseCase**: レポートファイルのアップロードとインポート開始
//! - **WaitForImportUseCase**: インポート完了までのポーリング

pub mod list_datasets;
pub mod list_reports;
pub mod publish_report;
pub mod resolve_workspace;
pub mod wait_for_import;
