//! # pbix-publisher
//!
//! Power BI レポート（.pbix）を Power BI サービスに発行するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 資格情報、ワークスペース、アップロード対象、インポート状態とそのルール（外部依存なし）
//! - **Application層**: ワークスペース解決、発行、完了待ちのユースケース
//! - **Adapter層**: Azure AD, Power BI REST API, Blob ストレージとの統合
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
