//! Adapter Layer
//!
//! 外部システム（Azure AD, Power BI REST API, Blob ストレージ, コンソール）との統合
//!
//! ## 構成要素
//!
//! - **http**: HTTPトランスポートとリトライ
//! - **auth**: Azure AD 認証
//! - **powerbi**: URL、ワイヤーフォーマット、認証付き送信
//! - **repositories**: Domain層のRepositoryトレイトの実装
//! - **config**: 設定の読み込み
//! - **reporting**: 進捗の表示

pub mod auth;
pub mod config;
pub mod http;
pub mod powerbi;
pub mod reporting;
pub mod repositories;
