//! # Domain Layer
//!
//! このモジュールはレポート発行の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPやreqwestについて何も知らない
//! - フレームワークに依存しない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Credential, UploadTarget, ImportOperationなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（ワークスペース名の照合、失敗ヒント）
//! - **error**: 発行ワークフローのエラー分類

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
