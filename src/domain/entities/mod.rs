//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Credential / AccessToken**: サービスプリンシパルの資格情報とベアラートークン
//! - **Workspace**: ワークスペース（グループ）
//! - **UploadTarget**: アップロード対象のレポートファイルと発行先
//! - **ImportOperation**: サービス側のインポートジョブのスナップショット

pub mod credential;
pub mod import_operation;
pub mod upload_target;
pub mod workspace;
