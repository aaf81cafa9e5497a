//! # Import Repository Trait
//!
//! レポートファイルのアップロードとインポート状態の取得を抽象化

use async_trait::async_trait;

use crate::domain::entities::import_operation::ImportOperation;
use crate::domain::entities::upload_target::UploadTarget;
use crate::domain::entities::workspace::WorkspaceId;
use crate::domain::error::PublishError;

/// インポートリポジトリ
///
/// 各メソッドは独立に失敗しうる。途中で失敗しても一時アップロード先の後片付けはしない
/// （未使用のステージング領域はサービス側で回収される）。
#[async_trait]
pub trait ImportRepository: Send + Sync {
    /// ファイル本体を multipart POST で送ってインポートを開始する
    async fn import_file(&self, target: &UploadTarget) -> Result<ImportOperation, PublishError>;

    /// 書き込み可能な一時アップロード先URLを要求する
    async fn create_temporary_upload_location(
        &self,
        workspace_id: Option<&WorkspaceId>,
    ) -> Result<String, PublishError>;

    /// 一時アップロード先へファイルを Block Blob として書き込む
    async fn upload_to_blob(&self, upload_url: &str, target: &UploadTarget)
        -> Result<(), PublishError>;

    /// ステージング済みBlobのURLを参照してインポートを開始する
    async fn import_from_url(
        &self,
        upload_url: &str,
        target: &UploadTarget,
    ) -> Result<ImportOperation, PublishError>;

    /// インポートの最新状態を取得する
    async fn get_import(
        &self,
        workspace_id: Option<&WorkspaceId>,
        import_id: &str,
    ) -> Result<ImportOperation, PublishError>;
}
