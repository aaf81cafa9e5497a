//! # Publish Report Use Case
//!
//! レポートファイルをアップロードしてインポートを開始し、必要なら完了まで待つユースケース
//!
//! ## 処理フロー
//!
//! 1. ファイルサイズでアップロード方式を選択
//! 2. 直接アップロード（multipart POST）または
//!    一時アップロード先 → Blob PUT → URL からインポート
//! 3. `wait_for_completion` の場合はインポート完了までポーリング

use std::sync::Arc;
use log::{debug, info};

use super::wait_for_import::WaitForImportUseCase;
use crate::application::dto::publish_config::PublishConfig;
use crate::application::reporter::{ProgressReporter, PublishEvent};
use crate::domain::entities::import_operation::ImportOperation;
use crate::domain::entities::upload_target::{UploadStrategy, UploadTarget};
use crate::domain::error::PublishError;
use crate::domain::repositories::import_repository::ImportRepository;

/// レポート発行ユースケース
pub struct PublishReportUseCase<I: ImportRepository> {
    import_repository: Arc<I>,
    reporter: Arc<dyn ProgressReporter>,
}

impl<I: ImportRepository> PublishReportUseCase<I> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `import_repository` - インポートリポジトリ
    /// * `reporter` - 進捗の通知先
    pub fn new(import_repository: Arc<I>, reporter: Arc<dyn ProgressReporter>) -> Self {
        Self {
            import_repository,
            reporter,
        }
    }

    /// レポートを発行する
    ///
    /// # Returns
    ///
    /// 待つ場合は完了時点の状態、待たない場合は開始直後の状態
    ///
    /// # Errors
    ///
    /// 最初に失敗した段階のエラーを返す。後続の段階は実行しない。
    pub async fn execute(
        &self,
        target: &UploadTarget,
        config: &PublishConfig,
    ) -> Result<ImportOperation, PublishError> {
        let strategy = target.strategy();
        info!(
            "Uploading {} ({:.2} MB) using {} upload",
            target.file_name(),
            target.size_mb(),
            strategy
        );
        self.reporter.report(&PublishEvent::UploadStarted {
            file_name: target.file_name(),
            size_bytes: target.size_bytes,
            strategy,
        });

        let operation = match strategy {
            UploadStrategy::Direct => self.import_repository.import_file(target).await?,
            UploadStrategy::Staged => self.staged_upload(target).await?,
        };

        self.reporter.report(&PublishEvent::ImportStarted {
            import_id: operation.id.clone(),
        });

        if !config.wait_for_completion {
            debug!("Not waiting for import {}", operation.id);
            return Ok(operation);
        }

        WaitForImportUseCase::new(self.import_repository.clone(), self.reporter.clone())
            .execute(target.workspace_id.as_ref(), &operation.id, config)
            .await
    }

    /// 3段階アップロード
    async fn staged_upload(&self, target: &UploadTarget) -> Result<ImportOperation, PublishError> {
        let upload_url = self
            .import_repository
            .create_temporary_upload_location(target.workspace_id.as_ref())
            .await?;
        self.reporter.report(&PublishEvent::TemporaryLocationCreated);

        self.import_repository
            .upload_to_blob(&upload_url, target)
            .await?;
        self.reporter.report(&PublishEvent::BlobUploaded {
            size_bytes: target.size_bytes,
        });

        self.import_repository
            .import_from_url(&upload_url, target)
            .await
    }
}
