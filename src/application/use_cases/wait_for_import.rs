//! # Wait For Import Use Case
//!
//! インポート完了までのポーリングユースケース

use std::sync::Arc;
use log::debug;
use tokio::time::{sleep, Instant};

use crate::application::dto::publish_config::PublishConfig;
use crate::application::reporter::{ProgressReporter, PublishEvent};
use crate::domain::entities::import_operation::{ImportOperation, ImportState};
use crate::domain::entities::workspace::WorkspaceId;
use crate::domain::error::PublishError;
use crate::domain::repositories::import_repository::ImportRepository;
use crate::domain::services::failure_hint::FailureHint;

/// インポート完了待ちユースケース
///
/// 状態を固定間隔で取得し、`Succeeded` / `Failed` で即座に終了する。
/// タイムアウトを超えたら `ImportTimeout`。最後の待機はタイムアウトまでの残り時間に切り詰めるので、
/// `timeout + poll_interval` を超えて待つことはない。
pub struct WaitForImportUseCase<I: ImportRepository> {
    import_repository: Arc<I>,
    reporter: Arc<dyn ProgressReporter>,
}

impl<I: ImportRepository> WaitForImportUseCase<I> {
    pub fn new(import_repository: Arc<I>, reporter: Arc<dyn ProgressReporter>) -> Self {
        Self {
            import_repository,
            reporter,
        }
    }

    /// インポートが終了状態になるまで待つ
    ///
    /// # Returns
    ///
    /// `Succeeded` になった時点の状態（レポートとデータセットのIDを含む）
    ///
    /// # Errors
    ///
    /// - `ImportFailed`: サービスが失敗を報告した
    /// - `ImportTimeout`: `config.timeout` 以内に終了しなかった
    /// - 状態取得そのものの失敗はそのまま返す
    pub async fn execute(
        &self,
        workspace_id: Option<&WorkspaceId>,
        import_id: &str,
        config: &PublishConfig,
    ) -> Result<ImportOperation, PublishError> {
        let started = Instant::now();

        loop {
            let operation = self
                .import_repository
                .get_import(workspace_id, import_id)
                .await?;
            let elapsed = started.elapsed();

            self.reporter.report(&PublishEvent::ImportPolled {
                import_id: import_id.to_string(),
                state: operation.state,
                elapsed,
            });

            match operation.state {
                ImportState::Succeeded => {
                    self.reporter.report(&PublishEvent::ImportSucceeded {
                        import_id: import_id.to_string(),
                    });
                    return Ok(operation);
                }
                ImportState::Failed => {
                    let message = operation
                        .error_message
                        .unwrap_or_else(|| "Unknown error".to_string());
                    let hint = FailureHint::detect(&message);
                    return Err(PublishError::ImportFailed {
                        import_id: import_id.to_string(),
                        message,
                        hint,
                    });
                }
                ImportState::Importing | ImportState::Publishing | ImportState::Unknown => {}
            }

            if elapsed >= config.timeout {
                return Err(PublishError::ImportTimeout {
                    import_id: import_id.to_string(),
                    timeout: config.timeout,
                });
            }

            let wait = config.poll_interval.min(config.timeout - elapsed);
            debug!("Import {} is {}, polling again in {:?}", import_id, operation.state, wait);
            sleep(wait).await;
        }
    }
}
