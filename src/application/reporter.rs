//! # Progress Reporter
//!
//! 発行ワークフローの進捗イベントと、その通知先（差し替え可能なシンク）

use std::time::Duration;

use crate::domain::entities::import_operation::ImportState;
use crate::domain::entities::upload_target::UploadStrategy;
use crate::domain::entities::workspace::WorkspaceId;

/// 進捗イベント
#[derive(Debug, Clone, PartialEq)]
pub enum PublishEvent {
    WorkspaceResolved {
        name: String,
        id: WorkspaceId,
    },
    UploadStarted {
        file_name: String,
        size_bytes: u64,
        strategy: UploadStrategy,
    },
    TemporaryLocationCreated,
    BlobUploaded {
        size_bytes: u64,
    },
    ImportStarted {
        import_id: String,
    },
    ImportPolled {
        import_id: String,
        state: ImportState,
        elapsed: Duration,
    },
    ImportSucceeded {
        import_id: String,
    },
}

/// 進捗の通知先
///
/// 本番ではコンソールとログへ、テストではメモリへ記録する
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: &PublishEvent);
}
