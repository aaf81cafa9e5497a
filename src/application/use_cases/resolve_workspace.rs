//! # Resolve Workspace Use Case
//!
//! ワークスペース名からIDを解決するユースケース

use std::sync::Arc;

use crate::application::reporter::{ProgressReporter, PublishEvent};
use crate::domain::entities::workspace::{Workspace, WorkspaceId};
use crate::domain::error::PublishError;
use crate::domain::repositories::workspace_repository::WorkspaceRepository;
use crate::domain::services::workspace_matcher::WorkspaceMatcher;

/// ワークスペース解決ユースケース
///
/// 呼び出しのたびに一覧を取得し直す（プロセスをまたいだキャッシュはしない）
pub struct ResolveWorkspaceUseCase<W: WorkspaceRepository> {
    workspace_repository: Arc<W>,
    reporter: Arc<dyn ProgressReporter>,
}

impl<W: WorkspaceRepository> ResolveWorkspaceUseCase<W> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `workspace_repository` - ワークスペースリポジトリ
    /// * `reporter` - 進捗の通知先
    pub fn new(workspace_repository: Arc<W>, reporter: Arc<dyn ProgressReporter>) -> Self {
        Self {
            workspace_repository,
            reporter,
        }
    }

    /// ワークスペース名を解決する
    ///
    /// # Errors
    ///
    /// 一致するワークスペースがない場合は `WorkspaceNotFound`、
    /// 大文字小文字を無視して複数一致した場合は `AmbiguousWorkspaceName`
    pub async fn execute(&self, name: &str) -> Result<WorkspaceId, PublishError> {
        let workspaces = self.workspace_repository.list_workspaces().await?;
        let workspace = WorkspaceMatcher::find(name, &workspaces)?;

        self.reporter.report(&PublishEvent::WorkspaceResolved {
            name: workspace.name.clone(),
            id: workspace.id.clone(),
        });

        Ok(workspace.id.clone())
    }

    /// 見える全ワークスペースを返す
    pub async fn list(&self) -> Result<Vec<Workspace>, PublishError> {
        self.workspace_repository.list_workspaces().await
    }
}
