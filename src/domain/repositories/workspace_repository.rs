//! # Workspace Repository Trait
//!
//! ワークスペース、レポート、データセットの一覧取得を抽象化

use async_trait::async_trait;

use crate::domain::entities::import_operation::PublishedResource;
use crate::domain::entities::workspace::{Workspace, WorkspaceId};
use crate::domain::error::PublishError;

/// ワークスペースリポジトリ
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// 資格情報から見える全ワークスペースを返す（キャッシュしない）
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, PublishError>;

    /// ワークスペース内のレポートを返す
    ///
    /// # Arguments
    ///
    /// * `workspace_id` - `None` の場合は個人ワークスペース
    async fn list_reports(
        &self,
        workspace_id: Option<&WorkspaceId>,
    ) -> Result<Vec<PublishedResource>, PublishError>;

    /// ワークスペース内のデータセットを返す
    async fn list_datasets(
        &self,
        workspace_id: Option<&WorkspaceId>,
    ) -> Result<Vec<PublishedResource>, PublishError>;
}
