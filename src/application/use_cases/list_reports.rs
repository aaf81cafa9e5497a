//! # List Reports Use Case
//!
//! ワークスペース内のレポート一覧ユースケース

use std::sync::Arc;

use crate::domain::entities::import_operation::PublishedResource;
use crate::domain::entities::workspace::WorkspaceId;
use crate::domain::error::PublishError;
use crate::domain::repositories::workspace_repository::WorkspaceRepository;

/// レポート一覧ユースケース
pub struct ListReportsUseCase<W: WorkspaceRepository> {
    workspace_repository: Arc<W>,
}

impl<W: WorkspaceRepository> ListReportsUseCase<W> {
    pub fn new(workspace_repository: Arc<W>) -> Self {
        Self {
            workspace_repository,
        }
    }

    /// レポート一覧を名前順で返す
    pub async fn execute(
        &self,
        workspace_id: Option<&WorkspaceId>,
    ) -> Result<Vec<PublishedResource>, PublishError> {
        let mut reports = self.workspace_repository.list_reports(workspace_id).await?;
        reports.sort_by_key(|report| report.name.to_lowercase());
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::entities::workspace::Workspace;

    struct MockWorkspaceRepository {
        requested: Mutex<Vec<Option<WorkspaceId>>>,
    }

    #[async_trait]
    impl WorkspaceRepository for MockWorkspaceRepository {
        async fn list_workspaces(&self) -> Result<Vec<Workspace>, PublishError> {
            Ok(vec![])
        }

        async fn list_reports(
            &self,
            workspace_id: Option<&WorkspaceId>,
        ) -> Result<Vec<PublishedResource>, PublishError> {
            self.requested.lock().unwrap().push(workspace_id.cloned());
            Ok(vec![
                PublishedResource::new("r-2", "sales overview"),
                PublishedResource::new("r-1", "Board Pack"),
            ])
        }

        async fn list_datasets(
            &self,
            _workspace_id: Option<&WorkspaceId>,
        ) -> Result<Vec<PublishedResource>, PublishError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_list_reports_sorted_by_name() {
        let repo = Arc::new(MockWorkspaceRepository {
            requested: Mutex::new(vec![]),
        });
        let use_case = ListReportsUseCase::new(repo.clone());
        let ws = WorkspaceId::from("ws-1");

        let reports = use_case.execute(Some(&ws)).await.unwrap();

        assert_eq!(reports[0].name, "Board Pack");
        assert_eq!(reports[1].name, "sales overview");
        assert_eq!(repo.requested.lock().unwrap().clone(), vec![Some(ws)]);
    }

    #[tokio::test]
    async fn test_list_reports_personal_workspace() {
        let repo = Arc::new(MockWorkspaceRepository {
            requested: Mutex::new(vec![]),
        });
        let use_case = ListReportsUseCase::new(repo.clone());

        use_case.execute(None).await.unwrap();

        assert_eq!(repo.requested.lock().unwrap().clone(), vec![None]);
    }
}
