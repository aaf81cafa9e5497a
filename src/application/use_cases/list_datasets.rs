//! # List Datasets Use Case
//!
//! ワークスペース内のデータセット一覧ユースケース

use std::sync::Arc;

use crate::domain::entities::import_operation::PublishedResource;
use crate::domain::entities::workspace::WorkspaceId;
use crate::domain::error::PublishError;
use crate::domain::repositories::workspace_repository::WorkspaceRepository;

/// データセット一覧ユースケース
pub struct ListDatasetsUseCase<W: WorkspaceRepository> {
    workspace_repository: Arc<W>,
}

impl<W: WorkspaceRepository> ListDatasetsUseCase<W> {
    pub fn new(workspace_repository: Arc<W>) -> Self {
        Self {
            workspace_repository,
        }
    }

    /// データセット一覧を名前順で返す
    pub async fn execute(
        &self,
        workspace_id: Option<&WorkspaceId>,
    ) -> Result<Vec<PublishedResource>, PublishError> {
        let mut datasets = self.workspace_repository.list_datasets(workspace_id).await?;
        datasets.sort_by_key(|dataset| dataset.name.to_lowercase());
        Ok(datasets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::entities::workspace::Workspace;

    #[derive(Default)]
    struct MockWorkspaceRepository {
        requested: Mutex<Vec<Option<WorkspaceId>>>,
        fail: bool,
    }

    #[async_trait]
    impl WorkspaceRepository for MockWorkspaceRepository {
        async fn list_workspaces(&self) -> Result<Vec<Workspace>, PublishError> {
            Ok(vec![])
        }

        async fn list_reports(
            &self,
            _workspace_id: Option<&WorkspaceId>,
        ) -> Result<Vec<PublishedResource>, PublishError> {
            Ok(vec![])
        }

        async fn list_datasets(
            &self,
            workspace_id: Option<&WorkspaceId>,
        ) -> Result<Vec<PublishedResource>, PublishError> {
            self.requested.lock().unwrap().push(workspace_id.cloned());
            if self.fail {
                return Err(PublishError::Api {
                    context: "Listing datasets".to_string(),
                    status: 403,
                    message: "Forbidden".to_string(),
                });
            }
            Ok(vec![
                PublishedResource::new("d-2", "sales model"),
                PublishedResource::new("d-1", "Budget"),
            ])
        }
    }

    #[tokio::test]
    async fn test_list_datasets_sorted_by_name() {
        let repo = Arc::new(MockWorkspaceRepository::default());
        let use_case = ListDatasetsUseCase::new(repo.clone());
        let ws = WorkspaceId::from("ws-1");

        let datasets = use_case.execute(Some(&ws)).await.unwrap();

        let names: Vec<&str> = datasets.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Budget", "sales model"]);
        assert_eq!(repo.requested.lock().unwrap().clone(), vec![Some(ws)]);
    }

    #[tokio::test]
    async fn test_list_datasets_error_propagates() {
        let repo = Arc::new(MockWorkspaceRepository {
            fail: true,
            ..Default::default()
        });
        let use_case = ListDatasetsUseCase::new(repo);

        let result = use_case.execute(None).await;

        assert!(matches!(result, Err(PublishError::Api { status: 403, .. })));
    }
}
