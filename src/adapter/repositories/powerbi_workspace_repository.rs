//! Power BI Workspace Repository Implementation
//!
//! WorkspaceRepositoryのPower BI REST API実装

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::adapter::http::client::HttpRequest;
use crate::adapter::powerbi::api::{expect_status, parse_json, PowerBiApi};
use crate::adapter::powerbi::endpoints::scoped;
use crate::adapter::powerbi::models::{GroupDto, ODataList, ResourceDto};
use crate::domain::entities::import_operation::PublishedResource;
use crate::domain::entities::workspace::{Workspace, WorkspaceId};
use crate::domain::error::PublishError;
use crate::domain::repositories::workspace_repository::WorkspaceRepository;

const LIST_WORKSPACES: &str = "Listing workspaces";
const LIST_REPORTS: &str = "Listing reports";
const LIST_DATASETS: &str = "Listing datasets";

/// Power BI ワークスペースリポジトリ
pub struct PowerBiWorkspaceRepository {
    api: Arc<PowerBiApi>,
}

impl PowerBiWorkspaceRepository {
    pub fn new(api: Arc<PowerBiApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl WorkspaceRepository for PowerBiWorkspaceRepository {
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, PublishError> {
        let url = format!("{}/groups", self.api.api_base().trim_end_matches('/'));
        let response = self
            .api
            .send_authorized(LIST_WORKSPACES, HttpRequest::get(url))
            .await?;
        expect_status(LIST_WORKSPACES, &response, &[200])?;

        let list: ODataList<GroupDto> = parse_json(LIST_WORKSPACES, &response)?;
        debug!("{} workspaces visible", list.value.len());
        Ok(list.value.into_iter().map(Into::into).collect())
    }

    async fn list_reports(
        &self,
        workspace_id: Option<&WorkspaceId>,
    ) -> Result<Vec<PublishedResource>, PublishError> {
        let url = scoped(self.api.api_base(), workspace_id, "reports");
        let response = self
            .api
            .send_authorized(LIST_REPORTS, HttpRequest::get(url))
            .await?;
        expect_status(LIST_REPORTS, &response, &[200])?;

        let list: ODataList<ResourceDto> = parse_json(LIST_REPORTS, &response)?;
        Ok(list.value.into_iter().map(Into::into).collect())
    }

    async fn list_datasets(
        &self,
        workspace_id: Option<&WorkspaceId>,
    ) -> Result<Vec<PublishedResource>, PublishError> {
        let url = scoped(self.api.api_base(), workspace_id, "datasets");
        let response = self
            .api
            .send_authorized(LIST_DATASETS, HttpRequest::get(url))
            .await?;
        expect_status(LIST_DATASETS, &response, &[200])?;

        let list: ODataList<ResourceDto> = parse_json(LIST_DATASETS, &response)?;
        Ok(list.value.into_iter().map(Into::into).collect())
    }
}
