//! Power BI Import Repository Implementation
//!
//! ImportRepositoryのPower BI REST API実装
//!
//! - 直接アップロード: `POST imports`（multipart）
//! - 3段階アップロード: `POST imports/createTemporaryUploadLocation` → Blob `PUT` → `POST imports`（fileUrl）
//! - 状態取得: `GET imports/{id}`

use async_trait::async_trait;
use log::debug;
use serde_json::json;
use std::sync::Arc;

use crate::adapter::http::client::{HttpRequest, HttpResponse, RequestBody, OCTET_STREAM};
use crate::adapter::powerbi::api::{expect_status, parse_json, PowerBiApi};
use crate::adapter::powerbi::endpoints::scoped;
use crate::adapter::powerbi::models::{extract_error_message, ImportDto, TemporaryUploadLocationDto};
use crate::domain::entities::import_operation::ImportOperation;
use crate::domain::entities::upload_target::UploadTarget;
use crate::domain::entities::workspace::WorkspaceId;
use crate::domain::error::{PublishError, UploadStep};
use crate::domain::repositories::import_repository::ImportRepository;
use crate::domain::services::failure_hint::FailureHint;

const IMPORT_ACCEPTED: &[u16] = &[200, 201, 202];
const LOCATION_ACCEPTED: &[u16] = &[200];
const BLOB_ACCEPTED: &[u16] = &[200, 201];
const GET_IMPORT: &str = "Checking import status";

/// Power BI インポートリポジトリ
pub struct PowerBiImportRepository {
    api: Arc<PowerBiApi>,
}

impl PowerBiImportRepository {
    pub fn new(api: Arc<PowerBiApi>) -> Self {
        Self { api }
    }

    fn imports_url(&self, target: &UploadTarget) -> String {
        scoped(self.api.api_base(), target.workspace_id.as_ref(), "imports")
    }

    /// インポート開始リクエストの共通クエリ
    fn import_request(&self, target: &UploadTarget) -> HttpRequest {
        HttpRequest::post(self.imports_url(target))
            .query("datasetDisplayName", target.display_name.as_str())
            .query("nameConflict", target.conflict_policy.as_str())
            .query("skipReport", target.skip_report.to_string())
    }

    async fn start_import(
        &self,
        step: UploadStep,
        request: HttpRequest,
    ) -> Result<ImportOperation, PublishError> {
        let context = step.to_string();
        let response = self.api.send_authorized(&context, request).await?;
        expect_upload_status(step, &response, IMPORT_ACCEPTED)?;

        let dto: ImportDto = parse_json(&context, &response)?;
        debug!("Import started: {}", dto.id);
        Ok(dto.into_operation())
    }
}

/// アップロード段階の失敗はヒント付きの `Upload` エラーにする
fn expect_upload_status(
    step: UploadStep,
    response: &HttpResponse,
    accepted: &[u16],
) -> Result<(), PublishError> {
    if accepted.contains(&response.status) {
        return Ok(());
    }
    let message = extract_error_message(&response.body);
    Err(PublishError::Upload {
        step,
        status: response.status,
        hint: FailureHint::detect(&message),
        message,
    })
}

#[async_trait]
impl ImportRepository for PowerBiImportRepository {
    async fn import_file(&self, target: &UploadTarget) -> Result<ImportOperation, PublishError> {
        let request = self.import_request(target).body(RequestBody::MultipartFile {
            path: target.file_path.clone(),
            file_name: target.file_name(),
        });
        self.start_import(UploadStep::DirectImport, request).await
    }

    async fn create_temporary_upload_location(
        &self,
        workspace_id: Option<&WorkspaceId>,
    ) -> Result<String, PublishError> {
        let step = UploadStep::CreateUploadLocation;
        let context = step.to_string();
        let url = scoped(
            self.api.api_base(),
            workspace_id,
            "imports/createTemporaryUploadLocation",
        );

        let response = self
            .api
            .send_authorized(&context, HttpRequest::post(url))
            .await?;
        expect_upload_status(step, &response, LOCATION_ACCEPTED)?;

        let location: TemporaryUploadLocationDto = parse_json(&context, &response)?;
        debug!("Temporary upload location created");
        Ok(location.url)
    }

    async fn upload_to_blob(
        &self,
        upload_url: &str,
        target: &UploadTarget,
    ) -> Result<(), PublishError> {
        let step = UploadStep::BlobUpload;
        // 署名付きURLなのでベアラートークンは付けない
        let request = HttpRequest::put(upload_url)
            .header("x-ms-blob-type", "BlockBlob")
            .body(RequestBody::File {
                path: target.file_path.clone(),
                content_type: OCTET_STREAM.to_string(),
            });

        let response = self.api.send(&step.to_string(), &request).await?;
        expect_upload_status(step, &response, BLOB_ACCEPTED)?;

        debug!("Uploaded {:.2} MB to temporary storage", target.size_mb());
        Ok(())
    }

    async fn import_from_url(
        &self,
        upload_url: &str,
        target: &UploadTarget,
    ) -> Result<ImportOperation, PublishError> {
        let request = self
            .import_request(target)
            .body(RequestBody::Json(json!({ "fileUrl": upload_url })));
        self.start_import(UploadStep::ImportFromUrl, request).await
    }

    async fn get_import(
        &self,
        workspace_id: Option<&WorkspaceId>,
        import_id: &str,
    ) -> Result<ImportOperation, PublishError> {
        let url = scoped(
            self.api.api_base(),
            workspace_id,
            &format!("imports/{}", import_id),
        );
        let response = self
            .api
            .send_authorized(GET_IMPORT, HttpRequest::get(url))
            .await?;
        expect_status(GET_IMPORT, &response, &[200])?;

        let dto: ImportDto = parse_json(GET_IMPORT, &response)?;
        debug!("Import {} state: {:?}", import_id, dto.import_state);
        Ok(dto.into_operation())
    }
}
