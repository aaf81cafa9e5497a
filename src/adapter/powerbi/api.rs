//! Power BI API Session
//!
//! 認証付き送信とレスポンスの分類。リポジトリ実装が共有する。

use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::models::extract_error_message;
use crate::adapter::http::client::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::domain::error::PublishError;
use crate::domain::repositories::token_provider::TokenProvider;

pub struct PowerBiApi {
    api_base: String,
    transport: Arc<dyn HttpTransport>,
    token_provider: Arc<dyn TokenProvider>,
}

impl PowerBiApi {
    pub fn new(
        api_base: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            transport,
            token_provider,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// ベアラートークンを付けて送る
    ///
    /// トークンは送信ごとに取得する（キャッシュはトークンプロバイダー側）
    pub async fn send_authorized(
        &self,
        context: &str,
        request: HttpRequest,
    ) -> Result<HttpResponse, PublishError> {
        let token = self.token_provider.get_token().await?;
        self.send(context, &request.bearer(token.value())).await
    }

    /// そのまま送る（Blob PUT 用）
    pub async fn send(
        &self,
        context: &str,
        request: &HttpRequest,
    ) -> Result<HttpResponse, PublishError> {
        self.transport
            .send(request)
            .await
            .map_err(|e| transport_error(context, e))
    }
}

fn transport_error(context: &str, error: TransportError) -> PublishError {
    match error {
        TransportError::Network(message) => PublishError::Network {
            context: context.to_string(),
            message,
        },
        file_error @ TransportError::File { .. } => {
            PublishError::InvalidArtifact(file_error.to_string())
        }
    }
}

/// 期待したステータス以外は `Api` エラー
pub fn expect_status(
    context: &str,
    response: &HttpResponse,
    accepted: &[u16],
) -> Result<(), PublishError> {
    if accepted.contains(&response.status) {
        Ok(())
    } else {
        Err(PublishError::Api {
            context: context.to_string(),
            status: response.status,
            message: extract_error_message(&response.body),
        })
    }
}

pub fn parse_json<T: DeserializeOwned>(
    context: &str,
    response: &HttpResponse,
) -> Result<T, PublishError> {
    response.json().map_err(|e| PublishError::InvalidResponse {
        context: context.to_string(),
        message: e.to_string(),
    })
}
