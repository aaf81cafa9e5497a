//! Azure AD Authentication
//!
//! クライアント資格情報フローでベアラートークンを取得し、失効60秒前までキャッシュする

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::adapter::http::client::{HttpRequest, HttpTransport, RequestBody};
use crate::adapter::powerbi::endpoints::{token_url, POWER_BI_SCOPE};
use crate::adapter::powerbi::models::{extract_error_message, TokenResponse};
use crate::domain::entities::credential::{AccessToken, Credential};
use crate::domain::error::PublishError;
use crate::domain::repositories::token_provider::TokenProvider;

/// Azure AD 認証
///
/// キャッシュはロックで守られ、同時に呼ばれても取得要求は1つずつ送られる
pub struct AzureAdAuthenticator {
    credential: Credential,
    transport: Arc<dyn HttpTransport>,
    token_url: String,
    cached: Mutex<Option<AccessToken>>,
}

impl AzureAdAuthenticator {
    /// # Arguments
    ///
    /// * `credential` - サービスプリンシパルの資格情報
    /// * `authority_host` - 例: `https://login.microsoftonline.com`
    /// * `transport` - 送信に使うトランスポート
    pub fn new(credential: Credential, authority_host: &str, transport: Arc<dyn HttpTransport>) -> Self {
        let token_url = token_url(authority_host, &credential.tenant_id);
        Self {
            credential,
            transport,
            token_url,
            cached: Mutex::new(None),
        }
    }

    async fn request_token(&self) -> Result<AccessToken, PublishError> {
        debug!(
            "Requesting token for client {}...",
            self.credential.client_id_prefix()
        );

        let request = HttpRequest::post(&self.token_url).body(RequestBody::Form(vec![
            ("grant_type".to_string(), "client_credentials".to_string()),
            ("client_id".to_string(), self.credential.client_id.clone()),
            ("client_secret".to_string(), self.credential.client_secret.clone()),
            ("scope".to_string(), POWER_BI_SCOPE.to_string()),
        ]));

        let response = self
            .transport
            .send(&request)
            .await
            .map_err(|e| PublishError::Authentication(e.to_string()))?;

        if response.status != 200 {
            return Err(PublishError::Authentication(format!(
                "token endpoint returned {}: {}",
                response.status,
                extract_error_message(&response.body)
            )));
        }

        let token: TokenResponse = response.json().map_err(|e| {
            PublishError::Authentication(format!("malformed token response: {}", e))
        })?;

        let expires_in = token.expires_in;
        let access_token = AccessToken::expiring_in(token.access_token, Utc::now(), expires_in)
            .ok_or_else(|| {
                PublishError::Authentication(format!(
                    "token lifetime out of range: expires_in={}",
                    expires_in
                ))
            })?;

        info!("Authenticated (token valid for {}s)", expires_in);
        Ok(access_token)
    }
}

#[async_trait]
impl TokenProvider for AzureAdAuthenticator {
    async fn get_token(&self) -> Result<AccessToken, PublishError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.is_usable_at(Utc::now()) {
                return Ok(token.clone());
            }
            debug!("Cached token expires at {}, refreshing", token.expires_at());
        }

        let token = self.request_token().await?;
        *cached = Some(token.clone());
        Ok(token)
    }
}
