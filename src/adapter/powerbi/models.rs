use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::entities::import_operation::{ImportOperation, ImportState, PublishedResource};
use crate::domain::entities::workspace::Workspace;

/// `expires_in` が無い場合の有効期間（秒）
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;

fn default_token_lifetime() -> u64 {
    DEFAULT_TOKEN_LIFETIME_SECS
}

// Custom deserializer: accept `expires_in` as a number or a numeric string.
// Some identity endpoints return "3599" instead of 3599.
fn deserialize_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

// Token endpoint response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(
        default = "default_token_lifetime",
        deserialize_with = "deserialize_number_or_string"
    )]
    pub expires_in: u64,
}

// OData collection envelope: {"value": [...]}
#[derive(Debug, Deserialize)]
pub struct ODataList<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct GroupDto {
    pub id: String,
    pub name: String,
}

impl From<GroupDto> for Workspace {
    fn from(dto: GroupDto) -> Self {
        Workspace::new(dto.id, dto.name)
    }
}

// Reports and datasets share the id/name shape
#[derive(Debug, Deserialize)]
pub struct ResourceDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl From<ResourceDto> for PublishedResource {
    fn from(dto: ResourceDto) -> Self {
        PublishedResource::new(dto.id, dto.name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDto {
    pub id: String,
    pub import_state: Option<String>,
    #[serde(default)]
    pub reports: Vec<ResourceDto>,
    #[serde(default)]
    pub datasets: Vec<ResourceDto>,
    pub error: Option<Value>,
}

impl ImportDto {
    pub fn into_operation(self) -> ImportOperation {
        ImportOperation {
            state: ImportState::from_api(self.import_state.as_deref()),
            error_message: self.error.as_ref().map(describe_error),
            reports: self.reports.into_iter().map(Into::into).collect(),
            datasets: self.datasets.into_iter().map(Into::into).collect(),
            id: self.id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TemporaryUploadLocationDto {
    pub url: String,
}

/// インポートの `error` を1行のメッセージにする
///
/// `message` → `details.message` → `code` の順に探し、どれも無ければJSONのまま
fn describe_error(error: &Value) -> String {
    if let Some(text) = error.as_str() {
        return text.to_string();
    }
    let lookup = |pointer: &str| error.pointer(pointer).and_then(Value::as_str);
    lookup("/message")
        .or_else(|| lookup("/details/message"))
        .or_else(|| lookup("/code"))
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}

/// エラーレスポンス本体からメッセージを取り出す
///
/// `{"error": {"message": ...}}` 形式ならその message、それ以外は本体をそのまま返す
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .or_else(|| value.pointer("/error_description"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
