//! Power BI Endpoints
//!
//! サービスのURLと組み立て

use crate::domain::entities::workspace::WorkspaceId;

pub const POWER_BI_API_BASE: &str = "https://api.powerbi.com/v1.0/myorg";
pub const AUTHORITY_HOST: &str = "https://login.microsoftonline.com";
pub const POWER_BI_SCOPE: &str = "https://analysis.windows.net/powerbi/api/.default";
pub const POWER_BI_APP_BASE: &str = "https://app.powerbi.com";

/// テナントのトークンエンドポイント
pub fn token_url(authority_host: &str, tenant_id: &str) -> String {
    format!(
        "{}/{}/oauth2/v2.0/token",
        authority_host.trim_end_matches('/'),
        tenant_id
    )
}

/// ワークスペース配下のURL（`None` は個人ワークスペース）
pub fn scoped(api_base: &str, workspace_id: Option<&WorkspaceId>, path: &str) -> String {
    let base = api_base.trim_end_matches('/');
    match workspace_id {
        Some(ws) => format!("{}/groups/{}/{}", base, ws, path),
        None => format!("{}/{}", base, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_url() {
        assert_eq!(
            token_url("https://login.microsoftonline.com/", "tenant-1"),
            "https://login.microsoftonline.com/tenant-1/oauth2/v2.0/token"
        );
    }

    #[test]
    fn test_scoped_url() {
        let ws = WorkspaceId::from("ws-1");
        assert_eq!(
            scoped(POWER_BI_API_BASE, Some(&ws), "imports"),
            "https://api.powerbi.com/v1.0/myorg/groups/ws-1/imports"
        );
        assert_eq!(
            scoped(POWER_BI_API_BASE, None, "imports/abc"),
            "https://api.powerbi.com/v1.0/myorg/imports/abc"
        );
    }
}
