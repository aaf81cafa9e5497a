//! # Credential & AccessToken
//!
//! サービスプリンシパルの資格情報とベアラートークン

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// トークンを再利用するために必要な残り有効期間（秒）
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// サービスプリンシパルの資格情報
///
/// プロセスの生存期間中は不変。設定ローダーから供給される。
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

impl Credential {
    /// 新しい資格情報を作成
    pub fn new(tenant_id: String, client_id: String, client_secret: String) -> Self {
        Self {
            tenant_id,
            client_id,
            client_secret,
        }
    }

    /// ログ出力用に短縮したクライアントID
    pub fn client_id_prefix(&self) -> &str {
        let end = self
            .client_id
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.client_id.len());
        &self.client_id[..end]
    }
}

// シークレットをログに出さない
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// ベアラートークン
///
/// 更新時は置き換えられる（インプレースで変更しない）
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: String, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    /// `now` から `lifetime_secs` 秒後に失効するトークンを作成
    ///
    /// 失効時刻が表現できない（`DateTime` の範囲外）場合は `None`
    pub fn expiring_in(value: String, now: DateTime<Utc>, lifetime_secs: u64) -> Option<Self> {
        let lifetime = Duration::try_seconds(i64::try_from(lifetime_secs).ok()?)?;
        let expires_at = now.checked_add_signed(lifetime)?;
        Some(Self::new(value, expires_at))
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// 残り有効期間が60秒を超えている場合に `true`
    ///
    /// # 例
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use pbix_publisher::domain::entities::credential::AccessToken;
    ///
    /// let now = Utc::now();
    /// let fresh = AccessToken::new("t".to_string(), now + Duration::seconds(61));
    /// assert!(fresh.is_usable_at(now));
    ///
    /// let stale = AccessToken::new("t".to_string(), now + Duration::seconds(60));
    /// assert!(!stale.is_usable_at(now));
    /// ```
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - now > Duration::seconds(TOKEN_REFRESH_MARGIN_SECS)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"***")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
