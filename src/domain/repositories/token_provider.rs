//! # Token Provider Trait
//!
//! ベアラートークンの取得を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::credential::AccessToken;
use crate::domain::error::PublishError;

/// トークンプロバイダー
///
/// 実装は有効期限が60秒を超えて残っているトークンだけを返す。
/// 1つのインスタンスがキャッシュを専有し、ワークフローには参照で渡す。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// 使用可能なトークンを返す（必要なら再取得する）
    ///
    /// # Errors
    ///
    /// IDプロバイダーが資格情報を拒否した、または通信に失敗した場合に
    /// `PublishError::Authentication` を返す
    async fn get_token(&self) -> Result<AccessToken, PublishError>;
}
