//! Authentication Module
//!
//! Azure AD 認証関連の機能

pub mod azure_ad;

pub use azure_ad::AzureAdAuthenticator;
