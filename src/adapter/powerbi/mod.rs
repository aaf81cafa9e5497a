//! Power BI Adapter Modules
//!
//! Power BI REST API のURL、ワイヤーフォーマット、認証付き送信

pub mod api;
pub mod endpoints;
pub mod models;

pub use api::PowerBiApi;
