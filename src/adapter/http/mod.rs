//! HTTP Transport
//!
//! 外部サービスへのHTTP送信とリトライ

pub mod client;
pub mod retry;

pub use client::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody, ReqwestTransport, TransportError};
pub use retry::{RetryPolicy, RetryingTransport};
