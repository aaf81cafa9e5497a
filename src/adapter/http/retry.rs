//! HTTP Retry Logic
//!
//! レート制限（429）とネットワークエラーのリトライ。
//! 全ての送信に同じポリシーを適用するため、トランスポートのデコレーターとして実装する。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use std::sync::Arc;
use std::time::Duration;

use super::client::{HttpRequest, HttpResponse, HttpTransport, TransportError};

pub const MAX_RETRIES: u32 = 3; // 初回を含めて最大4回送信
pub const BASE_RETRY_DELAY_SECS: u64 = 2;
pub const TOO_MANY_REQUESTS: u16 = 429;

/// Calculate retry delay (linear backoff unless the server said otherwise)
///
/// `attempt` は失敗した送信の回数（1始まり）
pub fn calculate_retry_delay(
    base_delay: Duration,
    attempt: u32,
    retry_after: Option<Duration>,
) -> Duration {
    retry_after.unwrap_or(base_delay * attempt)
}

/// Check if a status code should be retried
///
/// 429 以外の 4xx/5xx はリトライしない
pub fn is_retryable_status(status: u16) -> bool {
    status == TOO_MANY_REQUESTS
}

/// Parse a `Retry-After` header (delta-seconds or HTTP-date)
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    let value = value.trim();
    if let Ok(secs) = value.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }
    let at = DateTime::parse_from_rfc2822(value).ok()?.with_timezone(&Utc);
    Some((at - Utc::now()).to_std().unwrap_or(Duration::ZERO))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            base_delay: Duration::from_secs(BASE_RETRY_DELAY_SECS),
        }
    }
}

/// リトライ付きトランスポート
///
/// リトライを使い切った 429 はエラーにせずそのまま返し、呼び出し側の分類に任せる
pub struct RetryingTransport {
    inner: Arc<dyn HttpTransport>,
    policy: RetryPolicy,
}

impl RetryingTransport {
    pub fn new(inner: Arc<dyn HttpTransport>) -> Self {
        Self::with_policy(inner, RetryPolicy::default())
    }

    pub fn with_policy(inner: Arc<dyn HttpTransport>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl HttpTransport for RetryingTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let can_retry = attempt <= self.policy.max_retries;

            let delay = match self.inner.send(request).await {
                Ok(response) if can_retry && is_retryable_status(response.status) => {
                    let delay =
                        calculate_retry_delay(self.policy.base_delay, attempt, response.retry_after);
                    warn!(
                        "Rate limited by {}, retrying in {}s (retry {}/{})",
                        request.url,
                        delay.as_secs(),
                        attempt,
                        self.policy.max_retries
                    );
                    delay
                }
                Err(e) if can_retry && e.is_retryable() => {
                    let delay = calculate_retry_delay(self.policy.base_delay, attempt, None);
                    warn!(
                        "Request to {} failed: {}, retrying in {}s (retry {}/{})",
                        request.url,
                        e,
                        delay.as_secs(),
                        attempt,
                        self.policy.max_retries
                    );
                    delay
                }
                result => return result,
            };

            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::http::client::MockHttpTransport;
    use tokio::time::Instant;

    fn retrying(mock: MockHttpTransport) -> RetryingTransport {
        RetryingTransport::new(Arc::new(mock))
    }

    fn request() -> HttpRequest {
        HttpRequest::get("https://api.example/groups")
    }

    #[test]
    fn test_calculate_retry_delay_linear() {
        let base = Duration::from_secs(2);
        assert_eq!(calculate_retry_delay(base, 1, None), Duration::from_secs(2));
        assert_eq!(calculate_retry_delay(base, 2, None), Duration::from_secs(4));
        assert_eq!(calculate_retry_delay(base, 3, None), Duration::from_secs(6));
    }

    #[test]
    fn test_calculate_retry_delay_honors_retry_after() {
        let base = Duration::from_secs(2);
        assert_eq!(
            calculate_retry_delay(base, 3, Some(Duration::from_secs(1))),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn test_is_retryable_status() {
        assert!(is_retryable_status(429));
        assert!(!is_retryable_status(400));
        assert!(!is_retryable_status(401));
        assert!(!is_retryable_status(403));
        assert!(!is_retryable_status(500));
        assert!(!is_retryable_status(503));
    }

    #[test]
    fn test_parse_retry_after_seconds() {
        assert_eq!(parse_retry_after("7"), Some(Duration::from_secs(7)));
        assert_eq!(parse_retry_after(" 0 "), Some(Duration::ZERO));
        assert_eq!(parse_retry_after("soon"), None);
    }

    #[test]
    fn test_parse_retry_after_past_date_is_zero() {
        assert_eq!(
            parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"),
            Some(Duration::ZERO)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_rate_limits_then_success() {
        let mut mock = MockHttpTransport::new();
        let mut calls = 0;
        mock.expect_send().times(4).returning(move |_| {
            calls += 1;
            if calls <= 3 {
                Ok(HttpResponse::new(429, "Too Many Requests"))
            } else {
                Ok(HttpResponse::new(200, "{}"))
            }
        });
        let started = Instant::now();

        let response = retrying(mock).send(&request()).await.unwrap();

        assert_eq!(response.status, 200);
        // 2s + 4s + 6s
        assert_eq!(started.elapsed(), Duration::from_secs(12));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_exhausted_returns_last_response() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .times(4)
            .returning(|_| Ok(HttpResponse::new(429, "Too Many Requests")));

        let response = retrying(mock).send(&request()).await.unwrap();

        assert_eq!(response.status, 429);
    }

    #[tokio::test(start_paused = true)]
    async fn test_forbidden_is_not_retried() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(HttpResponse::new(403, "Forbidden")));

        let response = retrying(mock).send(&request()).await.unwrap();

        assert_eq!(response.status, 403);
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_error_is_not_retried() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(HttpResponse::new(500, "Internal Server Error")));

        let response = retrying(mock).send(&request()).await.unwrap();

        assert_eq!(response.status, 500);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_is_honored() {
        let mut mock = MockHttpTransport::new();
        let mut calls = 0;
        mock.expect_send().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(HttpResponse::new(429, "").with_retry_after(Duration::from_secs(30)))
            } else {
                Ok(HttpResponse::new(200, "{}"))
            }
        });
        let started = Instant::now();

        retrying(mock).send(&request()).await.unwrap();

        assert_eq!(started.elapsed(), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_network_error_is_retried() {
        let mut mock = MockHttpTransport::new();
        let mut calls = 0;
        mock.expect_send().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(TransportError::Network("connection reset".to_string()))
            } else {
                Ok(HttpResponse::new(200, "{}"))
            }
        });

        let response = retrying(mock).send(&request()).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test(start_paused = true)]
    async fn test_network_error_exhausted() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .times(4)
            .returning(|_| Err(TransportError::Network("connection refused".to_string())));

        let result = retrying(mock).send(&request()).await;

        assert!(matches!(result, Err(TransportError::Network(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_file_error_is_not_retried() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send().times(1).returning(|_| {
            Err(TransportError::File {
                path: "/missing.pbix".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        });

        let result = retrying(mock).send(&request()).await;

        assert!(matches!(result, Err(TransportError::File { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_policy_without_retries() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(HttpResponse::new(429, "")));
        let transport = RetryingTransport::with_policy(
            Arc::new(mock),
            RetryPolicy {
                max_retries: 0,
                base_delay: Duration::from_secs(2),
            },
        );

        let response = transport.send(&request()).await.unwrap();

        assert_eq!(response.status, 429);
    }
}
