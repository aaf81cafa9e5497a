//! # Publish Configuration DTO
//!
//! 発行時の待機設定のData Transfer Object

use std::time::Duration;

/// 完了待ちのデフォルトタイムアウト（秒）
pub const DEFAULT_IMPORT_TIMEOUT_SECS: u64 = 300;
/// ポーリング間隔（秒）
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// 発行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// インポート完了まで待つかどうか
    pub wait_for_completion: bool,
    /// 完了待ちの上限（実時間）
    pub timeout: Duration,
    /// ポーリング間隔（固定、バックオフなし）
    pub poll_interval: Duration,
}

impl PublishConfig {
    /// 新しい発行設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use std::time::Duration;
    /// use pbix_publisher::application::dto::publish_config::PublishConfig;
    ///
    /// let config = PublishConfig::new(true, Duration::from_secs(600), Duration::from_secs(10));
    /// assert!(config.wait_for_completion);
    /// assert_eq!(config.timeout.as_secs(), 600);
    /// ```
    pub fn new(wait_for_completion: bool, timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            wait_for_completion,
            timeout,
            poll_interval,
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self::new(
            true,
            Duration::from_secs(DEFAULT_IMPORT_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PublishConfig::default();
        assert!(config.wait_for_completion);
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert_eq!(config.poll_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_no_wait_config() {
        let config = PublishConfig::new(false, Duration::from_secs(1), Duration::from_secs(1));
        assert!(!config.wait_for_completion);
    }
}
