//! # Failure Hint Service
//!
//! サービスのエラーメッセージから、オペレーター向けの対処ヒントを推定

use std::fmt;

/// 対処ヒント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureHint {
    Capacity,
    Permission,
    Dataset,
}

impl FailureHint {
    /// メッセージに含まれるキーワードからヒントを推定します。
    ///
    /// 大文字小文字は区別せず、capacity → permission → dataset の順に判定する。
    ///
    /// # 例
    ///
    /// ```
    /// use pbix_publisher::domain::services::failure_hint::FailureHint;
    ///
    /// assert_eq!(FailureHint::detect("Insufficient Capacity"), Some(FailureHint::Capacity));
    /// assert_eq!(FailureHint::detect("Unexpected error"), None);
    /// ```
    pub fn detect(message: &str) -> Option<Self> {
        let lower = message.to_lowercase();
        if lower.contains("capacity") {
            Some(FailureHint::Capacity)
        } else if lower.contains("permission") {
            Some(FailureHint::Permission)
        } else if lower.contains("dataset") {
            Some(FailureHint::Dataset)
        } else {
            None
        }
    }
}

impl fmt::Display for FailureHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FailureHint::Capacity => "Workspace may not have sufficient capacity",
            FailureHint::Permission => {
                "Service principal may lack permissions. Required: Workspace Admin/Member"
            }
            FailureHint::Dataset => "Dataset may have issues. Check data source configurations",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_capacity() {
        assert_eq!(
            FailureHint::detect("The workspace CAPACITY is exhausted"),
            Some(FailureHint::Capacity)
        );
    }

    #[test]
    fn test_detect_permission() {
        assert_eq!(
            FailureHint::detect("User does not have permission"),
            Some(FailureHint::Permission)
        );
    }

    #[test]
    fn test_detect_dataset() {
        assert_eq!(
            FailureHint::detect("Dataset refresh failed"),
            Some(FailureHint::Dataset)
        );
    }

    #[test]
    fn test_detect_priority_order() {
        assert_eq!(
            FailureHint::detect("dataset exceeds capacity"),
            Some(FailureHint::Capacity)
        );
        assert_eq!(
            FailureHint::detect("no permission on dataset"),
            Some(FailureHint::Permission)
        );
    }

    #[test]
    fn test_detect_none() {
        assert_eq!(FailureHint::detect("PowerBIEntityNotFound"), None);
        assert_eq!(FailureHint::detect(""), None);
    }

    #[test]
    fn test_display_permission_mentions_roles() {
        assert!(FailureHint::Permission.to_string().contains("Admin/Member"));
    }
}
