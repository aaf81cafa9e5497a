//! # Workspace Entity
//!
//! Power BI ワークスペース（グループ）

use std::fmt;

/// ワークスペースの安定した識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkspaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// ワークスペース
///
/// 解決のたびにリモートから取得する読み取り専用の値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
}

impl Workspace {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: WorkspaceId::new(id),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_new() {
        let ws = Workspace::new("abc-123", "Sales");
        assert_eq!(ws.id.as_str(), "abc-123");
        assert_eq!(ws.name, "Sales");
    }

    #[test]
    fn test_workspace_id_display() {
        let id = WorkspaceId::from("abc-123");
        assert_eq!(id.to_string(), "abc-123");
    }
}
