//! # Workspace Matcher Service
//!
//! 表示名からワークスペースを特定するビジネスルール

use crate::domain::entities::workspace::Workspace;
use crate::domain::error::PublishError;

/// ワークスペース名照合サービス
pub struct WorkspaceMatcher;

impl WorkspaceMatcher {
    /// 名前が大文字小文字を無視して完全一致するワークスペースを返す
    ///
    /// # Arguments
    ///
    /// * `name` - 探すワークスペース名
    /// * `workspaces` - 資格情報から見える全ワークスペース
    ///
    /// # Errors
    ///
    /// - 一致なし: `WorkspaceNotFound`（利用可能な名前の一覧付き）
    /// - 複数一致: `AmbiguousWorkspaceName`（一致したIDの一覧付き）
    pub fn find<'a>(name: &str, workspaces: &'a [Workspace]) -> Result<&'a Workspace, PublishError> {
        let wanted = name.to_lowercase();
        let matches: Vec<&Workspace> = workspaces
            .iter()
            .filter(|ws| ws.name.to_lowercase() == wanted)
            .collect();

        match matches.as_slice() {
            [single] => Ok(*single),
            [] => Err(PublishError::WorkspaceNotFound {
                name: name.to_string(),
                available: workspaces.iter().map(|ws| ws.name.clone()).collect(),
            }),
            many => Err(PublishError::AmbiguousWorkspaceName {
                name: name.to_string(),
                ids: many.iter().map(|ws| ws.id.to_string()).collect(),
            }),
        }
    }
}
