//! # ImportOperation Entity
//!
//! サービス側のインポートジョブ。ローカルの値は常にリモートから取得した最新のスナップショット。

use std::fmt;

use super::workspace::WorkspaceId;

/// インポートの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportState {
    Importing,
    Publishing,
    Succeeded,
    Failed,
    Unknown,
}

impl ImportState {
    /// `importState` の値から変換（未知の値や欠落は `Unknown`）
    pub fn from_api(value: Option<&str>) -> Self {
        match value {
            Some("Importing") => ImportState::Importing,
            Some("Publishing") => ImportState::Publishing,
            Some("Succeeded") => ImportState::Succeeded,
            Some("Failed") => ImportState::Failed,
            _ => ImportState::Unknown,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ImportState::Succeeded | ImportState::Failed)
    }
}

impl fmt::Display for ImportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImportState::Importing => "Importing",
            ImportState::Publishing => "Publishing",
            ImportState::Succeeded => "Succeeded",
            ImportState::Failed => "Failed",
            ImportState::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// インポートで作成されたレポートやデータセット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedResource {
    pub id: String,
    pub name: String,
}

impl PublishedResource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// インポート操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOperation {
    pub id: String,
    pub state: ImportState,
    pub reports: Vec<PublishedResource>,
    pub datasets: Vec<PublishedResource>,
    /// サービスが報告したエラーメッセージ
    pub error_message: Option<String>,
}

impl ImportOperation {
    /// 開始直後の操作（状態はまだ分からない）
    pub fn started(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: ImportState::Unknown,
            reports: Vec::new(),
            datasets: Vec::new(),
            error_message: None,
        }
    }

    pub fn primary_report(&self) -> Option<&PublishedResource> {
        self.reports.first()
    }

    pub fn primary_dataset(&self) -> Option<&PublishedResource> {
        self.datasets.first()
    }
}

/// レポートのWeb URLを組み立てる
pub fn report_web_url(app_base: &str, workspace_id: Option<&WorkspaceId>, report_id: &str) -> String {
    let base = app_base.trim_end_matches('/');
    match workspace_id {
        Some(ws) => format!("{}/groups/{}/reports/{}", base, ws, report_id),
        None => format!("{}/reports/{}", base, report_id),
    }
}
