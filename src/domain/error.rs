//! # Publish Errors
//!
//! 発行ワークフローのエラー分類

use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::domain::services::failure_hint::FailureHint;

/// アップロードのどの段階で失敗したか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStep {
    DirectImport,
    CreateUploadLocation,
    BlobUpload,
    ImportFromUrl,
}

impl fmt::Display for UploadStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UploadStep::DirectImport => "Import",
            UploadStep::CreateUploadLocation => "Creating temporary upload location",
            UploadStep::BlobUpload => "Blob upload",
            UploadStep::ImportFromUrl => "Import from blob",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Workspace '{name}' not found. Available workspaces: {}", format_names(.available))]
    WorkspaceNotFound { name: String, available: Vec<String> },

    #[error(
        "Workspace name '{name}' is ambiguous: {} workspaces match (ids: {})",
        .ids.len(),
        .ids.join(", ")
    )]
    AmbiguousWorkspaceName { name: String, ids: Vec<String> },

    #[error("Invalid report file: {0}")]
    InvalidArtifact(String),

    #[error("{step} failed ({status}): {message}")]
    Upload {
        step: UploadStep,
        status: u16,
        message: String,
        hint: Option<FailureHint>,
    },

    #[error("Import {import_id} failed: {message}")]
    ImportFailed {
        import_id: String,
        message: String,
        hint: Option<FailureHint>,
    },

    #[error(
        "Import {import_id} did not complete within {}s; it may still complete on the service side",
        .timeout.as_secs()
    )]
    ImportTimeout { import_id: String, timeout: Duration },

    #[error("{context} failed ({status}): {message}")]
    Api {
        context: String,
        status: u16,
        message: String,
    },

    #[error("{context}: {message}")]
    Network { context: String, message: String },

    #[error("Unexpected response from {context}: {message}")]
    InvalidResponse { context: String, message: String },
}

impl PublishError {
    /// オペレーター向けのヒント（あれば）
    pub fn hint(&self) -> Option<FailureHint> {
        match self {
            PublishError::Upload { hint, .. } | PublishError::ImportFailed { hint, .. } => *hint,
            _ => None,
        }
    }
}

fn format_names(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
