//! # UploadTarget Value Object
//!
//! アップロード対象のレポートファイルと発行先、アップロード方式の選択

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::workspace::WorkspaceId;
use crate::domain::error::PublishError;

/// 直接アップロードできる最大サイズ（1 GiB）
pub const LARGE_FILE_THRESHOLD_BYTES: u64 = 1024 * 1024 * 1024;

/// レポートファイルの拡張子
pub const REPORT_FILE_EXTENSION: &str = "pbix";

/// 名前衝突時の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    #[default]
    CreateOrOverwrite,
    Abort,
    Overwrite,
    Ignore,
}

impl ConflictPolicy {
    pub const ALL: [ConflictPolicy; 4] = [
        ConflictPolicy::CreateOrOverwrite,
        ConflictPolicy::Abort,
        ConflictPolicy::Overwrite,
        ConflictPolicy::Ignore,
    ];

    /// `nameConflict` クエリパラメータの値
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictPolicy::CreateOrOverwrite => "CreateOrOverwrite",
            ConflictPolicy::Abort => "Abort",
            ConflictPolicy::Overwrite => "Overwrite",
            ConflictPolicy::Ignore => "Ignore",
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|p| p.as_str()).collect();
                format!(
                    "unknown conflict policy '{}' (expected one of: {})",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// アップロード方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStrategy {
    /// multipart POST 1回
    Direct,
    /// 一時アップロード先 → Blob PUT → URL からインポート
    Staged,
}

impl UploadStrategy {
    /// ファイルサイズだけで方式を決める
    ///
    /// # 例
    ///
    /// ```
    /// use pbix_publisher::domain::entities::upload_target::{
    ///     UploadStrategy, LARGE_FILE_THRESHOLD_BYTES,
    /// };
    ///
    /// assert_eq!(UploadStrategy::for_size(LARGE_FILE_THRESHOLD_BYTES), UploadStrategy::Direct);
    /// assert_eq!(UploadStrategy::for_size(LARGE_FILE_THRESHOLD_BYTES + 1), UploadStrategy::Staged);
    /// ```
    pub fn for_size(size_bytes: u64) -> Self {
        if size_bytes > LARGE_FILE_THRESHOLD_BYTES {
            UploadStrategy::Staged
        } else {
            UploadStrategy::Direct
        }
    }
}

impl fmt::Display for UploadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStrategy::Direct => f.write_str("direct"),
            UploadStrategy::Staged => f.write_str("staged"),
        }
    }
}

/// アップロード対象
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub file_path: PathBuf,
    pub display_name: String,
    /// `None` は個人ワークスペース（My Workspace）
    pub workspace_id: Option<WorkspaceId>,
    pub conflict_policy: ConflictPolicy,
    pub skip_report: bool,
    /// 検証時点のファイルサイズ
    pub size_bytes: u64,
}

impl UploadTarget {
    /// レポートファイルを検証してアップロード対象を作成します。
    ///
    /// 表示名が指定されない場合はファイル名（拡張子なし）を使う。
    ///
    /// # Errors
    ///
    /// ファイルが存在しない、または `.pbix` でない場合に
    /// `PublishError::InvalidArtifact` を返す
    pub fn from_file(
        file_path: &Path,
        display_name: Option<String>,
        conflict_policy: ConflictPolicy,
        skip_report: bool,
    ) -> Result<Self, PublishError> {
        let metadata = std::fs::metadata(file_path).map_err(|_| {
            PublishError::InvalidArtifact(format!("file not found: {}", file_path.display()))
        })?;

        if !metadata.is_file() {
            return Err(PublishError::InvalidArtifact(format!(
                "not a regular file: {}",
                file_path.display()
            )));
        }

        let has_report_extension = file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(REPORT_FILE_EXTENSION))
            .unwrap_or(false);
        if !has_report_extension {
            return Err(PublishError::InvalidArtifact(format!(
                "file must be a .{} file: {}",
                REPORT_FILE_EXTENSION,
                file_path.display()
            )));
        }

        let display_name = match display_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => file_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default(),
        };

        Ok(Self {
            file_path: file_path.to_path_buf(),
            display_name,
            workspace_id: None,
            conflict_policy,
            skip_report,
            size_bytes: metadata.len(),
        })
    }

    /// 発行先ワークスペースを設定
    pub fn with_workspace(mut self, workspace_id: Option<WorkspaceId>) -> Self {
        self.workspace_id = workspace_id;
        self
    }

    /// multipart に載せるファイル名
    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| format!("{}.{}", self.display_name, REPORT_FILE_EXTENSION))
    }

    pub fn strategy(&self) -> UploadStrategy {
        UploadStrategy::for_size(self.size_bytes)
    }

    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_report(dir: &TempDir, name: &str, size: u64) -> PathBuf {
        let path = dir.path().join(name);
        let file = fs::File::create(&path).unwrap();
        file.set_len(size).unwrap();
        path
    }

    #[test]
    fn test_strategy_at_threshold_is_direct() {
        assert_eq!(
            UploadStrategy::for_size(LARGE_FILE_THRESHOLD_BYTES),
            UploadStrategy::Direct
        );
    }

    #[test]
    fn test_strategy_one_byte_over_threshold_is_staged() {
        assert_eq!(
            UploadStrategy::for_size(LARGE_FILE_THRESHOLD_BYTES + 1),
            UploadStrategy::Staged
        );
    }

    #[test]
    fn test_strategy_small_and_empty_files_are_direct() {
        assert_eq!(UploadStrategy::for_size(0), UploadStrategy::Direct);
        assert_eq!(
            UploadStrategy::for_size(50 * 1024 * 1024),
            UploadStrategy::Direct
        );
    }

    #[test]
    fn test_conflict_policy_round_trip_names() {
        assert_eq!(
            "CreateOrOverwrite".parse::<ConflictPolicy>().unwrap(),
            ConflictPolicy::CreateOrOverwrite
        );
        assert_eq!("abort".parse::<ConflictPolicy>().unwrap(), ConflictPolicy::Abort);
        assert_eq!(ConflictPolicy::Ignore.to_string(), "Ignore");
        assert_eq!(ConflictPolicy::default(), ConflictPolicy::CreateOrOverwrite);
    }

    #[test]
    fn test_conflict_policy_unknown() {
        let err = "Replace".parse::<ConflictPolicy>().unwrap_err();
        assert!(err.contains("Replace"));
        assert!(err.contains("CreateOrOverwrite"));
    }

    #[test]
    fn test_from_file_defaults_display_name_to_stem() {
        let dir = TempDir::new().unwrap();
        let path = create_report(&dir, "Quarterly Sales.pbix", 1024);

        let target =
            UploadTarget::from_file(&path, None, ConflictPolicy::CreateOrOverwrite, false)
                .unwrap();

        assert_eq!(target.display_name, "Quarterly Sales");
        assert_eq!(target.file_name(), "Quarterly Sales.pbix");
        assert_eq!(target.size_bytes, 1024);
        assert!(target.workspace_id.is_none());
        assert_eq!(target.strategy(), UploadStrategy::Direct);
    }

    #[test]
    fn test_from_file_keeps_explicit_name() {
        let dir = TempDir::new().unwrap();
        let path = create_report(&dir, "report.PBIX", 10);

        let target = UploadTarget::from_file(
            &path,
            Some("Board Pack".to_string()),
            ConflictPolicy::Abort,
            true,
        )
        .unwrap()
        .with_workspace(Some(WorkspaceId::from("ws-1")));

        assert_eq!(target.display_name, "Board Pack");
        assert_eq!(target.conflict_policy, ConflictPolicy::Abort);
        assert!(target.skip_report);
        assert_eq!(target.workspace_id, Some(WorkspaceId::from("ws-1")));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.pbix");

        let result = UploadTarget::from_file(&path, None, ConflictPolicy::default(), false);

        assert!(matches!(result, Err(PublishError::InvalidArtifact(_))));
    }

    #[test]
    fn test_from_file_wrong_extension() {
        let dir = TempDir::new().unwrap();
        let path = create_report(&dir, "report.xlsx", 10);

        let result = UploadTarget::from_file(&path, None, ConflictPolicy::default(), false);

        match result {
            Err(PublishError::InvalidArtifact(message)) => assert!(message.contains(".pbix")),
            other => panic!("expected InvalidArtifact, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_large_file_is_staged() {
        let dir = TempDir::new().unwrap();
        let path = create_report(&dir, "huge.pbix", LARGE_FILE_THRESHOLD_BYTES + 1);

        let target =
            UploadTarget::from_file(&path, None, ConflictPolicy::default(), false).unwrap();

        assert_eq!(target.strategy(), UploadStrategy::Staged);
    }
}
