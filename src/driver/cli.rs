//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::application::dto::publish_config::{
    PublishConfig, DEFAULT_IMPORT_TIMEOUT_SECS, DEFAULT_POLL_INTERVAL_SECS,
};
use crate::domain::entities::upload_target::ConflictPolicy;

fn parse_conflict(value: &str) -> Result<ConflictPolicy, String> {
    value.parse()
}

/// Power BI レポート（.pbix）を発行するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "pbix-publisher")]
#[command(about = "Publish Power BI reports (.pbix) to the Power BI service", long_about = None)]
pub struct Args {
    /// Report file to publish
    #[arg(
        short,
        long,
        visible_alias = "pbix",
        required_unless_present_any = ["list_workspaces", "list_reports", "list_datasets"]
    )]
    pub file: Option<PathBuf>,

    /// Dataset/report display name (defaults to the file name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Target workspace name (omit for My Workspace)
    #[arg(short, long, conflicts_with = "workspace_id")]
    pub workspace: Option<String>,

    /// Target workspace id
    #[arg(long)]
    pub workspace_id: Option<String>,

    /// What to do when a dataset with the same name exists
    #[arg(long, default_value = "CreateOrOverwrite", value_parser = parse_conflict)]
    pub conflict: ConflictPolicy,

    /// Import only the dataset
    #[arg(long)]
    pub skip_report: bool,

    /// Config file path (defaults to ./powerbi_config.json when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// List available workspaces and exit
    #[arg(long, conflicts_with_all = ["list_reports", "list_datasets"])]
    pub list_workspaces: bool,

    /// List reports in the selected workspace and exit
    #[arg(long, conflicts_with = "list_datasets")]
    pub list_reports: bool,

    /// List datasets in the selected workspace and exit
    #[arg(long)]
    pub list_datasets: bool,

    /// Return as soon as the import has started
    #[arg(long)]
    pub no_wait: bool,

    /// Seconds to wait for the import to complete
    #[arg(long, default_value_t = DEFAULT_IMPORT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Seconds between import status checks
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval: u64,
}

impl Args {
    pub fn publish_config(&self) -> PublishConfig {
        PublishConfig::new(
            !self.no_wait,
            Duration::from_secs(self.timeout),
            Duration::from_secs(self.poll_interval),
        )
    }
}
