//! pbix-publisher - Power BI Report Publisher
//!
//! Power BI レポート（.pbix）を Power BI サービスに発行

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;

use pbix_publisher::adapter::config::Config;
use pbix_publisher::driver::{Args, PublishWorkflow};

/// ログの初期化（`--log-file` があればそのファイルへ）
#[cfg_attr(coverage_nightly, coverage(off))]
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.as_deref())?;

    // Load configuration
    let config = Config::load(args.config.as_deref())?;

    // Create workflow with injected dependencies
    let workflow = PublishWorkflow::new(config)?;

    workflow.execute(args).await
}
