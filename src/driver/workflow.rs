//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::{error, info, warn};
use std::sync::Arc;

use crate::adapter::auth::AzureAdAuthenticator;
use crate::adapter::config::Config;
use crate::adapter::http::client::{HttpTransport, ReqwestTransport};
use crate::adapter::http::retry::RetryingTransport;
use crate::adapter::powerbi::api::PowerBiApi;
use crate::adapter::reporting::ConsoleReporter;
use crate::adapter::repositories::{PowerBiImportRepository, PowerBiWorkspaceRepository};
use crate::application::reporter::ProgressReporter;
use crate::application::use_cases::list_datasets::ListDatasetsUseCase;
use crate::application::use_cases::list_reports::ListReportsUseCase;
use crate::application::use_cases::publish_report::PublishReportUseCase;
use crate::application::use_cases::resolve_workspace::ResolveWorkspaceUseCase;
use crate::domain::entities::import_operation::{
    report_web_url, ImportOperation, ImportState, PublishedResource,
};
use crate::domain::entities::upload_target::UploadTarget;
use crate::domain::entities::workspace::{Workspace, WorkspaceId};
use crate::domain::error::PublishError;

use super::cli::Args;

/// ワークフローの結果
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    Workspaces(Vec<Workspace>),
    Reports {
        workspace_id: Option<WorkspaceId>,
        reports: Vec<PublishedResource>,
    },
    Datasets {
        workspace_id: Option<WorkspaceId>,
        datasets: Vec<PublishedResource>,
    },
    Published {
        workspace_id: Option<WorkspaceId>,
        operation: ImportOperation,
    },
}

/// 結果を表示用の行にする
pub fn summary_lines(outcome: &WorkflowOutcome, app_base: &str) -> Vec<String> {
    match outcome {
        WorkflowOutcome::Workspaces(workspaces) => {
            let mut lines = vec![format!("✓ {} workspaces available:", workspaces.len())];
            lines.extend(
                workspaces
                    .iter()
                    .map(|ws| format!("  - {} ({})", ws.name, ws.id)),
            );
            lines
        }
        WorkflowOutcome::Reports { reports, .. } => {
            let mut lines = vec![format!("✓ {} reports:", reports.len())];
            lines.extend(
                reports
                    .iter()
                    .map(|report| format!("  - {} ({})", report.name, report.id)),
            );
            lines
        }
        WorkflowOutcome::Datasets { datasets, .. } => {
            let mut lines = vec![format!("✓ {} datasets:", datasets.len())];
            lines.extend(
                datasets
                    .iter()
                    .map(|dataset| format!("  - {} ({})", dataset.name, dataset.id)),
            );
            lines
        }
        WorkflowOutcome::Published {
            workspace_id,
            operation,
        } => {
            if operation.state != ImportState::Succeeded {
                return vec![
                    format!("✓ Import started: {}", operation.id),
                    "  Not waiting for completion; check the import status in the Power BI service"
                        .to_string(),
                ];
            }

            let mut lines = vec!["✓ Publish complete!".to_string()];
            if let Some(report) = operation.primary_report() {
                lines.push(format!("  Report: {} ({})", report.name, report.id));
                lines.push(format!(
                    "  URL: {}",
                    report_web_url(app_base, workspace_id.as_ref(), &report.id)
                ));
            }
            if let Some(dataset) = operation.primary_dataset() {
                lines.push(format!("  Dataset: {} ({})", dataset.name, dataset.id));
            }
            lines
        }
    }
}

/// Report Publish Workflow
pub struct PublishWorkflow {
    config: Config,
    resolve_workspace: ResolveWorkspaceUseCase<PowerBiWorkspaceRepository>,
    list_reports: ListReportsUseCase<PowerBiWorkspaceRepository>,
    list_datasets: ListDatasetsUseCase<PowerBiWorkspaceRepository>,
    publish_report: PublishReportUseCase<PowerBiImportRepository>,
}

impl PublishWorkflow {
    /// Create a new workflow with the production transport and console output
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub fn new(config: Config) -> Result<Self> {
        let transport: Arc<dyn HttpTransport> =
            Arc::new(RetryingTransport::new(Arc::new(ReqwestTransport::new()?)));
        Ok(Self::with_transport(
            config,
            transport,
            Arc::new(ConsoleReporter::new()),
        ))
    }

    /// Create a workflow instance with dependency injection
    ///
    /// トランスポートはそのまま使う（リトライが必要なら呼び出し側で包む）
    pub fn with_transport(
        config: Config,
        transport: Arc<dyn HttpTransport>,
        reporter: Arc<dyn ProgressReporter>,
    ) -> Self {
        let authenticator = Arc::new(AzureAdAuthenticator::new(
            config.credential(),
            &config.authority_host,
            transport.clone(),
        ));
        let api = Arc::new(PowerBiApi::new(
            config.api_base.clone(),
            transport,
            authenticator,
        ));

        let workspace_repo = Arc::new(PowerBiWorkspaceRepository::new(api.clone()));
        let import_repo = Arc::new(PowerBiImportRepository::new(api));

        Self {
            config,
            resolve_workspace: ResolveWorkspaceUseCase::new(workspace_repo.clone(), reporter.clone()),
            list_reports: ListReportsUseCase::new(workspace_repo.clone()),
            list_datasets: ListDatasetsUseCase::new(workspace_repo),
            publish_report: PublishReportUseCase::new(import_repo, reporter),
        }
    }

    /// 引数で選ばれた処理を実行して結果を返す
    ///
    /// 発行時はネットワークに触れる前にファイルを検証する
    pub async fn run(&self, args: &Args) -> std::result::Result<WorkflowOutcome, PublishError> {
        if args.list_workspaces {
            let workspaces = self.resolve_workspace.list().await?;
            return Ok(WorkflowOutcome::Workspaces(workspaces));
        }

        if args.list_reports {
            let workspace_id = self.resolve_target_workspace(args).await?;
            let reports = self.list_reports.execute(workspace_id.as_ref()).await?;
            return Ok(WorkflowOutcome::Reports {
                workspace_id,
                reports,
            });
        }

        if args.list_datasets {
            let workspace_id = self.resolve_target_workspace(args).await?;
            let datasets = self.list_datasets.execute(workspace_id.as_ref()).await?;
            return Ok(WorkflowOutcome::Datasets {
                workspace_id,
                datasets,
            });
        }

        let file = args.file.as_deref().ok_or_else(|| {
            PublishError::InvalidArtifact("no report file given (use --file)".to_string())
        })?;
        let target = UploadTarget::from_file(file, args.name.clone(), args.conflict, args.skip_report)?;

        let workspace_id = self.resolve_target_workspace(args).await?;
        let target = target.with_workspace(workspace_id.clone());

        let operation = self
            .publish_report
            .execute(&target, &args.publish_config())
            .await?;

        Ok(WorkflowOutcome::Published {
            workspace_id,
            operation,
        })
    }

    async fn resolve_target_workspace(
        &self,
        args: &Args,
    ) -> std::result::Result<Option<WorkspaceId>, PublishError> {
        match (&args.workspace_id, &args.workspace) {
            (Some(id), _) => Ok(Some(WorkspaceId::new(id.as_str()))),
            (None, Some(name)) => self.resolve_workspace.execute(name).await.map(Some),
            (None, None) => {
                info!("Using personal workspace (My Workspace)");
                Ok(None)
            }
        }
    }

    /// Execute the workflow and print the result
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting Power BI publisher...");

        match self.run(&args).await {
            Ok(outcome) => {
                for line in summary_lines(&outcome, &self.config.app_base) {
                    println!("{}", line);
                }
                Ok(())
            }
            Err(e) => {
                error!("{}", e);
                if let Some(hint) = e.hint() {
                    warn!("Hint: {}", hint);
                }
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP: &str = "https://app.powerbi.com";

    fn succeeded() -> ImportOperation {
        let mut op = ImportOperation::started("imp-1");
        op.state = ImportState::Succeeded;
        op.reports = vec![PublishedResource::new("r-1", "Sales")];
        op.datasets = vec![PublishedResource::new("d-1", "Sales")];
        op
    }

    #[test]
    fn test_summary_published_in_workspace() {
        let lines = summary_lines(
            &WorkflowOutcome::Published {
                workspace_id: Some(WorkspaceId::from("ws-1")),
                operation: succeeded(),
            },
            APP,
        );

        assert_eq!(lines[0], "✓ Publish complete!");
        assert!(lines.contains(&"  Report: Sales (r-1)".to_string()));
        assert!(lines.contains(&"  URL: https://app.powerbi.com/groups/ws-1/reports/r-1".to_string()));
        assert!(lines.contains(&"  Dataset: Sales (d-1)".to_string()));
    }

    #[test]
    fn test_summary_published_personal_workspace() {
        let lines = summary_lines(
            &WorkflowOutcome::Published {
                workspace_id: None,
                operation: succeeded(),
            },
            APP,
        );

        assert!(lines.contains(&"  URL: https://app.powerbi.com/reports/r-1".to_string()));
    }

    #[test]
    fn test_summary_not_waited() {
        let lines = summary_lines(
            &WorkflowOutcome::Published {
                workspace_id: None,
                operation: ImportOperation::started("imp-9"),
            },
            APP,
        );

        assert_eq!(lines[0], "✓ Import started: imp-9");
    }

    #[test]
    fn test_summary_workspaces() {
        let lines = summary_lines(
            &WorkflowOutcome::Workspaces(vec![Workspace::new("ws-1", "Sales")]),
            APP,
        );

        assert_eq!(lines, vec!["✓ 1 workspaces available:", "  - Sales (ws-1)"]);
    }

    #[test]
    fn test_summary_reports() {
        let lines = summary_lines(
            &WorkflowOutcome::Reports {
                workspace_id: None,
                reports: vec![PublishedResource::new("r-1", "Sales")],
            },
            APP,
        );

        assert_eq!(lines, vec!["✓ 1 reports:", "  - Sales (r-1)"]);
    }

    #[test]
    fn test_summary_datasets() {
        let lines = summary_lines(
            &WorkflowOutcome::Datasets {
                workspace_id: Some(WorkspaceId::from("ws-1")),
                datasets: vec![
                    PublishedResource::new("d-1", "Budget"),
                    PublishedResource::new("d-2", "Sales"),
                ],
            },
            APP,
        );

        assert_eq!(
            lines,
            vec!["✓ 2 datasets:", "  - Budget (d-1)", "  - Sales (d-2)"]
        );
    }
}
