//! Console Progress Reporter
//!
//! 進捗イベントを標準出力に表示し、同じ内容をログにも残す

use log::info;

use crate::application::reporter::{ProgressReporter, PublishEvent};
use crate::domain::entities::import_operation::ImportState;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// コンソールレポーター
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

/// イベントを1行の表示にする
pub fn render(event: &PublishEvent) -> String {
    match event {
        PublishEvent::WorkspaceResolved { name, id } => {
            format!("✓ Found workspace: {} ({})", name, id)
        }
        PublishEvent::UploadStarted {
            file_name,
            size_bytes,
            strategy,
        } => format!(
            "✓ Uploading {} ({:.1} MB, {} upload)",
            file_name,
            *size_bytes as f64 / BYTES_PER_MB,
            strategy
        ),
        PublishEvent::TemporaryLocationCreated => "✓ Temporary upload location created".to_string(),
        PublishEvent::BlobUploaded { size_bytes } => format!(
            "✓ Uploaded {:.1} MB to temporary storage",
            *size_bytes as f64 / BYTES_PER_MB
        ),
        PublishEvent::ImportStarted { import_id } => format!("✓ Import started: {}", import_id),
        PublishEvent::ImportPolled {
            state, elapsed, ..
        } => match state {
            ImportState::Succeeded | ImportState::Failed => {
                format!("  Import status: {}", state)
            }
            _ => format!("  Import status: {} ({}s elapsed)", state, elapsed.as_secs()),
        },
        PublishEvent::ImportSucceeded { import_id } => {
            format!("✓ Import completed: {}", import_id)
        }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn report(&self, event: &PublishEvent) {
        let line = render(event);
        info!("{}", line.trim_start());
        println!("{}", line);
    }
}
