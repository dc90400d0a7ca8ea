//! Report export simulation commands.

use std::time::Duration;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use metrichub_core::config::AppConfig;
use metrichub_core::error::AppError;
use metrichub_entity::export::ExportKind;
use metrichub_service::DashboardSession;

use crate::output::{self, OutputFormat};

/// Arguments for export commands
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export subcommand
    #[command(subcommand)]
    pub command: ExportCommand,
}

/// Export subcommands
#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    /// List the export history
    List,
    /// Request a new export and wait for its simulated completion
    Request {
        /// Export kind (pdf|csv)
        kind: ExportKind,
        /// Return immediately instead of waiting for completion
        #[arg(long)]
        no_wait: bool,
    },
}

/// Export display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ExportRow {
    /// File name
    file: String,
    /// Kind
    kind: String,
    /// Size label
    size: String,
    /// Requested timestamp
    requested: String,
    /// Status
    status: String,
}

/// Execute an export command
pub async fn execute(
    args: &ExportArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut session = DashboardSession::new(config);

    match &args.command {
        ExportCommand::List => {
            print_history(&session, format).await;
        }
        ExportCommand::Request { kind, no_wait } => {
            let id = session.exports().request(*kind).await;
            output::print_success(&format!("Export {id} requested"));

            if !*no_wait {
                // Give the simulated completion a little headroom.
                tokio::time::sleep(Duration::from_millis(
                    config.export.completion_delay_ms + 50,
                ))
                .await;
            }

            print_history(&session, format).await;
        }
    }

    session.shutdown().await;
    Ok(())
}

async fn print_history(session: &DashboardSession, format: OutputFormat) {
    let rows: Vec<ExportRow> = session
        .exports()
        .history()
        .await
        .iter()
        .map(|e| ExportRow {
            file: e.file_name.clone(),
            kind: e.kind.to_string(),
            size: e.size_label.clone(),
            requested: e.requested_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            status: e.status.to_string(),
        })
        .collect();

    output::print_list(&rows, format);
}
