//! CLI command definitions and dispatch.

pub mod export;
pub mod feed;
pub mod notify;
pub mod summary;
pub mod table;

use clap::{Parser, Subcommand};

use metrichub_core::config::AppConfig;
use metrichub_core::error::AppError;

use crate::output::OutputFormat;

/// MetricHub — marketing analytics dashboard engine
#[derive(Debug, Parser)]
#[command(name = "metrichub", version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the filtered, sorted, paginated campaign table
    Table(table::TableArgs),
    /// Run the simulated live update feed
    Feed(feed::FeedArgs),
    /// Notification center management
    Notifications(notify::NotifyArgs),
    /// Report export simulation
    Export(export::ExportArgs),
    /// Overview metrics and chart series
    Summary,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Table(args) => table::execute(args, &config, self.format).await,
            Commands::Feed(args) => feed::execute(args, &config).await,
            Commands::Notifications(args) => notify::execute(args, &config, self.format).await,
            Commands::Export(args) => export::execute(args, &config, self.format).await,
            Commands::Summary => summary::execute(&config, self.format).await,
        }
    }
}
