//! Notification center CLI commands.

use chrono::Utc;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use metrichub_core::config::AppConfig;
use metrichub_core::error::AppError;
use metrichub_core::types::id::NotificationId;
use metrichub_service::DashboardSession;

use crate::output::{self, OutputFormat};

/// Arguments for notification commands
#[derive(Debug, Args)]
pub struct NotifyArgs {
    /// Notification subcommand
    #[command(subcommand)]
    pub command: NotifyCommand,
}

/// Notification subcommands
#[derive(Debug, Subcommand)]
pub enum NotifyCommand {
    /// List all notifications
    List,
    /// Mark one notification as read
    MarkRead {
        /// Notification ID
        id: NotificationId,
    },
    /// Mark every notification as read
    MarkAllRead,
    /// Remove a notification
    Dismiss {
        /// Notification ID
        id: NotificationId,
    },
}

/// Notification display row for table output
#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    /// Notification ID
    id: String,
    /// Severity
    severity: String,
    /// Title
    title: String,
    /// Message
    message: String,
    /// Relative age
    age: String,
    /// Read flag
    read: String,
}

/// Execute a notification command
pub async fn execute(
    args: &NotifyArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut session = DashboardSession::new(config);

    match &args.command {
        NotifyCommand::List => {
            print_notifications(&session, format);
        }
        NotifyCommand::MarkRead { id } => {
            session.notifications_mut().mark_read(*id)?;
            output::print_success(&format!("Notification {id} marked read"));
            print_notifications(&session, format);
        }
        NotifyCommand::MarkAllRead => {
            let changed = session.notifications_mut().mark_all_read();
            output::print_success(&format!("{changed} notification(s) marked read"));
        }
        NotifyCommand::Dismiss { id } => {
            let removed = session.notifications_mut().dismiss(*id)?;
            output::print_success(&format!("Dismissed '{}'", removed.title));
            print_notifications(&session, format);
        }
    }

    Ok(())
}

fn print_notifications(session: &DashboardSession, format: OutputFormat) {
    let now = Utc::now();
    let rows: Vec<NotificationRow> = session
        .notifications()
        .list()
        .iter()
        .map(|n| NotificationRow {
            id: n.id.to_string(),
            severity: n.severity.to_string(),
            title: n.title.clone(),
            message: n.message.clone(),
            age: n.relative_age(now),
            read: if n.read { "yes" } else { "no" }.to_string(),
        })
        .collect();

    output::print_list(&rows, format);

    if format == OutputFormat::Table {
        output::print_note(&format!(
            "{} unread",
            session.notifications().unread_count()
        ));
    }
}
