//! Notification CRUD over an in-memory, ordered list.
//!
//! All mutation targets a [`NotificationId`], never a list index, so
//! operations stay correct while newer notifications are prepended.

use chrono::Duration;
use tracing::debug;

use metrichub_core::types::id::NotificationId;
use metrichub_core::{AppError, AppResult};
use metrichub_entity::notification::{Notification, Severity};

/// Ordered list of notifications with read/dismiss operations.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
}

impl NotificationCenter {
    /// Create an empty notification center.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a center pre-populated with the dashboard seed data,
    /// newest first.
    pub fn with_seed_data() -> Self {
        let entries = vec![
            Notification::seeded(
                Severity::Success,
                "Campaign Completed",
                "Summer Sale 2024 campaign has reached its target with 125% performance.",
                Duration::minutes(2),
                false,
            ),
            Notification::seeded(
                Severity::Warning,
                "Budget Alert",
                "Brand Awareness Q1 campaign is approaching 80% of allocated budget.",
                Duration::minutes(15),
                false,
            ),
            Notification::seeded(
                Severity::Info,
                "New User Signup",
                "John Smith from TechCorp has signed up for premium analytics.",
                Duration::hours(1),
                true,
            ),
            Notification::seeded(
                Severity::Success,
                "Revenue Milestone",
                "Monthly revenue target achieved! $1.2M in August 2024.",
                Duration::hours(3),
                true,
            ),
            Notification::seeded(
                Severity::Info,
                "System Update",
                "New analytics features have been deployed. Check out the enhanced reporting.",
                Duration::hours(5),
                true,
            ),
            Notification::seeded(
                Severity::Success,
                "Performance Boost",
                "Conversion rate improved by 15% across all active campaigns.",
                Duration::days(1),
                true,
            ),
        ];
        Self { entries }
    }

    /// All notifications, newest first.
    pub fn list(&self) -> &[Notification] {
        &self.entries
    }

    /// Number of unread notifications.
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| n.is_unread()).count()
    }

    /// Prepend a new notification.
    pub fn push(&mut self, notification: Notification) {
        self.entries.insert(0, notification);
    }

    /// Mark one notification as read.
    pub fn mark_read(&mut self, id: NotificationId) -> AppResult<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found(format!("Notification {id} not found")))?;
        entry.read = true;
        Ok(())
    }

    /// Mark every notification as read; returns how many changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for entry in &mut self.entries {
            if !entry.read {
                entry.read = true;
                changed += 1;
            }
        }
        debug!(changed, "Marked all notifications read");
        changed
    }

    /// Remove one notification, returning it.
    pub fn dismiss(&mut self, id: NotificationId) -> AppResult<Notification> {
        let index = self
            .entries
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| AppError::not_found(format!("Notification {id} not found")))?;
        Ok(self.entries.remove(index))
    }
}
