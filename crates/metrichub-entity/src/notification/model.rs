//! Notification entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use metrichub_core::types::id::NotificationId;

use super::severity::Severity;

/// A notification shown in the dashboard notification center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// Severity level.
    pub severity: Severity,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// Whether the user has read this notification.
    pub read: bool,
}

impl Notification {
    /// Create a new unread notification stamped now.
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
            read: false,
        }
    }

    /// Create a seed notification backdated by the given age.
    pub fn seeded(
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
        age: Duration,
        read: bool,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title: title.into(),
            message: message.into(),
            created_at: Utc::now() - age,
            read,
        }
    }

    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.read
    }

    /// Human-readable age relative to `now` ("2 minutes ago").
    pub fn relative_age(&self, now: DateTime<Utc>) -> String {
        let elapsed = now - self.created_at;
        if elapsed < Duration::minutes(1) {
            "just now".to_string()
        } else if elapsed < Duration::hours(1) {
            plural(elapsed.num_minutes(), "minute")
        } else if elapsed < Duration::days(1) {
            plural(elapsed.num_hours(), "hour")
        } else {
            plural(elapsed.num_days(), "day")
        }
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
