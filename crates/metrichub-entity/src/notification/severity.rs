//! Notification severity enumeration.

use serde::{Deserialize, Serialize};

/// Severity of a notification, used for badge styling and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A positive outcome (milestone reached, campaign completed).
    Success,
    /// Something needs attention soon (budget threshold).
    Warning,
    /// Informational only.
    Info,
    /// Something went wrong.
    Error,
}

impl Severity {
    /// Return the severity as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
