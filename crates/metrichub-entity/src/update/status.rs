//! Live update status enumeration.

use serde::{Deserialize, Serialize};

/// Outcome tone of a live update, used for badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStatus {
    /// A positive event.
    Success,
    /// An event that may need attention.
    Warning,
    /// A failure event.
    Error,
}

impl UpdateStatus {
    /// All statuses, in pick order for the generator.
    pub const ALL: [UpdateStatus; 3] = [Self::Success, Self::Warning, Self::Error];

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
