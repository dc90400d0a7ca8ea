//! Campaign status enumeration and its filter selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use metrichub_core::AppError;

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Currently running and spending budget.
    Active,
    /// Temporarily suspended.
    Paused,
    /// Finished its scheduled run.
    Completed,
}

impl CampaignStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status filter selector. `All` is the inactive sentinel meaning "do not
/// filter on this dimension".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSelect {
    /// No status filtering.
    All,
    /// Only active campaigns.
    Active,
    /// Only paused campaigns.
    Paused,
    /// Only completed campaigns.
    Completed,
}

impl Default for StatusSelect {
    fn default() -> Self {
        Self::All
    }
}

impl StatusSelect {
    /// Whether a campaign with the given status passes this selector.
    pub fn matches(&self, status: CampaignStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == CampaignStatus::Active,
            Self::Paused => status == CampaignStatus::Paused,
            Self::Completed => status == CampaignStatus::Completed,
        }
    }

    /// Whether this selector is the inactive sentinel.
    pub fn is_all(&self) -> bool {
        *self == Self::All
    }

    /// Return the selector as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for StatusSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusSelect {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            other => Err(AppError::validation(format!(
                "Unknown status filter '{other}' (expected all|active|paused|completed)"
            ))),
        }
    }
}
