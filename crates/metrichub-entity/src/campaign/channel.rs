//! Campaign channel enumeration and its filter selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use metrichub_core::AppError;

/// The advertising channel a campaign runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignChannel {
    /// Social media placements.
    Social,
    /// Search engine ads.
    Search,
    /// Display network banners.
    Display,
    /// Email marketing.
    Email,
}

impl CampaignChannel {
    /// Return the channel as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Search => "search",
            Self::Display => "display",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for CampaignChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Channel filter selector. `All` is the inactive sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelSelect {
    /// No channel filtering.
    All,
    /// Only social campaigns.
    Social,
    /// Only search campaigns.
    Search,
    /// Only display campaigns.
    Display,
    /// Only email campaigns.
    Email,
}

impl Default for ChannelSelect {
    fn default() -> Self {
        Self::All
    }
}

impl ChannelSelect {
    /// Whether a campaign on the given channel passes this selector.
    pub fn matches(&self, channel: CampaignChannel) -> bool {
        match self {
            Self::All => true,
            Self::Social => channel == CampaignChannel::Social,
            Self::Search => channel == CampaignChannel::Search,
            Self::Display => channel == CampaignChannel::Display,
            Self::Email => channel == CampaignChannel::Email,
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
            Self::Social => "social",
            Self::Search => "search",
            Self::Display => "display",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for ChannelSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChannelSelect {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "social" => Ok(Self::Social),
            "search" => Ok(Self::Search),
            "display" => Ok(Self::Display),
            "email" => Ok(Self::Email),
            other => Err(AppError::validation(format!(
                "Unknown channel filter '{other}' (expected all|social|search|display|email)"
            ))),
        }
    }
}
