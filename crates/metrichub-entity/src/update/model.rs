//! Live update entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use metrichub_core::types::id::UpdateId;

use super::category::UpdateCategory;
use super::status::UpdateStatus;

/// A single simulated real-time update shown in the live feed.
///
/// Updates are ephemeral: they live in a bounded recent-history buffer and
/// are discarded once evicted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveUpdate {
    /// Unique update identifier.
    pub id: UpdateId,
    /// Event category.
    pub category: UpdateCategory,
    /// Headline message from the category's pool.
    pub message: String,
    /// Pre-formatted display value from the category's pool.
    pub value: String,
    /// When the update was generated.
    pub timestamp: DateTime<Utc>,
    /// Outcome tone.
    pub status: UpdateStatus,
}
