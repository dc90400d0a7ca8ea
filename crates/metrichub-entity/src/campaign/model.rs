//! Campaign entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use metrichub_core::types::id::CampaignId;

use super::channel::CampaignChannel;
use super::status::CampaignStatus;

/// A marketing campaign in the reference catalog.
///
/// Catalog records are read-only for the lifetime of a session; all
/// dashboard views are derived from them without mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRecord {
    /// Unique campaign identifier.
    pub id: CampaignId,
    /// Campaign display name.
    pub name: String,
    /// Lifecycle status.
    pub status: CampaignStatus,
    /// Allocated budget in dollars.
    pub budget: f64,
    /// Amount spent so far in dollars.
    pub spent: f64,
    /// Ad impressions served.
    pub impressions: u64,
    /// Clicks received.
    pub clicks: u64,
    /// Conversions attributed.
    pub conversions: u64,
    /// Click-through rate as a percentage.
    pub ctr: f64,
    /// Cost per click in dollars.
    pub cpc: f64,
    /// Advertising channel.
    pub channel: CampaignChannel,
    /// First day of the campaign run.
    pub start_date: NaiveDate,
    /// Last day of the campaign run.
    pub end_date: NaiveDate,
}

impl CampaignRecord {
    /// Check if the campaign is currently active.
    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }

    /// Fraction of the budget spent so far, in `[0, 1]`.
    pub fn spend_ratio(&self) -> f64 {
        if self.budget <= 0.0 {
            0.0
        } else {
            (self.spent / self.budget).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CampaignRecord {
        CampaignRecord {
            id: CampaignId(1),
            name: "Summer Sale 2024".to_string(),
            status: CampaignStatus::Active,
            budget: 5000.0,
            spent: 3200.0,
            impressions: 125_000,
            clicks: 8_500,
            conversions: 425,
            ctr: 6.8,
            cpc: 0.38,
            channel: CampaignChannel::Social,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 31).expect("valid date"),
        }
    }

    #[test]
    fn test_spend_ratio() {
        assert!((record().spend_ratio() - 0.64).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_budget_spend_ratio() {
        let mut r = record();
        r.budget = 0.0;
        assert_eq!(r.spend_ratio(), 0.0);
    }
}
