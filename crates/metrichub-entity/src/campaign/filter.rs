//! Sentinel-based campaign filter criteria.
//!
//! Every field carries an inactive sentinel (`None`, `All`, `0.0`, `false`,
//! `""`) distinguishing "not filtering on this dimension" from an explicit
//! bound. A record is kept iff **all** active criteria match it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::channel::ChannelSelect;
use super::model::CampaignRecord;
use super::status::StatusSelect;

/// Filter criteria for the campaign table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignFilter {
    /// Keep campaigns starting on or after this date. `None` = unbounded.
    #[serde(default)]
    pub date_start: Option<NaiveDate>,
    /// Keep campaigns ending on or before this date. `None` = unbounded.
    #[serde(default)]
    pub date_end: Option<NaiveDate>,
    /// Channel selector. `All` = inactive.
    #[serde(default)]
    pub channel: ChannelSelect,
    /// Status selector. `All` = inactive.
    #[serde(default)]
    pub status: StatusSelect,
    /// Minimum budget in dollars. `0.0` = no bound.
    #[serde(default)]
    pub min_budget: f64,
    /// Maximum budget in dollars. `0.0` = no bound.
    #[serde(default)]
    pub max_budget: f64,
    /// Minimum click-through rate percentage. `0.0` = no bound.
    #[serde(default)]
    pub min_conversion: f64,
    /// Keep only active campaigns.
    #[serde(default)]
    pub show_only_active: bool,
    /// Case-insensitive substring match on the campaign name. `""` = inactive.
    #[serde(default)]
    pub search_term: String,
}

impl Default for CampaignFilter {
    fn default() -> Self {
        Self {
            date_start: None,
            date_end: None,
            channel: ChannelSelect::All,
            status: StatusSelect::All,
            min_budget: 0.0,
            max_budget: 0.0,
            min_conversion: 0.0,
            show_only_active: false,
            search_term: String::new(),
        }
    }
}

impl CampaignFilter {
    /// Reset every field to its inactive sentinel.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every field is at its inactive sentinel.
    pub fn is_inactive(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a record passes every active criterion.
    pub fn matches(&self, record: &CampaignRecord) -> bool {
        if !self.search_term.is_empty()
            && !record
                .name
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
        {
            return false;
        }

        if !self.status.matches(record.status) {
            return false;
        }

        if !self.channel.matches(record.channel) {
            return false;
        }

        if self.min_budget > 0.0 && record.budget < self.min_budget {
            return false;
        }
        if self.max_budget > 0.0 && record.budget > self.max_budget {
            return false;
        }

        if self.min_conversion > 0.0 && record.ctr < self.min_conversion {
            return false;
        }

        if self.show_only_active && !record.is_active() {
            return false;
        }

        if let Some(start) = self.date_start {
            if record.start_date < start {
                return false;
            }
        }
        if let Some(end) = self.date_end {
            if record.end_date > end {
                return false;
            }
        }

        true
    }
}

/// Coerce free-text numeric input to a non-negative amount.
///
/// Invalid or negative entries fail soft to `0.0`, the inactive sentinel,
/// rather than erroring.
pub fn parse_amount(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::channel::CampaignChannel;
    use crate::campaign::status::CampaignStatus;
    use metrichub_core::types::id::CampaignId;

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
    fn test_inactive_filter_matches_everything() {
        let filter = CampaignFilter::default();
        assert!(filter.is_inactive());
        assert!(filter.matches(&record()));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = CampaignFilter {
            search_term: "summer".to_string(),
            ..Default::default()
        };
        assert!(filter.matches(&record()));

        let miss = CampaignFilter {
            search_term: "winter".to_string(),
            ..Default::default()
        };
        assert!(!miss.matches(&record()));
    }

    #[test]
    fn test_budget_bounds_are_inclusive() {
        let filter = CampaignFilter {
            min_budget: 5000.0,
            max_budget: 5000.0,
            ..Default::default()
        };
        assert!(filter.matches(&record()));

        let above = CampaignFilter {
            max_budget: 4999.0,
            ..Default::default()
        };
        assert!(!above.matches(&record()));
    }

    #[test]
    fn test_zero_budget_bound_is_inactive() {
        // max_budget = 0.0 must mean "no upper bound", not "budget <= 0".
        let filter = CampaignFilter {
            min_budget: 0.0,
            max_budget: 0.0,
            ..Default::default()
        };
        assert!(filter.matches(&record()));
    }

    #[test]
    fn test_date_range() {
        let inside = CampaignFilter {
            date_start: NaiveDate::from_ymd_opt(2024, 5, 1),
            date_end: NaiveDate::from_ymd_opt(2024, 9, 30),
            ..Default::default()
        };
        assert!(inside.matches(&record()));

        let starts_too_late = CampaignFilter {
            date_start: NaiveDate::from_ymd_opt(2024, 7, 1),
            ..Default::default()
        };
        assert!(!starts_too_late.matches(&record()));
    }

    #[test]
    fn test_clear_restores_sentinels() {
        let mut filter = CampaignFilter {
            min_budget: 1000.0,
            show_only_active: true,
            search_term: "sale".to_string(),
            ..Default::default()
        };
        filter.clear();
        assert!(filter.is_inactive());
    }

    #[test]
    fn test_parse_amount_fails_soft() {
        assert_eq!(parse_amount("1234.5"), 1234.5);
        assert_eq!(parse_amount(" 42 "), 42.0);
        assert_eq!(parse_amount("not a number"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("-50"), 0.0);
    }
}
