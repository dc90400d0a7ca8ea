//! Active-filter display labels.
//!
//! Labels are a presentation-layer summary of which filter dimensions are
//! currently applied. They are computed on an explicit "apply" action, not
//! on every keystroke, so the label set and the raw criteria can diverge
//! while the user is still editing.

use serde::{Deserialize, Serialize};

use metrichub_entity::campaign::CampaignFilter;

/// A human-readable tag for one applied filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterLabel {
    /// Both ends of the date range are set.
    DateRange,
    /// A specific channel is selected.
    Channel,
    /// A specific status is selected.
    Status,
    /// A budget bound is set.
    BudgetRange,
    /// A minimum conversion rate is set.
    MinConversion,
    /// Only active campaigns are shown.
    ActiveOnly,
    /// A search term is entered.
    Search,
}

impl FilterLabel {
    /// Display text for the label chip.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateRange => "Date Range",
            Self::Channel => "Channel",
            Self::Status => "Status",
            Self::BudgetRange => "Budget Range",
            Self::MinConversion => "Min Conversion",
            Self::ActiveOnly => "Active Only",
            Self::Search => "Search",
        }
    }
}

impl std::fmt::Display for FilterLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compute the label set for the given criteria.
///
/// The date range only counts when both ends are set; a budget bound counts
/// when either end is above its sentinel.
pub fn compute(filter: &CampaignFilter) -> Vec<FilterLabel> {
    let mut labels = Vec::new();

    if filter.date_start.is_some() && filter.date_end.is_some() {
        labels.push(FilterLabel::DateRange);
    }
    if !filter.channel.is_all() {
        labels.push(FilterLabel::Channel);
    }
    if !filter.status.is_all() {
        labels.push(FilterLabel::Status);
    }
    if filter.min_budget > 0.0 || filter.max_budget > 0.0 {
        labels.push(FilterLabel::BudgetRange);
    }
    if filter.min_conversion > 0.0 {
        labels.push(FilterLabel::MinConversion);
    }
    if filter.show_only_active {
        labels.push(FilterLabel::ActiveOnly);
    }
    if !filter.search_term.is_empty() {
        labels.push(FilterLabel::Search);
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use metrichub_entity::campaign::{ChannelSelect, StatusSelect};

    #[test]
    fn test_inactive_criteria_produce_no_labels() {
        assert!(compute(&CampaignFilter::default()).is_empty());
    }

    #[test]
    fn test_date_range_requires_both_ends() {
        let open_ended = CampaignFilter {
            date_start: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..Default::default()
        };
        assert!(compute(&open_ended).is_empty());

        let closed = CampaignFilter {
            date_start: NaiveDate::from_ymd_opt(2024, 1, 1),
            date_end: NaiveDate::from_ymd_opt(2024, 12, 31),
            ..Default::default()
        };
        assert_eq!(compute(&closed), vec![FilterLabel::DateRange]);
    }

    #[test]
    fn test_budget_label_from_either_bound() {
        let min_only = CampaignFilter {
            min_budget: 1000.0,
            ..Default::default()
        };
        assert_eq!(compute(&min_only), vec![FilterLabel::BudgetRange]);

        let max_only = CampaignFilter {
            max_budget: 9000.0,
            ..Default::default()
        };
        assert_eq!(compute(&max_only), vec![FilterLabel::BudgetRange]);
    }

    #[test]
    fn test_full_criteria_produce_all_labels() {
        let filter = CampaignFilter {
            date_start: NaiveDate::from_ymd_opt(2024, 1, 1),
            date_end: NaiveDate::from_ymd_opt(2024, 12, 31),
            channel: ChannelSelect::Social,
            status: StatusSelect::Active,
            min_budget: 1000.0,
            max_budget: 9000.0,
            min_conversion: 5.0,
            show_only_active: true,
            search_term: "sale".to_string(),
        };
        assert_eq!(
            compute(&filter),
            vec![
                FilterLabel::DateRange,
                FilterLabel::Channel,
                FilterLabel::Status,
                FilterLabel::BudgetRange,
                FilterLabel::MinConversion,
                FilterLabel::ActiveOnly,
                FilterLabel::Search,
            ]
        );
    }
}
