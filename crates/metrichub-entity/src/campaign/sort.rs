//! Sortable campaign table columns.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use metrichub_core::AppError;

use super::model::CampaignRecord;

/// A sortable column of the campaign table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignSortField {
    /// Campaign name (lexicographic).
    Name,
    /// Allocated budget.
    Budget,
    /// Amount spent.
    Spent,
    /// Impressions served.
    Impressions,
    /// Clicks received.
    Clicks,
    /// Conversions attributed.
    Conversions,
    /// Click-through rate.
    Ctr,
    /// Cost per click.
    Cpc,
}

impl CampaignSortField {
    /// Compare two records by this column in ascending order.
    ///
    /// `Name` compares lexicographically; the catalog vocabulary is ASCII,
    /// so byte-wise ordering matches what a collator would produce. Numeric
    /// columns fall back to `Equal` on incomparable floats.
    pub fn compare(&self, a: &CampaignRecord, b: &CampaignRecord) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Budget => cmp_f64(a.budget, b.budget),
            Self::Spent => cmp_f64(a.spent, b.spent),
            Self::Impressions => a.impressions.cmp(&b.impressions),
            Self::Clicks => a.clicks.cmp(&b.clicks),
            Self::Conversions => a.conversions.cmp(&b.conversions),
            Self::Ctr => cmp_f64(a.ctr, b.ctr),
            Self::Cpc => cmp_f64(a.cpc, b.cpc),
        }
    }

    /// Return the column as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Budget => "budget",
            Self::Spent => "spent",
            Self::Impressions => "impressions",
            Self::Clicks => "clicks",
            Self::Conversions => "conversions",
            Self::Ctr => "ctr",
            Self::Cpc => "cpc",
        }
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl fmt::Display for CampaignSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CampaignSortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "budget" => Ok(Self::Budget),
            "spent" => Ok(Self::Spent),
            "impressions" => Ok(Self::Impressions),
            "clicks" => Ok(Self::Clicks),
            "conversions" => Ok(Self::Conversions),
            "ctr" => Ok(Self::Ctr),
            "cpc" => Ok(Self::Cpc),
            other => Err(AppError::validation(format!(
                "Unknown sort column '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::channel::CampaignChannel;
    use crate::campaign::status::CampaignStatus;
    use chrono::NaiveDate;
    use metrichub_core::types::id::CampaignId;

    fn record(name: &str, budget: f64) -> CampaignRecord {
        CampaignRecord {
            id: CampaignId(1),
            name: name.to_string(),
            status: CampaignStatus::Active,
            budget,
            spent: 0.0,
            impressions: 0,
            clicks: 0,
            conversions: 0,
            ctr: 0.0,
            cpc: 0.0,
            channel: CampaignChannel::Social,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date"),
        }
    }

    #[test]
    fn test_name_is_lexicographic() {
        let a = record("Brand Awareness Q1", 0.0);
        let b = record("Summer Sale 2024", 0.0);
        assert_eq!(CampaignSortField::Name.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_numeric_compare() {
        let a = record("A", 3000.0);
        let b = record("B", 5000.0);
        assert_eq!(CampaignSortField::Budget.compare(&a, &b), Ordering::Less);
        assert_eq!(CampaignSortField::Budget.compare(&b, &a), Ordering::Greater);
        assert_eq!(CampaignSortField::Budget.compare(&a, &a), Ordering::Equal);
    }
}
