//! Built-in campaign reference catalog.
//!
//! A fixed, read-only record set; every table view is derived from it
//! without mutation.

use chrono::NaiveDate;

use metrichub_core::types::id::CampaignId;
use metrichub_entity::campaign::{CampaignChannel, CampaignRecord, CampaignStatus};

/// The built-in campaign catalog, in canonical order.
pub fn builtin_campaigns() -> Vec<CampaignRecord> {
    vec![
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
            start_date: date(2024, 6, 1),
            end_date: date(2024, 8, 31),
        },
        CampaignRecord {
            id: CampaignId(2),
            name: "Brand Awareness Q1".to_string(),
            status: CampaignStatus::Paused,
            budget: 3000.0,
            spent: 1800.0,
            impressions: 89_000,
            clicks: 5_200,
            conversions: 260,
            ctr: 5.8,
            cpc: 0.35,
            channel: CampaignChannel::Display,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 3, 31),
        },
        CampaignRecord {
            id: CampaignId(3),
            name: "Product Launch".to_string(),
            status: CampaignStatus::Active,
            budget: 8000.0,
            spent: 6500.0,
            impressions: 210_000,
            clicks: 15_000,
            conversions: 750,
            ctr: 7.1,
            cpc: 0.43,
            channel: CampaignChannel::Search,
            start_date: date(2024, 7, 1),
            end_date: date(2024, 9, 30),
        },
        CampaignRecord {
            id: CampaignId(4),
            name: "Holiday Special".to_string(),
            status: CampaignStatus::Completed,
            budget: 6000.0,
            spent: 6000.0,
            impressions: 180_000,
            clicks: 12_000,
            conversions: 600,
            ctr: 6.7,
            cpc: 0.50,
            channel: CampaignChannel::Email,
            start_date: date(2024, 11, 1),
            end_date: date(2024, 12, 31),
        },
        CampaignRecord {
            id: CampaignId(5),
            name: "Retargeting Campaign".to_string(),
            status: CampaignStatus::Active,
            budget: 2500.0,
            spent: 1200.0,
            impressions: 45_000,
            clicks: 3_800,
            conversions: 190,
            ctr: 8.4,
            cpc: 0.32,
            channel: CampaignChannel::Social,
            start_date: date(2024, 8, 1),
            end_date: date(2024, 10, 31),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Catalog literals are all valid calendar dates.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
