//! Overview metric seed data for the dashboard summary widgets.

use metrichub_entity::metric::{MetricSummary, ProgressSlice, SeriesPoint, TrafficSource};

/// The four headline metric cards.
pub fn overview_metrics() -> Vec<MetricSummary> {
    vec![
        MetricSummary {
            title: "Total Revenue".to_string(),
            value: "$1,234,567".to_string(),
            change_pct: 12.5,
        },
        MetricSummary {
            title: "Active Users".to_string(),
            value: "45,678".to_string(),
            change_pct: 8.2,
        },
        MetricSummary {
            title: "Conversion Rate".to_string(),
            value: "3.24%".to_string(),
            change_pct: -2.1,
        },
        MetricSummary {
            title: "Target Achievement".to_string(),
            value: "87.3%".to_string(),
            change_pct: 5.7,
        },
    ]
}

/// Monthly revenue versus target for the trailing year.
pub fn revenue_series() -> Vec<SeriesPoint> {
    const MONTHS: [(&str, f64, f64); 12] = [
        ("Jan", 400.0, 350.0),
        ("Feb", 300.0, 400.0),
        ("Mar", 600.0, 450.0),
        ("Apr", 800.0, 500.0),
        ("May", 700.0, 550.0),
        ("Jun", 900.0, 600.0),
        ("Jul", 1000.0, 650.0),
        ("Aug", 1200.0, 700.0),
        ("Sep", 1100.0, 750.0),
        ("Oct", 1300.0, 800.0),
        ("Nov", 1400.0, 850.0),
        ("Dec", 1500.0, 900.0),
    ];
    MONTHS
        .iter()
        .map(|(label, value, target)| SeriesPoint {
            label: (*label).to_string(),
            value: *value,
            target: *target,
        })
        .collect()
}

/// Traffic source breakdown.
pub fn traffic_sources() -> Vec<TrafficSource> {
    const SOURCES: [(&str, f64); 6] = [
        ("Organic", 400.0),
        ("Direct", 300.0),
        ("Social", 500.0),
        ("Email", 200.0),
        ("Referral", 350.0),
        ("Paid", 450.0),
    ];
    SOURCES
        .iter()
        .map(|(name, value)| TrafficSource {
            name: (*name).to_string(),
            value: *value,
        })
        .collect()
}

/// Campaign progress breakdown.
pub fn campaign_progress() -> Vec<ProgressSlice> {
    const SLICES: [(&str, f64); 3] = [
        ("Completed", 65.0),
        ("In Progress", 20.0),
        ("Pending", 15.0),
    ];
    SLICES
        .iter()
        .map(|(label, pct)| ProgressSlice {
            label: (*label).to_string(),
            pct: *pct,
        })
        .collect()
}
