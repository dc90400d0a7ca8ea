//! Overview metric models for the dashboard summary.

use serde::{Deserialize, Serialize};

/// A headline metric card (revenue, users, conversion rate, target).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Card title.
    pub title: String,
    /// Pre-formatted display value.
    pub value: String,
    /// Percentage change versus the previous period.
    pub change_pct: f64,
}

impl MetricSummary {
    /// Whether the change is non-negative (rendered as an up-trend).
    pub fn is_positive(&self) -> bool {
        self.change_pct >= 0.0
    }
}

/// One point of the monthly revenue-versus-target series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Month label.
    pub label: String,
    /// Actual value.
    pub value: f64,
    /// Target value.
    pub target: f64,
}

/// A traffic source and its relative volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSource {
    /// Source name.
    pub name: String,
    /// Relative volume.
    pub value: f64,
}

/// A slice of the campaign progress breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSlice {
    /// Slice label.
    pub label: String,
    /// Share in percent.
    pub pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_direction() {
        let up = MetricSummary {
            title: "Total Revenue".to_string(),
            value: "$1,234,567".to_string(),
            change_pct: 12.5,
        };
        assert!(up.is_positive());

        let down = MetricSummary {
            title: "Conversion Rate".to_string(),
            value: "3.24%".to_string(),
            change_pct: -2.1,
        };
        assert!(!down.is_positive());
    }
}
