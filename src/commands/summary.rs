//! Overview metrics command.

use serde::Serialize;
use tabled::Tabled;

use metrichub_core::config::AppConfig;
use metrichub_core::error::AppError;
use metrichub_service::metrics;

use crate::output::{self, OutputFormat};

/// Metric card display row
#[derive(Debug, Serialize, Tabled)]
struct MetricRow {
    /// Metric title
    metric: String,
    /// Display value
    value: String,
    /// Change versus last month
    change: String,
}

/// Series point display row
#[derive(Debug, Serialize, Tabled)]
struct SeriesRow {
    /// Month label
    month: String,
    /// Revenue
    revenue: String,
    /// Target
    target: String,
}

/// Execute the summary command
pub async fn execute(_config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let cards: Vec<MetricRow> = metrics::overview_metrics()
        .iter()
        .map(|m| MetricRow {
            metric: m.title.clone(),
            value: m.value.clone(),
            change: format!(
                "{}{}% vs last month",
                if m.is_positive() { "+" } else { "" },
                m.change_pct
            ),
        })
        .collect();
    output::print_list(&cards, format);

    let series: Vec<SeriesRow> = metrics::revenue_series()
        .iter()
        .map(|p| SeriesRow {
            month: p.label.clone(),
            revenue: format!("{:.0}", p.value),
            target: format!("{:.0}", p.target),
        })
        .collect();
    output::print_list(&series, format);

    if format == OutputFormat::Table {
        let sources: Vec<String> = metrics::traffic_sources()
            .iter()
            .map(|s| format!("{} {:.0}", s.name, s.value))
            .collect();
        output::print_note(&format!("Traffic sources: {}", sources.join(", ")));

        let slices: Vec<String> = metrics::campaign_progress()
            .iter()
            .map(|s| format!("{} {:.0}%", s.label, s.pct))
            .collect();
        output::print_note(&format!("Campaign progress: {}", slices.join(", ")));
    }

    Ok(())
}
