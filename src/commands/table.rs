//! Campaign table rendering command.

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use metrichub_core::config::AppConfig;
use metrichub_core::error::AppError;
use metrichub_core::types::sorting::SortDirection;
use metrichub_entity::campaign::filter::parse_amount;
use metrichub_entity::campaign::{CampaignSortField, ChannelSelect, StatusSelect};
use metrichub_service::DashboardSession;
use metrichub_view::{FilterPatch, SortSpec};

use crate::output::{self, OutputFormat};

/// Arguments for the table command
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Case-insensitive name search term
    #[arg(long)]
    pub search: Option<String>,

    /// Status filter (all|active|paused|completed)
    #[arg(long)]
    pub status: Option<StatusSelect>,

    /// Channel filter (all|social|search|display|email)
    #[arg(long)]
    pub channel: Option<ChannelSelect>,

    /// Minimum budget; invalid input falls back to no bound
    #[arg(long)]
    pub min_budget: Option<String>,

    /// Maximum budget; invalid input falls back to no bound
    #[arg(long)]
    pub max_budget: Option<String>,

    /// Minimum click-through rate percentage
    #[arg(long)]
    pub min_conversion: Option<String>,

    /// Keep only active campaigns
    #[arg(long)]
    pub active_only: bool,

    /// Keep campaigns starting on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Keep campaigns ending on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Sort column (name|budget|spent|impressions|clicks|conversions|ctr|cpc)
    #[arg(long, default_value = "name")]
    pub sort: CampaignSortField,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Page number (1-based, clamped into range)
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

/// Campaign display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CampaignRow {
    /// Campaign ID
    id: String,
    /// Campaign name
    campaign: String,
    /// Status
    status: String,
    /// Budget
    budget: String,
    /// Spent
    spent: String,
    /// Impressions
    impressions: String,
    /// Clicks
    clicks: String,
    /// Conversions
    conversions: String,
    /// Click-through rate
    ctr: String,
    /// Cost per click
    cpc: String,
}

/// Execute the table command
pub async fn execute(
    args: &TableArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut session = DashboardSession::new(config);

    if let Some(search) = &args.search {
        session.update_filter(FilterPatch::SearchTerm(search.clone()));
    }
    if let Some(status) = args.status {
        session.update_filter(FilterPatch::Status(status));
    }
    if let Some(channel) = args.channel {
        session.update_filter(FilterPatch::Channel(channel));
    }
    if let Some(min_budget) = &args.min_budget {
        session.update_filter(FilterPatch::MinBudget(parse_amount(min_budget)));
    }
    if let Some(max_budget) = &args.max_budget {
        session.update_filter(FilterPatch::MaxBudget(parse_amount(max_budget)));
    }
    if let Some(min_conversion) = &args.min_conversion {
        session.update_filter(FilterPatch::MinConversion(parse_amount(min_conversion)));
    }
    if args.active_only {
        session.update_filter(FilterPatch::ShowOnlyActive(true));
    }
    if args.start_date.is_some() {
        session.update_filter(FilterPatch::DateStart(args.start_date));
    }
    if args.end_date.is_some() {
        session.update_filter(FilterPatch::DateEnd(args.end_date));
    }

    let labels = session.apply_filters().to_vec();

    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    session.set_sort(SortSpec::new(args.sort, direction));
    session.set_page(args.page);

    let view = session.table_view();

    let rows: Vec<CampaignRow> = view
        .rows
        .iter()
        .map(|r| CampaignRow {
            id: r.id.to_string(),
            campaign: r.name.clone(),
            status: r.status.to_string(),
            budget: format!("${:.0}", r.budget),
            spent: format!("${:.0}", r.spent),
            impressions: r.impressions.to_string(),
            clicks: r.clicks.to_string(),
            conversions: r.conversions.to_string(),
            ctr: format!("{}%", r.ctr),
            cpc: format!("${:.2}", r.cpc),
        })
        .collect();

    output::print_list(&rows, format);

    if format == OutputFormat::Table {
        if !labels.is_empty() {
            let chips: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
            output::print_note(&format!("Active filters: {}", chips.join(", ")));
        }
        output::print_note(&format!(
            "Showing {} to {} of {} results (page {}/{})",
            view.first_row_index(),
            view.last_row_index(),
            view.total_filtered,
            view.page,
            view.total_pages,
        ));
    }

    Ok(())
}
