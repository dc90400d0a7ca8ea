//! Dashboard session composition root.
//!
//! The session owns every piece of mutable dashboard state — the filter
//! store, sort spec, current page, live feed, notification center, and
//! export history — and passes it by reference to whatever renders it.
//! Nothing reaches this state through a global; the session is constructed
//! once at the top of the program and handed down. All writes go through
//! `&mut self`, matching the one-writer-at-a-time model of a UI event loop.

use tracing::info;

use metrichub_core::config::AppConfig;
use metrichub_core::types::pagination::PageRequest;
use metrichub_entity::campaign::{CampaignFilter, CampaignRecord, CampaignSortField};
use metrichub_feed::LiveFeed;
use metrichub_view::{FilterLabel, FilterPatch, FilterStore, SortSpec, TableView, derive_view};

use crate::catalog;
use crate::export::ExportService;
use crate::notification::NotificationCenter;

/// All session-lived dashboard state.
#[derive(Debug)]
pub struct DashboardSession {
    catalog: Vec<CampaignRecord>,
    filters: FilterStore,
    sort: SortSpec,
    page: u32,
    page_size: u32,
    feed: LiveFeed,
    notifications: NotificationCenter,
    exports: ExportService,
}

impl DashboardSession {
    /// Build a session from configuration: built-in catalog, seeded
    /// notification and export data, feed constructed but not started.
    pub fn new(config: &AppConfig) -> Self {
        info!(
            page_size = config.dashboard.page_size,
            feed_interval_ms = config.feed.interval_ms,
            "Creating dashboard session"
        );
        Self {
            catalog: catalog::builtin_campaigns(),
            filters: FilterStore::new(),
            sort: SortSpec::default(),
            page: 1,
            page_size: config.dashboard.page_size.max(1),
            feed: LiveFeed::new(&config.feed),
            notifications: NotificationCenter::with_seed_data(),
            exports: ExportService::with_seed_data(&config.export),
        }
    }

    /// Start the live feed producer.
    pub fn start(&mut self) {
        self.feed.start();
    }

    /// The read-only campaign catalog.
    pub fn catalog(&self) -> &[CampaignRecord] {
        &self.catalog
    }

    /// Derive the current table view. The stored page is clamped against
    /// the filtered total on every derivation, so a filter change that
    /// shrinks the result set can never leave the view past the last page.
    pub fn table_view(&self) -> TableView {
        derive_view(
            &self.catalog,
            self.filters.filters(),
            &self.sort,
            PageRequest::new(self.page, self.page_size),
        )
    }

    /// Request a page change; out-of-range requests clamp to the nearest
    /// valid page.
    pub fn set_page(&mut self, page: u32) {
        let total = self
            .catalog
            .iter()
            .filter(|r| self.filters.filters().matches(r))
            .count();
        self.page = PageRequest::new(page, self.page_size).clamped(total).page;
    }

    /// Current 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Column-header interaction on the table.
    pub fn toggle_sort(&mut self, field: CampaignSortField) {
        self.sort.toggle(field);
    }

    /// Current sort spec.
    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Replace the sort spec wholesale (programmatic callers; the table
    /// header path goes through [`DashboardSession::toggle_sort`]).
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Current filter criteria.
    pub fn filters(&self) -> &CampaignFilter {
        self.filters.filters()
    }

    /// Apply a single-field filter update and re-clamp the page against the
    /// new filtered total.
    pub fn update_filter(&mut self, patch: FilterPatch) {
        self.filters.update(patch);
        self.set_page(self.page);
    }

    /// Recompute the active-filter labels (the explicit "apply" action).
    pub fn apply_filters(&mut self) -> &[FilterLabel] {
        self.filters.apply()
    }

    /// The labels as of the last apply.
    pub fn active_filter_labels(&self) -> &[FilterLabel] {
        self.filters.active_labels()
    }

    /// Reset criteria and labels, and return to the first page.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    /// The live update feed.
    pub fn feed(&self) -> &LiveFeed {
        &self.feed
    }

    /// The notification center.
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Mutable access to the notification center.
    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    /// The export service.
    pub fn exports(&self) -> &ExportService {
        &self.exports
    }

    /// Stop every timer-driven task owned by the session. Must be called on
    /// teardown; afterwards no task can act on session state.
    pub async fn shutdown(&mut self) {
        self.feed.shutdown().await;
        self.exports.shutdown().await;
        info!("Dashboard session shut down");
    }
}
