//! Pure derivation of the visible campaign table slice.
//!
//! `derive_view` is deterministic and recomputed on every input change; with
//! a catalog of a few dozen records there is nothing to gain from
//! incremental diffing or caching.

use serde::Serialize;

use metrichub_core::types::pagination::{self, PageRequest};
use metrichub_core::types::sorting::SortDirection;
use metrichub_entity::campaign::{CampaignFilter, CampaignRecord};

use crate::sort::SortSpec;

/// The derived, renderable state of the campaign table.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    /// The rows visible on the current page, in display order.
    pub rows: Vec<CampaignRecord>,
    /// Number of records passing the filter, across all pages.
    pub total_filtered: usize,
    /// Effective page number after clamping (1-based).
    pub page: u32,
    /// Rows per page.
    pub page_size: u32,
    /// Total number of pages (minimum 1, so page controls stay renderable).
    pub total_pages: u32,
}

impl TableView {
    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// 1-based index of the first row on this page, or 0 when empty.
    pub fn first_row_index(&self) -> usize {
        if self.total_filtered == 0 {
            0
        } else {
            (self.page as usize - 1) * self.page_size as usize + 1
        }
    }

    /// 1-based index of the last row on this page, or 0 when empty.
    pub fn last_row_index(&self) -> usize {
        if self.total_filtered == 0 {
            0
        } else {
            self.first_row_index() + self.rows.len() - 1
        }
    }
}

/// Derive the visible table slice from the catalog and the current view
/// state: filter with a logical AND across all active criteria, sort stably
/// by the selected column, then clamp the requested page into range and
/// slice it out.
pub fn derive_view(
    records: &[CampaignRecord],
    filter: &CampaignFilter,
    sort: &SortSpec,
    page: PageRequest,
) -> TableView {
    let mut filtered: Vec<&CampaignRecord> = records.iter().filter(|r| filter.matches(r)).collect();

    // sort_by is stable, so records with equal keys keep catalog order.
    filtered.sort_by(|a, b| {
        let ordering = sort.field.compare(a, b);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    let total_filtered = filtered.len();
    let total_pages = pagination::total_pages(total_filtered, page.page_size);
    let page = page.clamped(total_filtered);

    let rows = filtered
        .into_iter()
        .skip(page.offset())
        .take(page.page_size as usize)
        .cloned()
        .collect();

    TableView {
        rows,
        total_filtered,
        page: page.page,
        page_size: page.page_size,
        total_pages,
    }
}
