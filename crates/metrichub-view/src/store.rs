//! Filter state store.
//!
//! The store is an explicitly constructed object owned by the dashboard
//! session and passed by reference to whatever needs it; there is no
//! ambient/global accessor. It has exactly one writer at a time, so all
//! mutation goes through `&mut self`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use metrichub_entity::campaign::{CampaignFilter, ChannelSelect, StatusSelect};

use crate::labels::{self, FilterLabel};

/// A single-field update to the filter criteria.
///
/// This is the only write path for individual fields; widgets that want to
/// change one dimension construct a patch instead of reaching into the
/// criteria directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FilterPatch {
    /// Set the start of the date range.
    DateStart(Option<NaiveDate>),
    /// Set the end of the date range.
    DateEnd(Option<NaiveDate>),
    /// Set the channel selector.
    Channel(ChannelSelect),
    /// Set the status selector.
    Status(StatusSelect),
    /// Set the minimum budget bound.
    MinBudget(f64),
    /// Set the maximum budget bound.
    MaxBudget(f64),
    /// Set the minimum conversion rate bound.
    MinConversion(f64),
    /// Toggle the active-only restriction.
    ShowOnlyActive(bool),
    /// Set the name search term.
    SearchTerm(String),
}

/// Session-lived store of the filter criteria plus the applied-label set.
///
/// The label set is **not** derived automatically from the criteria: it is
/// recomputed only on [`FilterStore::apply`], so "apply" stays a distinct
/// user action from "edit".
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    filters: CampaignFilter,
    active_labels: Vec<FilterLabel>,
}

impl FilterStore {
    /// Create a store with all-inactive defaults and no labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current filter criteria.
    pub fn filters(&self) -> &CampaignFilter {
        &self.filters
    }

    /// Replace the whole criteria object.
    pub fn set_filters(&mut self, filters: CampaignFilter) {
        self.filters = filters;
    }

    /// Apply a single-field update.
    pub fn update(&mut self, patch: FilterPatch) {
        match patch {
            FilterPatch::DateStart(date) => self.filters.date_start = date,
            FilterPatch::DateEnd(date) => self.filters.date_end = date,
            FilterPatch::Channel(channel) => self.filters.channel = channel,
            FilterPatch::Status(status) => self.filters.status = status,
            FilterPatch::MinBudget(amount) => self.filters.min_budget = amount.max(0.0),
            FilterPatch::MaxBudget(amount) => self.filters.max_budget = amount.max(0.0),
            FilterPatch::MinConversion(pct) => self.filters.min_conversion = pct.max(0.0),
            FilterPatch::ShowOnlyActive(only) => self.filters.show_only_active = only,
            FilterPatch::SearchTerm(term) => self.filters.search_term = term,
        }
    }

    /// Reset criteria to defaults and empty the label set.
    pub fn clear(&mut self) {
        self.filters.clear();
        self.active_labels.clear();
    }

    /// Recompute the label set from the current criteria (the explicit
    /// "apply" action) and return it.
    pub fn apply(&mut self) -> &[FilterLabel] {
        self.active_labels = labels::compute(&self.filters);
        &self.active_labels
    }

    /// The labels as of the last apply.
    pub fn active_labels(&self) -> &[FilterLabel] {
        &self.active_labels
    }

    /// Replace the label set wholesale.
    pub fn set_active_labels(&mut self, labels: Vec<FilterLabel>) {
        self.active_labels = labels;
    }

    /// Remove one label chip without touching the criteria.
    pub fn remove_label(&mut self, label: FilterLabel) {
        self.active_labels.retain(|l| *l != label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_is_the_single_write_path() {
        let mut store = FilterStore::new();
        store.update(FilterPatch::SearchTerm("sale".to_string()));
        store.update(FilterPatch::MinBudget(1000.0));
        assert_eq!(store.filters().search_term, "sale");
        assert_eq!(store.filters().min_budget, 1000.0);
    }

    #[test]
    fn test_negative_bounds_are_coerced_to_sentinel() {
        let mut store = FilterStore::new();
        store.update(FilterPatch::MinBudget(-250.0));
        assert_eq!(store.filters().min_budget, 0.0);
    }

    #[test]
    fn test_labels_only_change_on_apply() {
        let mut store = FilterStore::new();
        store.update(FilterPatch::SearchTerm("sale".to_string()));
        // Editing alone must not touch the label set.
        assert!(store.active_labels().is_empty());

        store.apply();
        assert_eq!(store.active_labels(), &[FilterLabel::Search]);
    }

    #[test]
    fn test_clear_resets_criteria_and_labels() {
        let mut store = FilterStore::new();
        store.update(FilterPatch::ShowOnlyActive(true));
        store.apply();
        store.clear();
        assert!(store.filters().is_inactive());
        assert!(store.active_labels().is_empty());
    }

    #[test]
    fn test_remove_label_keeps_criteria() {
        let mut store = FilterStore::new();
        store.update(FilterPatch::ShowOnlyActive(true));
        store.apply();
        store.remove_label(FilterLabel::ActiveOnly);
        assert!(store.active_labels().is_empty());
        assert!(store.filters().show_only_active);
    }
}
