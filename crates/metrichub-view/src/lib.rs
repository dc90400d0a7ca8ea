//! # metrichub-view
//!
//! View-layer state for the campaign table: the filter state store, the
//! active-filter label set, sort spec toggling, and the pure view
//! derivation engine that turns the campaign catalog into a filtered,
//! ordered, paginated slice.

pub mod derive;
pub mod labels;
pub mod sort;
pub mod store;

pub use derive::{TableView, derive_view};
pub use labels::FilterLabel;
pub use sort::SortSpec;
pub use store::{FilterPatch, FilterStore};
