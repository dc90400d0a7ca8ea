//! Sort specification for the campaign table.

use serde::{Deserialize, Serialize};

use metrichub_core::types::sorting::SortDirection;
use metrichub_entity::campaign::CampaignSortField;

/// The current sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column to sort by.
    pub field: CampaignSortField,
    /// Sort direction.
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: CampaignSortField::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Create a sort spec.
    pub fn new(field: CampaignSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column-header interaction: selecting the current column flips the
    /// direction, selecting a new column resets to ascending.
    pub fn toggle(&mut self, field: CampaignSortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }
}
