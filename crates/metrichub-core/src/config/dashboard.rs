//! Dashboard table configuration.

use serde::{Deserialize, Serialize};

/// Campaign table settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of rows per table page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    3
}
