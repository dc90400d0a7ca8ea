//! Report export simulation configuration.

use serde::{Deserialize, Serialize};

/// Settings for the simulated report export pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Delay before a requested export transitions to completed, in
    /// milliseconds. No actual file is produced during this window.
    #[serde(default = "default_completion_delay_ms")]
    pub completion_delay_ms: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            completion_delay_ms: default_completion_delay_ms(),
        }
    }
}

fn default_completion_delay_ms() -> u64 {
    2000
}
