//! Live update feed configuration.

use serde::{Deserialize, Serialize};

/// Settings for the simulated real-time update feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Interval between generated updates in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Maximum number of updates retained in the recent-history buffer.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
    /// Whether the feed starts in the connected state.
    #[serde(default = "default_true")]
    pub start_connected: bool,
    /// Optional RNG seed for deterministic update sequences.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            buffer_capacity: default_buffer_capacity(),
            start_connected: true,
            seed: None,
        }
    }
}

fn default_interval_ms() -> u64 {
    3000
}

fn default_buffer_capacity() -> usize {
    5
}

fn default_true() -> bool {
    true
}
