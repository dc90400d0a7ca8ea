//! Overview metric entities.

pub mod model;

pub use model::{MetricSummary, ProgressSlice, SeriesPoint, TrafficSource};
