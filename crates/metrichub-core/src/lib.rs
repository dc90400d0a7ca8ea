//! # metrichub-core
//!
//! Core crate for MetricHub. Contains configuration schemas, typed
//! identifiers, pagination/sorting primitives, and the unified error system.
//!
//! This crate has **no** internal dependencies on other MetricHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
