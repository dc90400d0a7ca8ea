//! # metrichub-entity
//!
//! Domain entity models for MetricHub. Every struct in this crate
//! represents an in-memory dashboard record or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod campaign;
pub mod export;
pub mod metric;
pub mod notification;
pub mod update;
