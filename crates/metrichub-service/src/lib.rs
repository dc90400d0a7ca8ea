//! # metrichub-service
//!
//! Dashboard state services: the built-in campaign catalog, the
//! notification center, the simulated export pipeline, overview metric
//! seeds, and [`DashboardSession`], the composition root that owns every
//! piece of mutable dashboard state.

pub mod catalog;
pub mod export;
pub mod metrics;
pub mod notification;
pub mod session;

pub use export::ExportService;
pub use notification::NotificationCenter;
pub use session::DashboardSession;
