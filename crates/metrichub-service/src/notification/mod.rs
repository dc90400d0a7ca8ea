//! Notification center.

pub mod service;

pub use service::NotificationCenter;
