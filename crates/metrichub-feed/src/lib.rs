//! # metrichub-feed
//!
//! The simulated real-time update feed: a timer-driven producer of
//! synthetic [`LiveUpdate`](metrichub_entity::update::LiveUpdate) records,
//! kept in a bounded most-recent-first buffer. The producer task is held by
//! a cancellation token and must be shut down on teardown.

pub mod buffer;
pub mod feed;
pub mod generator;
pub mod sink;

pub use buffer::UpdateBuffer;
pub use feed::LiveFeed;
pub use generator::UpdateGenerator;
pub use sink::UpdateSink;
