//! Delivery seam for freshly generated updates.

use async_trait::async_trait;

use metrichub_entity::update::LiveUpdate;

/// Receives each update the feed emits, in emission order.
///
/// Implemented by display adapters (and test collectors); the feed itself
/// only knows this trait.
#[async_trait]
pub trait UpdateSink: Send + Sync {
    /// Deliver one update.
    async fn deliver(&self, update: &LiveUpdate);
}
