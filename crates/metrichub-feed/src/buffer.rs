//! Bounded recent-history buffer for live updates.

use std::collections::VecDeque;

use metrichub_entity::update::LiveUpdate;

/// Fixed-capacity buffer holding the most recent updates, newest first.
///
/// On overflow the oldest entry is silently dropped; evicted updates are
/// gone for good, nothing is persisted.
#[derive(Debug, Clone)]
pub struct UpdateBuffer {
    capacity: usize,
    entries: VecDeque<LiveUpdate>,
}

impl UpdateBuffer {
    /// Create an empty buffer with the given capacity (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    /// Prepend an update and evict past capacity.
    pub fn push(&mut self, update: LiveUpdate) {
        self.entries.push_front(update);
        self.entries.truncate(self.capacity);
    }

    /// Number of buffered updates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained updates.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recent update, if any.
    pub fn latest(&self) -> Option<&LiveUpdate> {
        self.entries.front()
    }

    /// Copy of the buffer contents, newest first.
    pub fn snapshot(&self) -> Vec<LiveUpdate> {
        self.entries.iter().cloned().collect()
    }
}
