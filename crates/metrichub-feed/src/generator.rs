//! Synthetic update generator.
//!
//! The RNG is injected so tests can seed it and assert deterministic
//! category/message/value/status sequences. Update ids and timestamps are
//! stamped fresh on every call and are not part of the deterministic
//! surface.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use metrichub_core::types::id::UpdateId;
use metrichub_entity::update::{LiveUpdate, UpdateCategory, UpdateStatus};

/// Produces one synthetic [`LiveUpdate`] per call, picking uniformly from
/// the fixed category, message, value, and status pools.
#[derive(Debug)]
pub struct UpdateGenerator<R: Rng> {
    rng: R,
}

impl UpdateGenerator<StdRng> {
    /// Create a generator with a deterministic seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl<R: Rng> UpdateGenerator<R> {
    /// Create a generator around an existing RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate the next update.
    pub fn next_update(&mut self) -> LiveUpdate {
        let category = *pick(&mut self.rng, &UpdateCategory::ALL);
        let status = *pick(&mut self.rng, &UpdateStatus::ALL);
        let message = *pick(&mut self.rng, category.messages());
        let value = *pick(&mut self.rng, category.values());

        LiveUpdate {
            id: UpdateId::new(),
            category,
            message: message.to_string(),
            value: value.to_string(),
            timestamp: Utc::now(),
            status,
        }
    }
}

fn pick<'a, R: Rng, T>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}
