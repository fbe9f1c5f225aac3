//! Uniform-random response selection with an injectable RNG.
//!
//! The RNG is owned and seedable so tests can assert exact output
//! instead of set membership.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::intents::Intent;

/// Picks one reply uniformly from an intent's response list.
pub struct ResponseSelector {
    rng: StdRng,
}

impl ResponseSelector {
    /// Selector seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic selector for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Select a reply. The store guarantees response lists are
    /// non-empty at load time.
    pub fn select(&mut self, intent: &Intent) -> String {
        intent
            .responses
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}
