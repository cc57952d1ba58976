//! Random part selection

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Maximum number of weapons mounted on one vehicle
pub const MAX_WEAPONS: usize = 4;

/// Picks parts out of buckets with its own RNG instance
#[derive(Debug, Clone)]
pub struct Selector {
    rng: StdRng,
}

impl Selector {
    /// Selector seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Selector with a fixed seed, for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Pick one element uniformly from `[0, len)`. None for an empty bucket.
    pub fn pick<'b, T>(&mut self, bucket: &'b [T]) -> Option<&'b T> {
        if bucket.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..bucket.len());
        bucket.get(idx)
    }

    /// Shuffle the whole bucket, then keep the first `MAX_WEAPONS`
    pub fn loadout<T: Clone>(&mut self, bucket: &[T]) -> Vec<T> {
        let mut shuffled = bucket.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled.truncate(MAX_WEAPONS);
        shuffled
    }
}
