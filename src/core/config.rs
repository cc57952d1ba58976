//! Generator configuration

use crate::core::classify::MatchPolicy;

/// Options for a single vehicle generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// How records are matched to categories
    pub match_policy: MatchPolicy,

    /// Fixed RNG seed. None seeds from OS entropy; only tests set this.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Make selection reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
