//! Configuration for simulation engines.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of steps behind the "run 10" command.
pub const QUICK_RUN: usize = 10;

/// Number of steps behind the "run 100" command.
pub const LONG_RUN: usize = 100;

/// How an engine obtains its random source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for a reproducible run; `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a configuration that seeds from entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random source this configuration describes.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
