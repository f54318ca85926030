//! `rand`-backed shuffle sources

use bilet_domain::ShuffleSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Adapts any [`Rng`] to the domain's [`ShuffleSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Process-wide entropy, different on every run
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ShuffleSource for RngSource<R> {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..=upper)
    }
}

/// Pick a seeded source when a seed is configured, entropy otherwise
pub fn shuffle_source(seed: Option<u64>) -> Box<dyn ShuffleSource> {
    match seed {
        Some(seed) => {
            debug!("Shuffling with fixed seed {}", seed);
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::thread()),
    }
}
