//! `rand`-backed random source

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::domain::services::RandomSource;

/// Adapts any `rand` generator to the generation engine's random source
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Reproducible source; the same seed replays the same day
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_int(&mut self, bound_exclusive: u32) -> u32 {
        if bound_exclusive == 0 {
            return 0;
        }
        self.0.gen_range(0..bound_exclusive)
    }
}
