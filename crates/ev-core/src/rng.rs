//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! The monitor draws randomness in exactly one place — traffic condition
//! sampling — and always through a `SimRng` seeded from the run's master
//! seed.  The same seed therefore always produces the same traffic history,
//! which makes whole-run output reproducible and lets tests pin exact
//! results without mocking the generator itself.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for global operations (traffic evolution, exogenous
/// events).
///
/// Used only in single-threaded contexts — the tick loop is strictly
/// sequential, so no synchronisation is needed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
