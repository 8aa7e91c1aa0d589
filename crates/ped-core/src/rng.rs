//! Seeded RNG for scenario generation.
//!
//! Stepping the model never draws random numbers.  Randomness only enters
//! when a scenario is built, e.g. when pedestrians are scattered over a start
//! area, and the same seed always yields the same placement.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Scenario-building RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle `slice` in place; the order depends only on the seed.
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}
