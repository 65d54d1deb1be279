//! Seeded random source for reproducible generation
//!
//! Every stochastic decision in the generator goes through [`RandomSource`], so
//! reproducing a board only requires the same seed and the same draw order.

use std::ops::Range;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Pseudo-random stream consumed by the generation pipeline
pub trait RandomSource {
    /// Restart the stream from a seed
    fn reseed(&mut self, seed: u64);

    /// Uniform integer in `range` (exclusive end)
    ///
    /// An empty range yields `range.start` without consuming a draw.
    fn uniform(&mut self, range: Range<usize>) -> usize;

    /// Uniform float in `[0, 1)`
    fn unit(&mut self) -> f64;
}

/// Default random source backed by `StdRng`
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for SeededRandom {
    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn uniform(&mut self, range: Range<usize>) -> usize {
        if range.is_empty() {
            return range.start;
        }
        self.rng.random_range(range)
    }

    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
