//! Randomness utilities for the generator

/// Seeded random source consumed by every stochastic pass
pub mod random;
