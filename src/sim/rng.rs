//! Injectable randomness
//!
//! The platform bounce angle is the only non-deterministic input to the
//! simulation. It is drawn through `RandomRange` so replays and tests can
//! pin it down.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniformly distributed floats
pub trait RandomRange {
    /// Uniform sample in `[min, max]`
    fn range(&mut self, min: f32, max: f32) -> f32;
}

impl<T: RandomRange + ?Sized> RandomRange for &mut T {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        (**self).range(min, max)
    }
}

/// Seeded PCG generator, reproducible from its seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomRange for SeededRandom {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Always returns the same value, clamped into the requested range
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom(pub f32);

impl RandomRange for FixedRandom {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        crate::clamp_lenient(self.0, min, max)
    }
}

/// Replays a fixed list of values in order, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomRange for SequenceRandom {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if self.values.is_empty() {
            return crate::clamp_lenient(0.0, min, max);
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        crate::clamp_lenient(value, min, max)
    }
}
