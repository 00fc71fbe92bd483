//! Secret number sources.
//!
//! Every player gets an independent draw at game start and on each restart.
//! Production uses [`RandomGenerator`]; tests and scripted runs inject a
//! [`SequenceGenerator`].

use crate::config::RangeConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait SecretNumberGenerator {
    /// Draw a value uniformly from `range`, both ends inclusive.
    fn draw(&mut self, range: &RangeConfig) -> i32;
}

#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SecretNumberGenerator for RandomGenerator {
    fn draw(&mut self, range: &RangeConfig) -> i32 {
        self.rng.gen_range(range.as_inclusive())
    }
}

/// Replays a fixed list of values in order, wrapping around at the end.
/// Values outside the range are clamped into it.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    values: Vec<i32>,
    next: usize,
}

impl SequenceGenerator {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, next: 0 }
    }
}

impl SecretNumberGenerator for SequenceGenerator {
    fn draw(&mut self, range: &RangeConfig) -> i32 {
        let Some(value) = self.values.get(self.next % self.values.len().max(1)) else {
            return range.min();
        };
        self.next += 1;
        (*value).clamp(range.min(), range.max())
    }
}
