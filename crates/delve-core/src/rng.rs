//! Random number generation for map building
//!
//! Uses a seeded ChaCha RNG so that a seed and a configuration always
//! reproduce the same map.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Map random number generator
///
/// Wraps ChaCha8Rng and remembers its seed so a map can be regenerated.
#[derive(Debug, Clone)]
pub struct MapRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl MapRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1, or 0 if n is 0
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns min..=max, or `min` when the range is inverted
    pub fn between(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Uniformly pick a cell of a `cols` x `rows` grid
    pub fn random_cell(&mut self, cols: usize, rows: usize) -> (usize, usize) {
        (self.below(cols), self.below(rows))
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.below(items.len()))
        }
    }
}

impl Default for MapRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
