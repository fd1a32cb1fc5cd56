//! Pseudo-random sources
//!
//! `PseudoSource` draws from `rand`'s thread-local RNG; `SeededSource` wraps a
//! `StdRng` so runs can be reproduced.

use crate::rng::RandomSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Thread-local pseudo-random source
pub struct PseudoSource {
    rng: ThreadRng,
}

impl PseudoSource {
    /// Create a new pseudo-random source
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PseudoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for PseudoSource {
    fn name(&self) -> &'static str {
        "pseudo"
    }

    fn description(&self) -> &'static str {
        "Thread-local pseudo-random number generator"
    }

    fn next_uniform(&mut self) -> f64 {
        // Standard distribution for f64 samples [0, 1)
        self.rng.gen::<f64>()
    }
}

/// Seeded pseudo-random source for reproducible runs
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a new seeded source
    ///
    /// Using the same seed will produce the same sequence of values.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn description(&self) -> &'static str {
        "Seeded pseudo-random number generator (for reproducible runs)"
    }

    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_source_in_range() {
        let mut source = PseudoSource::new();
        let floats = source.uniforms(1000);
        assert_eq!(floats.len(), 1000);
        for f in &floats {
            assert!(*f >= 0.0 && *f < 1.0, "Float {} out of range [0, 1)", f);
        }
    }

    #[test]
    fn test_seeded_source_reproducible() {
        let mut source1 = SeededSource::new(42);
        let mut source2 = SeededSource::new(42);

        assert_eq!(source1.uniforms(100), source2.uniforms(100));
    }

    #[test]
    fn test_seeded_sources_differ_by_seed() {
        let mut source1 = SeededSource::new(1);
        let mut source2 = SeededSource::new(2);

        assert_ne!(source1.uniforms(10), source2.uniforms(10));
    }

    #[test]
    fn test_seeded_source_in_range() {
        let mut source = SeededSource::new(12345);
        for _ in 0..1000 {
            let f = source.next_uniform();
            assert!((0.0..1.0).contains(&f));
        }
    }
}
