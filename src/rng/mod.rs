//! Random number sources
//!
//! This module defines the `RandomSource` trait and its implementations.
//! Each source is a single file implementing the trait.
//!
//! ## Flex Point
//! Adding a new source requires:
//! 1. Create `src/rng/{source_name}.rs` implementing `RandomSource`
//! 2. Add `pub mod {source_name};` below
//! 3. Register it in `get_source` and `available_sources`

pub mod pseudo;
pub mod sequence;

use crate::error::{Error, Result};

/// Trait for uniform random number sources
///
/// Sources are driven from a single thread, so `next_uniform` takes
/// `&mut self` and needs no interior locking.
pub trait RandomSource {
    /// Returns the source name (e.g., "pseudo", "seeded")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of this source
    fn description(&self) -> &'static str;

    /// Next float uniformly distributed in [0.0, 1.0)
    fn next_uniform(&mut self) -> f64;

    /// Generate n floats, each uniformly distributed in [0.0, 1.0)
    ///
    /// Default implementation calls `next_uniform` n times.
    fn uniforms(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_uniform()).collect()
    }
}

/// Information about a source
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// Source name (used in config/CLI)
    pub name: String,
    /// Human-readable description
    pub description: String,
}

/// Get a source by name
///
/// A seed always selects the seeded source. `seeded` without a seed and
/// unknown names are configuration errors.
pub fn get_source(name: &str, seed: Option<u64>) -> Result<Box<dyn RandomSource>> {
    match (name, seed) {
        ("pseudo" | "seeded", Some(seed)) => Ok(Box::new(pseudo::SeededSource::new(seed))),
        ("pseudo", None) => Ok(Box::new(pseudo::PseudoSource::new())),
        ("seeded", None) => Err(Error::Config(
            "seeded source requires a seed".to_string(),
        )),
        _ => Err(Error::Config(format!("Unknown random source: {}", name))),
    }
}

/// List all selectable sources with their info
pub fn available_sources() -> Vec<SourceInfo> {
    vec![
        SourceInfo {
            name: "pseudo".to_string(),
            description: "Thread-local pseudo-random number generator".to_string(),
        },
        SourceInfo {
            name: "seeded".to_string(),
            description: "Seeded pseudo-random number generator (requires a seed)".to_string(),
        },
    ]
}
