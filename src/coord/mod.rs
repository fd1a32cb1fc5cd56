//! Coordinate generation and analysis
//!
//! This module handles:
//! - The unit-square `Coordinate` type
//! - Generating coordinate sequences from a random source
//! - Grid bucketing and per-cell centroids

pub mod grid;

use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A point in the unit square
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both components lie in [0, 1)
    pub fn in_unit_square(&self) -> bool {
        (0.0..1.0).contains(&self.x) && (0.0..1.0).contains(&self.y)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y]
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// Generate `count` coordinates from the given random source
///
/// Each coordinate draws x first, then y. A count of zero yields an empty
/// sequence.
pub fn generate_coordinates(count: usize, rng: &mut dyn RandomSource) -> Vec<Coordinate> {
    debug!(count, source = rng.name(), "generating coordinates");

    (0..count)
        .map(|_| {
            let x = rng.next_uniform();
            let y = rng.next_uniform();
            Coordinate::new(x, y)
        })
        .collect()
}
