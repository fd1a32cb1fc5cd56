//! Fixed-sequence source
//!
//! Replays a caller-supplied list of floats, wrapping around at the end.
//! Used to stub the random source with known values.

use crate::error::{Error, Result};
use crate::rng::RandomSource;

/// Source that cycles through a fixed list of values
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    next: usize,
}

impl SequenceSource {
    /// Create a source replaying `values`
    ///
    /// Every value must lie in [0, 1) and the list must be non-empty.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::Config("sequence source needs at least one value".to_string()));
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(Error::Config(format!(
                "sequence value {} is out of range [0, 1)",
                bad
            )));
        }
        Ok(Self { values, next: 0 })
    }
}

impl RandomSource for SequenceSource {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn description(&self) -> &'static str {
        "Replays a fixed list of values"
    }

    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}
