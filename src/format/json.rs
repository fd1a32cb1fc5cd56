//! JSON writer and loader

use crate::coord::Coordinate;
use crate::error::{Error, Result};
use crate::format::CoordinateWriter;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::debug;

/// JSON writer - a compact array of `[x, y]` pairs
pub struct JsonWriter;

impl CoordinateWriter for JsonWriter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn description(&self) -> &'static str {
        "Array of [x, y] pairs"
    }

    fn write_to(&self, coords: &[Coordinate], out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer(out, coords)?;
        Ok(())
    }
}

/// Load a coordinate file written by `JsonWriter`
///
/// The document must be an array of at most `max` entries, each an array of
/// exactly two numbers.
pub fn read_coordinates(path: &Path, max: usize) -> Result<Vec<Coordinate>> {
    let file = File::open(path)?;
    let root: Value = serde_json::from_reader(BufReader::new(file))?;
    let coords = parse_coordinates(&root, max)?;

    debug!(path = %path.display(), count = coords.len(), "loaded coordinates");
    Ok(coords)
}

fn parse_coordinates(root: &Value, max: usize) -> Result<Vec<Coordinate>> {
    let entries = root.as_array().ok_or_else(|| {
        Error::InvalidCoordinates("document is not an array".to_string())
    })?;

    if entries.len() > max {
        return Err(Error::InvalidCoordinates(format!(
            "{} coordinates exceeds the maximum of {}",
            entries.len(),
            max
        )));
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry.as_array().map(Vec::as_slice) {
            Some([x, y]) => match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => Ok(Coordinate::new(x, y)),
                _ => Err(Error::InvalidCoordinates(format!(
                    "entry {} has a non-numeric component",
                    i
                ))),
            },
            _ => Err(Error::InvalidCoordinates(format!(
                "entry {} is not a two-element array",
                i
            ))),
        })
        .collect()
}
