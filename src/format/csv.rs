//! CSV writer
//!
//! Header row `X,Y` followed by one `<x>,<y>` row per coordinate. Values use
//! the shortest representation that parses back to the same `f64`.

use crate::constants::output::CSV_HEADER;
use crate::coord::Coordinate;
use crate::error::Result;
use crate::format::CoordinateWriter;
use std::io::Write;

/// Tabular writer
pub struct CsvWriter;

impl CoordinateWriter for CsvWriter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn description(&self) -> &'static str {
        "X,Y header plus one row per coordinate"
    }

    fn write_to(&self, coords: &[Coordinate], out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", CSV_HEADER)?;
        for c in coords {
            writeln!(out, "{},{}", c.x, c.y)?;
        }
        Ok(())
    }
}
