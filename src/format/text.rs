//! Plain-text writer

use crate::coord::Coordinate;
use crate::error::Result;
use crate::format::CoordinateWriter;
use std::io::Write;

/// Text writer - one `<x> <y>` line per coordinate
pub struct TextWriter;

impl CoordinateWriter for TextWriter {
    fn name(&self) -> &'static str {
        "txt"
    }

    fn description(&self) -> &'static str {
        "Space-separated x y per line"
    }

    fn write_to(&self, coords: &[Coordinate], out: &mut dyn Write) -> Result<()> {
        for c in coords {
            writeln!(out, "{} {}", c.x, c.y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_format() {
        let mut buf = Vec::new();
        TextWriter
            .write_to(&[Coordinate::new(0.1, 0.2), Coordinate::new(0.75, 0.5)], &mut buf)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0.1 0.2\n0.75 0.5\n");
    }

    #[test]
    fn test_empty_is_empty() {
        let mut buf = Vec::new();
        TextWriter.write_to(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_text_writer_info() {
        assert_eq!(TextWriter.name(), "txt");
        assert!(!TextWriter.description().is_empty());
    }
}
