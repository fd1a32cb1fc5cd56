//! Output writers
//!
//! Provides trait-based serialization of a coordinate sequence into the
//! structured-data (JSON), tabular (CSV) and plain-text (TXT) formats.

pub mod csv;
pub mod json;
pub mod text;

use crate::config::OutputConfig;
use crate::coord::Coordinate;
use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Information about an output format
#[derive(Debug, Clone)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for coordinate writers
pub trait CoordinateWriter {
    /// Format name, also used to look up the destination file
    fn name(&self) -> &'static str;

    /// Format description
    fn description(&self) -> &'static str;

    /// Serialize the full sequence into `out`
    fn write_to(&self, coords: &[Coordinate], out: &mut dyn Write) -> Result<()>;
}

/// All writers, in the order a run writes them
pub fn all_writers() -> Vec<Box<dyn CoordinateWriter>> {
    vec![
        Box::new(json::JsonWriter),
        Box::new(csv::CsvWriter),
        Box::new(text::TextWriter),
    ]
}

/// List all available formats
pub fn available_formats() -> Vec<FormatInfo> {
    all_writers()
        .iter()
        .map(|w| FormatInfo {
            name: w.name().to_string(),
            description: w.description().to_string(),
        })
        .collect()
}

/// Write `coords` to `path` with a single writer
///
/// The destination is created or truncated, held open only for the
/// duration of this call, and flushed before returning.
pub fn write_file(writer: &dyn CoordinateWriter, coords: &[Coordinate], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    writer.write_to(coords, &mut out)?;
    out.flush()?;

    debug!(format = writer.name(), path = %path.display(), count = coords.len(), "wrote file");
    Ok(())
}

/// Write `coords` in every format: JSON, then CSV, then TXT
///
/// The first failure aborts the remaining writes; files already written are
/// left in place. Returns the written paths in order.
pub fn write_all(coords: &[Coordinate], output: &OutputConfig) -> Result<Vec<PathBuf>> {
    if output.create_dir {
        fs::create_dir_all(&output.dir)?;
    }

    let mut written = Vec::new();
    for writer in all_writers() {
        let path = output.path_for(writer.name()).ok_or_else(|| {
            Error::Config(format!("No output file configured for {}", writer.name()))
        })?;
        write_file(writer.as_ref(), coords, &path)?;
        written.push(path);
    }

    info!(count = coords.len(), dir = %output.dir.display(), "all formats written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::generate_coordinates;
    use crate::rng::pseudo::{PseudoSource, SeededSource};
    use crate::rng::sequence::SequenceSource;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    fn output_in(dir: &Path) -> OutputConfig {
        OutputConfig {
            dir: dir.to_path_buf(),
            ..OutputConfig::default()
        }
    }

    fn read(output: &OutputConfig, format: &str) -> String {
        fs::read_to_string(output.path_for(format).unwrap()).unwrap()
    }

    #[test]
    fn test_available_formats_order() {
        let names: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["json", "csv", "txt"]);
    }

    #[test]
    fn test_stubbed_three_coordinates() {
        let temp_dir = TempDir::new().unwrap();
        let output = output_in(temp_dir.path());
        let mut source = SequenceSource::new(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();
        let coords = generate_coordinates(3, &mut source);

        let written = write_all(&coords, &output).unwrap();
        assert_eq!(written.len(), 3);

        assert_eq!(read(&output, "json"), "[[0.1,0.2],[0.3,0.4],[0.5,0.6]]");
        assert_eq!(read(&output, "csv"), "X,Y\n0.1,0.2\n0.3,0.4\n0.5,0.6\n");
        assert_eq!(read(&output, "txt"), "0.1 0.2\n0.3 0.4\n0.5 0.6\n");
    }

    #[test]
    fn test_zero_coordinates() {
        let temp_dir = TempDir::new().unwrap();
        let output = output_in(temp_dir.path());

        write_all(&[], &output).unwrap();

        assert_eq!(read(&output, "json"), "[]");
        assert_eq!(read(&output, "csv"), "X,Y\n");
        assert_eq!(read(&output, "txt"), "");
    }

    #[test]
    fn test_round_trip_all_formats() {
        let temp_dir = TempDir::new().unwrap();
        let output = output_in(temp_dir.path());
        let coords = generate_coordinates(50, &mut PseudoSource::new());

        write_all(&coords, &output).unwrap();

        let from_json: Vec<[f64; 2]> = serde_json::from_str(&read(&output, "json")).unwrap();
        assert_eq!(from_json.len(), coords.len());
        for (pair, c) in from_json.iter().zip(&coords) {
            assert_relative_eq!(pair[0], c.x);
            assert_relative_eq!(pair[1], c.y);
        }

        let csv = read(&output, "csv");
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("X,Y"));
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), coords.len());
        for (row, c) in rows.iter().zip(&coords) {
            let fields: Vec<f64> = row.split(',').map(|f| f.parse().unwrap()).collect();
            assert_eq!(fields, vec![c.x, c.y]);
        }

        let txt = read(&output, "txt");
        let pairs: Vec<Vec<f64>> = txt
            .lines()
            .map(|l| l.split_whitespace().map(|f| f.parse().unwrap()).collect())
            .collect();
        assert_eq!(pairs.len(), coords.len());
        for (pair, c) in pairs.iter().zip(&coords) {
            assert_eq!(pair, &vec![c.x, c.y]);
        }
    }

    #[test]
    fn test_overwrites_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let output = output_in(temp_dir.path());
        let txt_path = output.path_for("txt").unwrap();
        fs::write(&txt_path, "stale content that is much longer than the new one\n").unwrap();

        let coords = [Coordinate::new(0.5, 0.25)];
        write_all(&coords, &output).unwrap();

        assert_eq!(fs::read_to_string(txt_path).unwrap(), "0.5 0.25\n");
    }

    #[test]
    fn test_same_shape_different_content() {
        let first_dir = TempDir::new().unwrap();
        let second_dir = TempDir::new().unwrap();
        let first = output_in(first_dir.path());
        let second = output_in(second_dir.path());

        write_all(&generate_coordinates(10, &mut PseudoSource::new()), &first).unwrap();
        write_all(&generate_coordinates(10, &mut PseudoSource::new()), &second).unwrap();

        assert_eq!(read(&first, "txt").lines().count(), 10);
        assert_eq!(read(&second, "txt").lines().count(), 10);
        assert_eq!(read(&first, "csv").lines().count(), 11);
        assert_ne!(read(&first, "txt"), read(&second, "txt"));
    }

    #[test]
    fn test_seeded_runs_identical() {
        let first_dir = TempDir::new().unwrap();
        let second_dir = TempDir::new().unwrap();
        let first = output_in(first_dir.path());
        let second = output_in(second_dir.path());

        write_all(&generate_coordinates(10, &mut SeededSource::new(5)), &first).unwrap();
        write_all(&generate_coordinates(10, &mut SeededSource::new(5)), &second).unwrap();

        for format in ["json", "csv", "txt"] {
            assert_eq!(read(&first, format), read(&second, format));
        }
    }

    #[test]
    fn test_missing_directory_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let output = output_in(&temp_dir.path().join("missing"));

        let result = write_all(&[Coordinate::new(0.1, 0.2)], &output);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!output.path_for("csv").unwrap().exists());
        assert!(!output.path_for("txt").unwrap().exists());
    }

    #[test]
    fn test_later_failure_keeps_earlier_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut output = output_in(temp_dir.path());
        output.csv_file = "no_such_dir/coordinates.csv".to_string();

        let result = write_all(&[Coordinate::new(0.1, 0.2)], &output);
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(read(&output, "json"), "[[0.1,0.2]]");
        assert!(!output.path_for("txt").unwrap().exists());
    }

    #[test]
    fn test_create_dir_option() {
        let temp_dir = TempDir::new().unwrap();
        let mut output = output_in(&temp_dir.path().join("a").join("b"));
        output.create_dir = true;

        write_all(&[Coordinate::new(0.1, 0.2)], &output).unwrap();
        assert_eq!(read(&output, "txt"), "0.1 0.2\n");
    }
}
