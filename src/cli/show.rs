//! Show command handler
//!
//! Loads a JSON coordinate file and prints every coordinate.

use crate::config::Config;
use crate::constants::report::DECIMALS;
use crate::coord::Coordinate;
use crate::error::{Error, Result};
use crate::format::json::read_coordinates;
use clap::Args;
use std::path::PathBuf;

/// Show command arguments
#[derive(Args)]
pub struct ShowArgs {
    /// JSON coordinate file (defaults to the configured JSON output)
    pub file: Option<PathBuf>,
}

/// Run the show command
pub fn run(args: ShowArgs, config: Config) -> Result<()> {
    let path = resolve_input(args.file, &config)?;
    let coords = read_coordinates(&path, config.grid.max_coordinates)?;
    print!("{}", render_coordinates(&coords));
    Ok(())
}

/// Explicit file, or the JSON file a `generate` run would write
pub(crate) fn resolve_input(file: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => config
            .output
            .path_for("json")
            .ok_or_else(|| Error::Config("No JSON output file configured".to_string())),
    }
}

/// `Coordinates:` header followed by one `(x, y)` line per coordinate
pub fn render_coordinates(coords: &[Coordinate]) -> String {
    let mut output = String::from("Coordinates:\n");
    for c in coords {
        output.push_str(&format!("{:.*}\n", DECIMALS, c));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_coordinates() {
        let output = render_coordinates(&[Coordinate::new(0.5, 0.25)]);
        assert_eq!(
            output,
            "Coordinates:\n(0.5000000000000000, 0.2500000000000000)\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_coordinates(&[]), "Coordinates:\n");
    }

    #[test]
    fn test_resolve_input_default() {
        let config = Config::default();
        let path = resolve_input(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("data").join("coordinates.json"));

        let explicit = resolve_input(Some(PathBuf::from("x.json")), &config).unwrap();
        assert_eq!(explicit, PathBuf::from("x.json"));
    }

    #[test]
    fn test_run_missing_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = ShowArgs {
            file: Some(dir.path().join("absent.json")),
        };
        assert!(matches!(run(args, Config::default()), Err(Error::Io(_))));
    }
}
