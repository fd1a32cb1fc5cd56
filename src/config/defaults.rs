//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default number of coordinates to generate
pub const DEFAULT_COUNT: usize = 50;

/// Default random source
pub const DEFAULT_BACKEND: &str = "pseudo";

/// Default output directory (relative to the working directory)
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Default structured-data file name
pub const DEFAULT_JSON_FILE: &str = "coordinates.json";

/// Default tabular file name
pub const DEFAULT_CSV_FILE: &str = "coordinates.csv";

/// Default plain-text file name
pub const DEFAULT_TXT_FILE: &str = "coordinates.txt";

/// Default grid dimension (n x n)
pub const DEFAULT_GRID_SIZE: usize = 2;

/// Largest accepted grid dimension (MAX_GRID_SIZE^2 cells are allocated)
pub const MAX_GRID_SIZE: usize = 1024;

/// Maximum coordinates kept per grid cell
pub const DEFAULT_MAX_PER_CELL: usize = 100;

/// Maximum coordinates accepted when loading a file
pub const DEFAULT_MAX_COORDINATES: usize = 100;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "coordgen";
