//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/coordgen/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation settings
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Output file locations
    #[serde(default)]
    pub output: OutputConfig,

    /// Grid analysis settings
    #[serde(default)]
    pub grid: GridConfig,
}

/// Generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Number of coordinates per run
    #[serde(default = "default_count")]
    pub count: usize,

    /// Random source name
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Seed for reproducible runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Output file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory holding all three files
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_json_file")]
    pub json_file: String,

    #[serde(default = "default_csv_file")]
    pub csv_file: String,

    #[serde(default = "default_txt_file")]
    pub txt_file: String,

    /// Create `dir` before writing instead of failing when it is missing
    #[serde(default)]
    pub create_dir: bool,
}

/// Grid analysis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid dimension n (n x n cells)
    #[serde(default = "default_grid_size")]
    pub size: usize,

    /// Maximum coordinates kept per cell
    #[serde(default = "default_max_per_cell")]
    pub max_per_cell: usize,

    /// Maximum coordinates accepted from a file
    #[serde(default = "default_max_coordinates")]
    pub max_coordinates: usize,
}

// Default value functions for serde
fn default_count() -> usize {
    DEFAULT_COUNT
}
fn default_backend() -> String {
    DEFAULT_BACKEND.to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}
fn default_json_file() -> String {
    DEFAULT_JSON_FILE.to_string()
}
fn default_csv_file() -> String {
    DEFAULT_CSV_FILE.to_string()
}
fn default_txt_file() -> String {
    DEFAULT_TXT_FILE.to_string()
}
fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}
fn default_max_per_cell() -> usize {
    DEFAULT_MAX_PER_CELL
}
fn default_max_coordinates() -> usize {
    DEFAULT_MAX_COORDINATES
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            backend: default_backend(),
            seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            json_file: default_json_file(),
            csv_file: default_csv_file(),
            txt_file: default_txt_file(),
            create_dir: false,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_grid_size(),
            max_per_cell: default_max_per_cell(),
            max_coordinates: default_max_coordinates(),
        }
    }
}

impl OutputConfig {
    /// Destination path for a writer format name ("json", "csv", "txt")
    pub fn path_for(&self, format: &str) -> Option<PathBuf> {
        let file = match format {
            "json" => &self.json_file,
            "csv" => &self.csv_file,
            "txt" => &self.txt_file,
            _ => return None,
        };
        Some(self.dir.join(file))
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist. An undeterminable or
    /// unwritable config location only costs the saved file, never the run.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_or_create(&path),
            Err(e) => {
                warn!(error = %e, "no config location, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Load `path`, writing a default config there first if it is missing
    ///
    /// Failure to write the default file is logged and the defaults are
    /// returned. A present but unreadable or malformed file is still an error.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Config::default();
        if let Err(e) = config.save_to(path) {
            warn!(path = %path.display(), error = %e, "could not save default config");
        }
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file yields the defaults without writing anything.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        debug!(path = %path.display(), "loaded config");
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["generate", "count"] => Some(self.generate.count.to_string()),
            ["generate", "backend"] => Some(self.generate.backend.clone()),
            ["generate", "seed"] => Some(
                self.generate
                    .seed
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
            ),

            ["output", "dir"] => Some(self.output.dir.display().to_string()),
            ["output", "json_file"] => Some(self.output.json_file.clone()),
            ["output", "csv_file"] => Some(self.output.csv_file.clone()),
            ["output", "txt_file"] => Some(self.output.txt_file.clone()),
            ["output", "create_dir"] => Some(self.output.create_dir.to_string()),

            ["grid", "size"] => Some(self.grid.size.to_string()),
            ["grid", "max_per_cell"] => Some(self.grid.max_per_cell.to_string()),
            ["grid", "max_coordinates"] => Some(self.grid.max_coordinates.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["generate", "count"] => {
                self.generate.count = parse_value(value, "count")?;
            }
            ["generate", "backend"] => {
                self.generate.backend = value.to_string();
            }
            ["generate", "seed"] => {
                // Empty value clears the seed
                self.generate.seed = if value.is_empty() {
                    None
                } else {
                    Some(parse_value(value, "seed")?)
                };
            }

            ["output", "dir"] => {
                self.output.dir = PathBuf::from(value);
            }
            ["output", "json_file"] => {
                self.output.json_file = value.to_string();
            }
            ["output", "csv_file"] => {
                self.output.csv_file = value.to_string();
            }
            ["output", "txt_file"] => {
                self.output.txt_file = value.to_string();
            }
            ["output", "create_dir"] => {
                self.output.create_dir = parse_value(value, "boolean")?;
            }

            ["grid", "size"] => {
                let size: usize = parse_value(value, "grid size")?;
                self.grid.size = check_grid_size(size)?;
            }
            ["grid", "max_per_cell"] => {
                self.grid.max_per_cell = parse_value(value, "max_per_cell")?;
            }
            ["grid", "max_coordinates"] => {
                self.grid.max_coordinates = parse_value(value, "max_coordinates")?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "generate.count",
            "generate.backend",
            "generate.seed",
            "output.dir",
            "output.json_file",
            "output.csv_file",
            "output.txt_file",
            "output.create_dir",
            "grid.size",
            "grid.max_per_cell",
            "grid.max_coordinates",
        ]
    }
}

/// Accept a grid dimension in `1..=MAX_GRID_SIZE`
pub fn check_grid_size(size: usize) -> Result<usize> {
    if size == 0 || size > MAX_GRID_SIZE {
        return Err(Error::Config(format!(
            "grid size {} is out of range [1, {}]",
            size, MAX_GRID_SIZE
        )));
    }
    Ok(size)
}

fn parse_value<T: std::str::FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {} value: {}", what, value)))
}
