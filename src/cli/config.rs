//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;
use std::path::{Path, PathBuf};

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "generate.count")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
///
/// `config_path` is the `--config` override; without it the XDG location is
/// used.
pub fn run(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    let path = effective_path(config_path)?;

    if args.path {
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save_to(&path)?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = if config_path.is_some() {
        Config::load_from(&path)?
    } else {
        Config::load()?
    };

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            print!("{}", render_all(&config));
        }

        // Key only: show that value
        (Some(key), None) => {
            let value = config.get(key).ok_or_else(|| unknown_key(key))?;
            println!("{}", value);
        }

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save_to(&path)?;
            println!("{} = {}", key, value);
        }

        (None, Some(_)) => {
            return Err(Error::Config(
                "Must specify a key to set a value".to_string(),
            ));
        }
    }

    Ok(())
}

fn unknown_key(key: &str) -> Error {
    Error::Config(format!(
        "Unknown config key: {} (available: {})",
        key,
        Config::available_keys().join(", ")
    ))
}

/// All keys grouped by section, TOML-like
fn render_all(config: &Config) -> String {
    let mut output = String::new();
    let mut section = "";

    for key in Config::available_keys() {
        let Some((prefix, name)) = key.split_once('.') else {
            continue;
        };
        if prefix != section {
            if !section.is_empty() {
                output.push('\n');
            }
            output.push_str(&format!("[{}]\n", prefix));
            section = prefix;
        }
        let value = config.get(key).unwrap_or_default();
        output.push_str(&format!("{} = {}\n", name, value));
    }

    output
}

/// Path the config command would operate on
pub fn effective_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}
