//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod generate;
pub mod grid;
pub mod show;

use crate::config::Config;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Random unit-square coordinate generator
#[derive(Parser)]
#[command(name = "coordgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate coordinates and write JSON, CSV and TXT files
    Generate(generate::GenerateArgs),

    /// Print the coordinates stored in a JSON file
    Show(show::ShowArgs),

    /// Bucket stored coordinates into a grid and print cell centroids
    Grid(grid::GridArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub fn run() -> Result<()> {
    init_logging();
    dispatch(Cli::parse())
}

/// Route a parsed command line to its handler
pub fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        None => generate::run(generate::GenerateArgs::default(), load_config(config_path)?),
        Some(Commands::Generate(args)) => generate::run(args, load_config(config_path)?),
        Some(Commands::Show(args)) => show::run(args, load_config(config_path)?),
        Some(Commands::Grid(args)) => grid::run(args, load_config(config_path)?),
        Some(Commands::Config(args)) => config::run(args, config_path),
    }
}

/// Log to stderr so stdout only carries command output
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the explicit config file if one was given, else the XDG default
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
