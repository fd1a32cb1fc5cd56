//! Generate command handler
//!
//! Generates coordinates and writes them in every output format.

use crate::config::Config;
use crate::constants::output::SAVED_MESSAGE;
use crate::coord::generate_coordinates;
use crate::error::Result;
use crate::format::{available_formats, write_all};
use crate::rng::{available_sources, get_source, RandomSource};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Generate command arguments
#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Number of coordinates to generate
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Output directory
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Random source
    #[arg(long, short = 'b')]
    pub backend: Option<String>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Create the output directory if it is missing
    #[arg(long)]
    pub create_dir: bool,

    /// List available random sources
    #[arg(short = 'B', long = "list-backends")]
    pub list_backends: bool,

    /// List output formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs, mut config: Config) -> Result<()> {
    if args.list_backends {
        list_backends();
        return Ok(());
    }

    if args.list_formats {
        list_formats();
        return Ok(());
    }

    // Command-line values override config
    if let Some(count) = args.count {
        config.generate.count = count;
    }
    if let Some(dir) = args.output {
        config.output.dir = dir;
    }
    if let Some(backend) = args.backend {
        config.generate.backend = backend;
    }
    if args.seed.is_some() {
        config.generate.seed = args.seed;
    }
    if args.create_dir {
        config.output.create_dir = true;
    }

    let mut source = get_source(&config.generate.backend, config.generate.seed)?;
    execute(&config, source.as_mut())?;

    println!("{}", SAVED_MESSAGE);
    Ok(())
}

/// Generate `config.generate.count` coordinates and write all three files
///
/// Returns the written paths in write order.
pub fn execute(config: &Config, rng: &mut dyn RandomSource) -> Result<Vec<PathBuf>> {
    info!(
        count = config.generate.count,
        source = rng.name(),
        "starting generation"
    );

    let coords = generate_coordinates(config.generate.count, rng);
    write_all(&coords, &config.output)
}

/// Print available random sources
fn list_backends() {
    println!("Available random sources:");
    for source in available_sources() {
        println!("  {:6} - {}", source.name, source.description);
    }
}

/// Print available output formats
fn list_formats() {
    println!("Output formats (all written on every run):");
    for format in available_formats() {
        println!("  {:4} - {}", format.name, format.description);
    }
}
