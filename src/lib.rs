//! coordgen: Random Coordinate Generator
//!
//! A library and CLI tool that generates random points in the unit square and
//! saves them as JSON, CSV and plain text.
//!
//! ## Features
//!
//! - Injectable random sources (thread-local, seeded, fixed sequence)
//! - JSON, CSV and TXT writers sharing one `CoordinateWriter` trait
//! - Loading a JSON coordinate file back with validation
//! - n x n grid bucketing with per-cell centroids
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coordgen::config::Config;
//! use coordgen::coord::generate_coordinates;
//! use coordgen::format::write_all;
//! use coordgen::rng::pseudo::SeededSource;
//!
//! let config = Config::default();
//! let mut source = SeededSource::new(42);
//!
//! let coords = generate_coordinates(config.generate.count, &mut source);
//! let paths = write_all(&coords, &config.output).unwrap();
//! println!("Wrote {} files", paths.len());
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod rng;

// Re-export commonly used types
pub use config::Config;
pub use coord::{generate_coordinates, Coordinate};
pub use error::{Error, Result};
