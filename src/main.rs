//! coordgen CLI entry point
//!
//! Random unit-square coordinate generator

use coordgen::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
