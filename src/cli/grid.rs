//! Grid command handler
//!
//! Buckets stored coordinates into an n x n grid and prints each cell's
//! center, centroid and members.

use crate::cli::show::resolve_input;
use crate::config::Config;
use crate::constants::report::DECIMALS;
use crate::coord::grid::Grid;
use crate::error::Result;
use crate::format::json::read_coordinates;
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

/// Grid command arguments
#[derive(Args)]
pub struct GridArgs {
    /// JSON coordinate file (defaults to the configured JSON output)
    pub file: Option<PathBuf>,

    /// Grid dimension n (n x n cells)
    #[arg(long, short = 's')]
    pub size: Option<usize>,
}

/// Run the grid command
pub fn run(args: GridArgs, config: Config) -> Result<()> {
    let path = resolve_input(args.file, &config)?;
    let coords = read_coordinates(&path, config.grid.max_coordinates)?;
    let size = args.size.unwrap_or(config.grid.size);

    let grid = Grid::build(&coords, size, config.grid.max_per_cell)?;
    if grid.skipped() > 0 {
        warn!(skipped = grid.skipped(), "coordinates not assigned to any cell");
    }

    print!("{}", render_grid(&grid));
    Ok(())
}

/// Per cell: `Cell (cx, cy):`, its centroid, its members, then a blank line
pub fn render_grid(grid: &Grid) -> String {
    let mut output = String::new();

    for cell in grid.cells() {
        output.push_str(&format!("Cell {:.*}:\n", DECIMALS, cell.center));
        match &cell.centroid {
            Some(centroid) => {
                output.push_str(&format!("Centroid: {:.*}\n", DECIMALS, centroid));
            }
            None => output.push_str("Centroid: none\n"),
        }
        for member in &cell.members {
            output.push_str(&format!("{:.*}\n", DECIMALS, member));
        }
        output.push('\n');
    }

    output
}
