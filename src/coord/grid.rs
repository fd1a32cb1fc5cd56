//! Grid bucketing
//!
//! Partitions the unit square into an n x n grid of equal cells, assigns each
//! coordinate to the cell containing it, and computes per-cell centroids.

use crate::config::check_grid_size;
use crate::coord::Coordinate;
use crate::error::Result;

/// One cell of the grid
#[derive(Debug, Clone)]
pub struct GridCell {
    /// Column index (along x)
    pub i: usize,
    /// Row index (along y)
    pub j: usize,
    /// Center of the cell
    pub center: Coordinate,
    /// Coordinates assigned to this cell, in input order
    pub members: Vec<Coordinate>,
    /// Mean of the members; `None` for an empty cell
    pub centroid: Option<Coordinate>,
}

impl GridCell {
    fn new(i: usize, j: usize, cell_size: f64) -> Self {
        Self {
            i,
            j,
            center: Coordinate::new(
                i as f64 * cell_size + cell_size / 2.0,
                j as f64 * cell_size + cell_size / 2.0,
            ),
            members: Vec::new(),
            centroid: None,
        }
    }

    fn update_centroid(&mut self) {
        if self.members.is_empty() {
            self.centroid = None;
            return;
        }

        let n = self.members.len() as f64;
        let (sum_x, sum_y) = self
            .members
            .iter()
            .fold((0.0, 0.0), |(sx, sy), c| (sx + c.x, sy + c.y));
        self.centroid = Some(Coordinate::new(sum_x / n, sum_y / n));
    }
}

/// An n x n grid over the unit square
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<GridCell>,
    skipped: usize,
}

impl Grid {
    /// Bucket `coords` into a `size` x `size` grid
    ///
    /// `size` must lie in `1..=MAX_GRID_SIZE`. Coordinates outside the unit
    /// square are skipped. A cell that already holds `max_per_cell` members
    /// ignores further coordinates.
    pub fn build(coords: &[Coordinate], size: usize, max_per_cell: usize) -> Result<Self> {
        let size = check_grid_size(size)?;

        let cell_size = 1.0 / size as f64;
        let mut cells: Vec<GridCell> = (0..size)
            .flat_map(|i| (0..size).map(move |j| (i, j)))
            .map(|(i, j)| GridCell::new(i, j, cell_size))
            .collect();
        let mut skipped = 0;

        for &c in coords {
            let (Some(i), Some(j)) = (cell_index(c.x, size), cell_index(c.y, size)) else {
                skipped += 1;
                continue;
            };

            let cell = &mut cells[i * size + j];
            if cell.members.len() < max_per_cell {
                cell.members.push(c);
            } else {
                skipped += 1;
            }
        }

        for cell in &mut cells {
            cell.update_centroid();
        }

        Ok(Self {
            size,
            cells,
            skipped,
        })
    }

    /// All cells, ordered by i then j
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cell at column `i`, row `j`
    pub fn cell(&self, i: usize, j: usize) -> Option<&GridCell> {
        if i < self.size && j < self.size {
            self.cells.get(i * self.size + j)
        } else {
            None
        }
    }

    /// Number of coordinates that were not assigned to any cell
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Cell index for one component, `None` when it falls outside [0, size)
fn cell_index(v: f64, size: usize) -> Option<usize> {
    let idx = (v * size as f64).floor();
    if idx >= 0.0 && idx < size as f64 {
        Some(idx as usize)
    } else {
        None
    }
}
