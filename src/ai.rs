// Probability-density scoring for the opponent board.
// Uses no_std and avoids heap allocations except for the tie set.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

use crate::{
    belief::CellSet,
    common::Cell,
    config::{BOARD_SIZE, NUM_SHIPS},
    ship::{Orientation, Placement},
};
use rand::Rng;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Per-cell count of ship placements that could cover the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityGrid {
    scores: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl DensityGrid {
    /// Score of `cell`; zero for cells off the board.
    pub fn score(&self, cell: Cell) -> u32 {
        if cell.in_bounds() {
            self.scores[cell.x][cell.y]
        } else {
            0
        }
    }

    /// Highest score among the cells of `open`, or `None` if `open` is empty.
    pub fn max_over(&self, open: &CellSet) -> Option<u32> {
        open.cells().map(|c| self.score(c)).max()
    }

    /// Cells of `open` that reach the highest score, in row-major order.
    pub fn best_cells(&self, open: &CellSet) -> Vec<Cell> {
        match self.max_over(open) {
            Some(max) => open.cells().filter(|&c| self.score(c) == max).collect(),
            None => Vec::new(),
        }
    }

    /// Sum of every score on the board.
    pub fn total(&self) -> u64 {
        self.scores
            .iter()
            .flat_map(|row| row.iter())
            .map(|&v| v as u64)
            .sum()
    }
}

/// Renders the grid with column indices across the top and row indices
/// down the side.
impl fmt::Display for DensityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  x\\y")?;
        for y in 0..GRID_SIZE {
            write!(f, " {:>3}", y)?;
        }
        writeln!(f)?;
        for x in 0..GRID_SIZE {
            write!(f, "{:>5}", x)?;
            for y in 0..GRID_SIZE {
                write!(f, " {:>3}", self.scores[x][y])?;
            }
            if x + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Count, for every cell, the horizontal and vertical placements of each
/// remaining ship that lie entirely inside `possible`. Entries of zero in
/// `remaining_lengths` are skipped. Cells outside `possible` always score
/// zero because no counted placement can cover them.
pub fn calc_density(possible: &CellSet, remaining_lengths: &[usize; NUM_SHIPS]) -> DensityGrid {
    let mut scores = [[0u32; GRID_SIZE]; GRID_SIZE];

    for &len in remaining_lengths.iter() {
        if len == 0 {
            continue;
        }
        for orient in Orientation::ALL {
            for placement in Placement::all_fitting(len, orient, GRID_SIZE) {
                if !placement.fits_within(possible) {
                    continue;
                }
                for cell in placement.cells() {
                    scores[cell.x][cell.y] += 1;
                }
            }
        }
    }

    DensityGrid { scores }
}

/// Pick uniformly among the highest-scoring cells of `open`.
pub fn pick_best<R: Rng + ?Sized>(grid: &DensityGrid, open: &CellSet, rng: &mut R) -> Option<Cell> {
    let candidates = grid.best_cells(open);
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
