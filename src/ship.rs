//! Ship definitions and straight-line placements on the board.

use crate::bitboard::BitBoard;
use crate::common::Cell;
use num_traits::{PrimInt, Unsigned, Zero};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Along a row: `x` fixed, `y` increasing.
    Horizontal,
    /// Along a column: `y` fixed, `x` increasing.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A run of `length` consecutive cells starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub origin: Cell,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    pub const fn new(origin: Cell, orientation: Orientation, length: usize) -> Self {
        Self {
            origin,
            orientation,
            length,
        }
    }

    /// Every placement of a ship of `length` that fits on an `n`×`n`
    /// board in the given orientation, in row-major origin order.
    pub fn all_fitting(
        length: usize,
        orientation: Orientation,
        n: usize,
    ) -> impl Iterator<Item = Placement> {
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (n, (n + 1).saturating_sub(length)),
            Orientation::Vertical => ((n + 1).saturating_sub(length), n),
        };
        let max_x = if length == 0 { 0 } else { max_x };
        (0..max_x).flat_map(move |x| {
            (0..max_y).map(move |y| Placement::new(Cell::new(x, y), orientation, length))
        })
    }

    /// Cells covered by the placement, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let Placement {
            origin,
            orientation,
            length,
        } = *self;
        (0..length).map(move |k| match orientation {
            Orientation::Horizontal => Cell::new(origin.x, origin.y + k),
            Orientation::Vertical => Cell::new(origin.x + k, origin.y),
        })
    }

    /// True when every covered cell is set in `open`.
    pub fn fits_within<T, const N: usize>(&self, open: &BitBoard<T, N>) -> bool
    where
        T: PrimInt + Unsigned + Zero,
    {
        self.cells().all(|c| open.contains(c))
    }
}
