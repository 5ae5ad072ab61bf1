//! The persisted belief state: everything the bot knows about the
//! opponent board between invocations.

#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::VecDeque, vec::Vec};

use crate::{
    bitboard::BitBoard,
    common::{Cell, StateError},
    config::{ships_with_length, BOARD_SIZE, NUM_SHIPS, SHIPS},
};

/// Set of cells on the standard board.
pub type CellSet = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Knowledge accumulated over a game.
///
/// `hits`, `misses` and `targets` keep their order; `possible_moves` is a
/// set and `sunk_ships` a multiset of lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BeliefState {
    pub hits: Vec<Cell>,
    pub misses: Vec<Cell>,
    pub targets: VecDeque<Cell>,
    pub sunk_ships: Vec<usize>,
    pub possible_moves: CellSet,
    pub last_move: Option<Cell>,
}

impl BeliefState {
    /// Fresh state for a new game: every cell possible, nothing known.
    pub fn new() -> Self {
        Self {
            hits: Vec::new(),
            misses: Vec::new(),
            targets: VecDeque::new(),
            sunk_ships: Vec::new(),
            possible_moves: CellSet::full(),
            last_move: None,
        }
    }

    /// Lookup set of confirmed hits.
    pub fn hit_set(&self) -> CellSet {
        to_set(self.hits.iter())
    }

    /// Lookup set of confirmed misses.
    pub fn miss_set(&self) -> CellSet {
        to_set(self.misses.iter())
    }

    /// Lookup set of queued targets.
    pub fn target_set(&self) -> CellSet {
        to_set(self.targets.iter())
    }

    /// Lengths of ships still contributing to the density scan, indexed
    /// like [`SHIPS`]. An entry is zero when any ship of that length has
    /// been reported sunk, so two ships sharing a length drop out together.
    pub fn remaining_lengths(&self) -> [usize; NUM_SHIPS] {
        core::array::from_fn(|i| {
            let len = SHIPS[i].length();
            if self.sunk_ships.contains(&len) {
                0
            } else {
                len
            }
        })
    }

    /// True once as many ships as the inventory holds have been sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk_ships.len() >= NUM_SHIPS
    }

    /// Check the invariants a loaded state must satisfy before the engine
    /// will trust it.
    pub fn validate(&self) -> Result<(), StateError> {
        let mut fired = CellSet::new();
        for &cell in self.hits.iter().chain(self.misses.iter()) {
            if !cell.in_bounds() {
                return Err(StateError::CellOutOfBounds(cell));
            }
            if fired.contains(cell) {
                return Err(StateError::DuplicateShot(cell));
            }
            if self.possible_moves.contains(cell) {
                return Err(StateError::FiredCellStillPossible(cell));
            }
            let _ = fired.insert(cell);
        }
        if let Some(cell) = self
            .targets
            .iter()
            .chain(self.last_move.iter())
            .find(|c| !c.in_bounds())
        {
            return Err(StateError::CellOutOfBounds(*cell));
        }
        if self.sunk_ships.len() > NUM_SHIPS {
            return Err(StateError::InvalidSunkShips);
        }
        for &len in &self.sunk_ships {
            let sunk = self.sunk_ships.iter().filter(|&&l| l == len).count();
            if sunk > ships_with_length(len) {
                return Err(StateError::InvalidSunkShips);
            }
        }
        Ok(())
    }
}

impl Default for BeliefState {
    fn default() -> Self {
        Self::new()
    }
}

fn to_set<'a>(cells: impl Iterator<Item = &'a Cell>) -> CellSet {
    let mut set = CellSet::new();
    for &cell in cells {
        // Off-board cells never match a membership test anyway.
        let _ = set.insert(cell);
    }
    set
}
