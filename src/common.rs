//! Common types: grid cells, shot feedback and the error enums shared by
//! the engine and its adapters.

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

use crate::config::BOARD_SIZE;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// A single grid coordinate. `x` selects the row and `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies on the standard board.
    pub fn in_bounds(&self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// Orthogonal neighbors in the order (x-1,y), (x+1,y), (x,y-1),
    /// (x,y+1), omitting any that fall off the board.
    pub fn neighbors(&self) -> impl Iterator<Item = Cell> {
        let Cell { x, y } = *self;
        [
            x.checked_sub(1).map(|nx| Cell::new(nx, y)),
            Some(Cell::new(x + 1, y)),
            y.checked_sub(1).map(|ny| Cell::new(x, ny)),
            Some(Cell::new(x, y + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(Cell::in_bounds)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Cell::new(x, y)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

/// Prints the cell the way moves are reported: `x y`.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Result of the previous shot as reported by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Hit,
    Miss,
    /// No result to record, e.g. before the first shot of a game.
    None,
}

impl Feedback {
    /// Parse a feedback token. Anything other than `HIT` or `MISS`
    /// (case-sensitive) is treated as `None`; see [`Feedback::is_known_token`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "HIT" => Feedback::Hit,
            "MISS" => Feedback::Miss,
            _ => Feedback::None,
        }
    }

    /// True for the three tokens the protocol defines.
    pub fn is_known_token(token: &str) -> bool {
        matches!(token, "HIT" | "MISS" | "NONE")
    }
}

/// Length of a ship reported sunk by the previous shot, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunkReport(pub Option<usize>);

impl FromStr for SunkReport {
    type Err = InputError;

    /// Accepts `NONE` or a positive decimal integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "NONE" {
            return Ok(SunkReport(None));
        }
        match s.parse::<usize>() {
            Ok(len) if len > 0 => Ok(SunkReport(Some(len))),
            _ => Err(InputError::InvalidSunkLength(s.to_string())),
        }
    }
}

/// Malformed caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The sunk-ship token was neither `NONE` nor a positive integer.
    InvalidSunkLength(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidSunkLength(tok) => write!(
                f,
                "invalid sunk ship length {:?}: expected a positive integer or NONE",
                tok
            ),
        }
    }
}

/// Errors returned by the targeting engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No queued targets and no unfired cells remain.
    BoardExhausted,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::BoardExhausted => write!(f, "no cells left to fire upon"),
        }
    }
}

/// A belief state that breaks one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A recorded cell lies outside the board.
    CellOutOfBounds(Cell),
    /// A cell is listed as both a hit and a miss, or twice in one list.
    DuplicateShot(Cell),
    /// A fired cell is still listed as possible.
    FiredCellStillPossible(Cell),
    /// A sunk length is not in the inventory or appears too often.
    InvalidSunkShips,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::CellOutOfBounds(c) => write!(f, "cell ({}, {}) is off the board", c.x, c.y),
            StateError::DuplicateShot(c) => {
                write!(f, "cell ({}, {}) is recorded more than once", c.x, c.y)
            }
            StateError::FiredCellStillPossible(c) => {
                write!(f, "cell ({}, {}) was fired upon but is still possible", c.x, c.y)
            }
            StateError::InvalidSunkShips => write!(f, "sunk ship lengths do not match the inventory"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
#[cfg(feature = "std")]
impl std::error::Error for StateError {}
