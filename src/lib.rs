#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod belief;
mod bitboard;
mod common;
mod config;
pub mod engine;
#[cfg(feature = "std")]
mod logging;
mod ship;
#[cfg(feature = "std")]
pub mod store;

pub use ai::*;
pub use belief::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use engine::{next_move, update};
#[cfg(feature = "std")]
pub use engine::TargetingEngine;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
#[cfg(feature = "std")]
pub use store::{StateFormat, StateStore, StoreError};
