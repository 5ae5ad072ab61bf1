//! Hunt/target decision logic.
//!
//! [`update`] folds the result of the previous shot into a belief state
//! and [`next_move`] chooses the next shot. Both are pure: they take the
//! old state by reference and hand back a new one, leaving persistence to
//! [`TargetingEngine`].

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    ai,
    belief::BeliefState,
    common::{Cell, EngineError, Feedback},
    config::ships_with_length,
};

/// Record the outcome of `state.last_move` and any sunk ship.
///
/// On a hit the four orthogonal neighbors of the shot are queued, unless
/// they are off the board, already hit, missed, queued, or no longer
/// possible. The last check is stricter than the plain hit/miss/target
/// test and skips neighbors that were fired at with `NONE` feedback.
///
/// A sunk report is applied after the hit and always empties the queue.
/// A length that matches no ship still afloat is logged and left out of
/// `sunk_ships`.
pub fn update(state: &BeliefState, feedback: Feedback, sunk_ship_length: Option<usize>) -> BeliefState {
    let mut next = state.clone();

    if let Some(shot) = state.last_move {
        let hits = state.hit_set();
        let misses = state.miss_set();
        let recorded = hits.contains(shot) || misses.contains(shot);
        match feedback {
            Feedback::Hit if recorded => {
                warn!("shot {} already recorded, ignoring HIT", shot);
            }
            Feedback::Hit => {
                next.hits.push(shot);
                let mut queued = state.target_set();
                for cell in shot.neighbors() {
                    if hits.contains(cell)
                        || misses.contains(cell)
                        || queued.contains(cell)
                        || !state.possible_moves.contains(cell)
                    {
                        continue;
                    }
                    let _ = queued.insert(cell);
                    next.targets.push_back(cell);
                }
                debug!("hit at {}, {} targets queued", shot, next.targets.len());
            }
            Feedback::Miss if recorded => {
                warn!("shot {} already recorded, ignoring MISS", shot);
            }
            Feedback::Miss => {
                next.misses.push(shot);
            }
            Feedback::None => {}
        }
    }

    if let Some(len) = sunk_ship_length {
        let afloat = ships_with_length(len)
            .saturating_sub(state.sunk_ships.iter().filter(|&&l| l == len).count());
        if afloat == 0 {
            warn!("no ship of length {} left afloat, sunk report not recorded", len);
        } else {
            next.sunk_ships.push(len);
            info!("ship of length {} sunk", len);
        }
        next.targets.clear();
        debug!("target queue cleared");
    }

    next
}

/// Choose the next shot.
///
/// Queued targets are drained front first. With an empty queue the density
/// scan runs and one of the highest-scoring possible cells is drawn from
/// `rng`. The chosen cell leaves `possible_moves` and becomes `last_move`.
pub fn next_move<R: Rng + ?Sized>(
    state: &BeliefState,
    rng: &mut R,
) -> Result<(BeliefState, Cell), EngineError> {
    let mut next = state.clone();

    let shot = match next.targets.pop_front() {
        Some(cell) => {
            debug!("firing at queued target {}", cell);
            cell
        }
        None => {
            let grid = ai::calc_density(&state.possible_moves, &state.remaining_lengths());
            let cell = ai::pick_best(&grid, &state.possible_moves, rng)
                .ok_or(EngineError::BoardExhausted)?;
            debug!("density scan picked {} with score {}", cell, grid.score(cell));
            cell
        }
    };

    // Stale queue entries may already be gone.
    next.possible_moves.remove(shot);
    next.last_move = Some(shot);
    Ok((next, shot))
}

#[cfg(feature = "std")]
pub use self::persistent::TargetingEngine;

#[cfg(feature = "std")]
mod persistent {
    use anyhow::Context;
    use log::info;
    use rand::Rng;

    use super::{next_move, update};
    use crate::{
        ai::{self, DensityGrid},
        common::{Cell, Feedback},
        store::StateStore,
    };

    /// Runs one load, decide, save cycle against a [`StateStore`].
    pub struct TargetingEngine<R> {
        store: StateStore,
        rng: R,
    }

    impl<R: Rng> TargetingEngine<R> {
        pub fn new(store: StateStore, rng: R) -> Self {
            Self { store, rng }
        }

        /// Density grid for the stored state as it stands now.
        pub fn density(&self) -> DensityGrid {
            let state = self.store.load();
            ai::calc_density(&state.possible_moves, &state.remaining_lengths())
        }

        /// Apply `feedback`, pick the next shot, persist, and return it.
        pub fn play(&mut self, feedback: Feedback, sunk_ship_length: Option<usize>) -> anyhow::Result<Cell> {
            let state = self.store.load();
            let state = update(&state, feedback, sunk_ship_length);
            if state.all_sunk() {
                info!("every ship has been reported sunk");
            }
            let (state, shot) = next_move(&state, &mut self.rng).context("failed to choose a move")?;
            self.store
                .save(&state)
                .with_context(|| format!("failed to save state to {}", self.store.path().display()))?;
            Ok(shot)
        }
    }
}
