use battleship_bot::{
    calc_density, next_move, ships_with_length, update, BeliefState, Cell, Feedback,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// One round of caller input: feedback plus an optional sunk length.
/// Lengths range past the inventory so bad reports are exercised too.
fn round() -> impl Strategy<Value = (u8, Option<usize>)> {
    (0u8..3, proptest::option::weighted(0.15, 1usize..8))
}

fn feedback(code: u8) -> Feedback {
    match code {
        0 => Feedback::Hit,
        1 => Feedback::Miss,
        _ => Feedback::None,
    }
}

/// Drive the engine through `rounds` and hand every intermediate state to
/// `check`.
fn drive(
    seed: u64,
    rounds: &[(u8, Option<usize>)],
    mut check: impl FnMut(&BeliefState, &BeliefState, Cell),
) -> BeliefState {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut state = BeliefState::new();
    for &(code, sunk) in rounds {
        let updated = update(&state, feedback(code), sunk);
        let (next, shot) = next_move(&updated, &mut rng).unwrap();
        check(&updated, &next, shot);
        state = next;
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn possible_moves_shrink_by_at_most_one(
        seed in any::<u64>(),
        rounds in proptest::collection::vec(round(), 1..60),
    ) {
        drive(seed, &rounds, |before, after, shot| {
            let b = before.possible_moves.count_ones();
            let a = after.possible_moves.count_ones();
            assert!(a == b || a + 1 == b);
            assert!(!after.possible_moves.contains(shot));
            for cell in after.possible_moves.cells() {
                assert!(before.possible_moves.contains(cell));
            }
        });
    }

    #[test]
    fn scan_never_repeats_a_shot(
        seed in any::<u64>(),
        rounds in proptest::collection::vec(round(), 1..60),
    ) {
        drive(seed, &rounds, |before, _after, shot| {
            if before.targets.is_empty() {
                assert!(before.possible_moves.contains(shot));
                let grid = calc_density(&before.possible_moves, &before.remaining_lengths());
                assert_eq!(Some(grid.score(shot)), grid.max_over(&before.possible_moves));
            } else {
                assert_eq!(Some(&shot), before.targets.front());
            }
        });
    }

    #[test]
    fn reachable_states_stay_valid_and_round_trip(
        seed in any::<u64>(),
        rounds in proptest::collection::vec(round(), 0..60),
    ) {
        let state = drive(seed, &rounds, |_, after, _| {
            assert!(after.validate().is_ok());
        });

        let json = serde_json::to_vec(&state).unwrap();
        let from_json: BeliefState = serde_json::from_slice(&json).unwrap();
        prop_assert_eq!(&from_json, &state);

        let bytes = bincode::serialize(&state).unwrap();
        let from_bincode: BeliefState = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(&from_bincode, &state);
    }

    #[test]
    fn hit_enqueues_in_bounds_neighbors(x in 0usize..10, y in 0usize..10) {
        let mut state = BeliefState::new();
        state.possible_moves.remove(Cell::new(x, y));
        state.last_move = Some(Cell::new(x, y));
        let state = update(&state, Feedback::Hit, None);

        let expected: Vec<Cell> = [
            (x as isize - 1, y as isize),
            (x as isize + 1, y as isize),
            (x as isize, y as isize - 1),
            (x as isize, y as isize + 1),
        ]
        .into_iter()
        .filter(|&(a, b)| (0..10).contains(&a) && (0..10).contains(&b))
        .map(|(a, b)| Cell::new(a as usize, b as usize))
        .collect();
        let queued: Vec<Cell> = state.targets.iter().copied().collect();
        prop_assert_eq!(queued, expected);
    }

    #[test]
    fn sink_always_empties_the_queue(
        seed in any::<u64>(),
        rounds in proptest::collection::vec(round(), 0..30),
        code in 0u8..3,
        len in 1usize..8,
    ) {
        let state = drive(seed, &rounds, |_, _, _| {});
        let already = state.sunk_ships.iter().filter(|&&l| l == len).count();
        let updated = update(&state, feedback(code), Some(len));
        prop_assert!(updated.targets.is_empty());
        if already < ships_with_length(len) {
            prop_assert_eq!(updated.sunk_ships.last(), Some(&len));
        } else {
            prop_assert_eq!(&updated.sunk_ships, &state.sunk_ships);
        }
        prop_assert!(updated.validate().is_ok());
    }
}
