use battleship_bot::{BeliefState, Cell, StateFormat, StateStore, StoreError};
use std::fs;

fn sample_state() -> BeliefState {
    let mut state = BeliefState::new();
    for cell in [Cell::new(4, 4), Cell::new(4, 5), Cell::new(0, 9)] {
        state.possible_moves.remove(cell);
    }
    state.hits = vec![Cell::new(4, 5), Cell::new(4, 4)];
    state.misses = vec![Cell::new(0, 9)];
    state.targets.extend([Cell::new(3, 5), Cell::new(5, 5), Cell::new(3, 4)]);
    state.sunk_ships = vec![3, 2];
    state.last_move = Some(Cell::new(0, 9));
    state
}

#[test]
fn missing_file_starts_and_persists_a_new_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let store = StateStore::new(&path);

    let state = store.load();
    assert_eq!(state, BeliefState::new());
    assert!(path.exists());
    assert_eq!(store.try_load().unwrap(), BeliefState::new());
}

#[test]
fn json_round_trip_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    assert_eq!(store.format(), StateFormat::Json);

    let state = sample_state();
    store.save(&state).unwrap();
    let loaded = store.load();
    assert_eq!(loaded, state);
    assert_eq!(loaded.hits, vec![Cell::new(4, 5), Cell::new(4, 4)]);
}

#[test]
fn bincode_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.bin"));
    assert_eq!(store.format(), StateFormat::Bincode);

    let state = sample_state();
    store.save(&state).unwrap();
    assert_eq!(store.try_load().unwrap(), state);
}

#[test]
fn json_layout_uses_the_record_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    StateStore::new(&path).save(&sample_state()).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(value["hits"], serde_json::json!([[4, 5], [4, 4]]));
    assert_eq!(value["targets"], serde_json::json!([[3, 5], [5, 5], [3, 4]]));
    assert_eq!(value["sunk_ships"], serde_json::json!([3, 2]));
    assert_eq!(value["last_move"], serde_json::json!([0, 9]));
    assert_eq!(value["possible_moves"].as_array().unwrap().len(), 97);
}

#[test]
fn corrupt_file_is_replaced_by_a_new_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, b"{ not json").unwrap();
    let store = StateStore::new(&path);

    assert!(matches!(store.try_load(), Err(StoreError::Json(_))));
    assert_eq!(store.load(), BeliefState::new());
    assert_eq!(store.try_load().unwrap(), BeliefState::new());
}

#[test]
fn inconsistent_state_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let store = StateStore::new(&path);

    // A hit that is still listed as possible.
    let mut state = BeliefState::new();
    state.hits.push(Cell::new(1, 1));
    store.save(&state).unwrap();
    assert!(matches!(store.try_load(), Err(StoreError::Invalid(_))));
    assert_eq!(store.load(), BeliefState::new());

    // Off-board targets and unknown ship lengths fail validation.
    fs::write(
        &path,
        br#"{"hits":[],"misses":[],"targets":[[10,0]],"sunk_ships":[],"possible_moves":[],"last_move":null}"#,
    )
    .unwrap();
    assert!(matches!(store.try_load(), Err(StoreError::Invalid(_))));

    fs::write(
        &path,
        br#"{"hits":[],"misses":[],"targets":[],"sunk_ships":[7],"possible_moves":[],"last_move":null}"#,
    )
    .unwrap();
    assert!(matches!(store.try_load(), Err(StoreError::Invalid(_))));
}

#[test]
fn unreadable_path_still_yields_a_state() {
    let dir = tempfile::tempdir().unwrap();
    // The path is a directory, so both reading and saving fail.
    let store = StateStore::new(dir.path());
    assert_eq!(store.load(), BeliefState::new());
    assert!(store.save(&BeliefState::new()).is_err());
}
