use battleship_bot::{BitBoardError, Cell, CellSet};

#[test]
fn test_insert_contains_remove() {
    let mut set = CellSet::new();
    assert!(set.is_empty());

    assert!(set.insert(Cell::new(3, 7)).unwrap());
    assert!(!set.insert(Cell::new(3, 7)).unwrap());
    assert!(set.contains(Cell::new(3, 7)));
    assert!(!set.contains(Cell::new(7, 3)));

    assert!(set.remove(Cell::new(3, 7)));
    assert!(!set.remove(Cell::new(3, 7)));
    assert!(set.is_empty());
}

#[test]
fn test_out_of_range_cells() {
    let mut set = CellSet::full();
    assert!(!set.contains(Cell::new(10, 0)));
    assert!(!set.remove(Cell::new(0, 10)));
    assert_eq!(
        set.insert(Cell::new(12, 1)),
        Err(BitBoardError::IndexOutOfBounds { row: 12, col: 1 })
    );
    assert_eq!(set.count_ones(), 100);
}

#[test]
fn test_full_and_complement() {
    let full = CellSet::full();
    assert_eq!(full.count_ones(), 100);
    assert!((!full).is_empty());

    let one = CellSet::from_cells([Cell::new(9, 9)]).unwrap();
    assert_eq!((!one).count_ones(), 99);
    assert_eq!(one & full, one);
    assert_eq!(one | !one, full);
}

#[test]
fn test_cells_iterate_row_major() {
    let set = CellSet::from_cells([Cell::new(5, 0), Cell::new(0, 9), Cell::new(5, 2)]).unwrap();
    let cells: Vec<_> = set.cells().collect();
    assert_eq!(cells, vec![Cell::new(0, 9), Cell::new(5, 0), Cell::new(5, 2)]);
}

#[test]
fn test_serializes_as_cell_list() {
    let set = CellSet::from_cells([Cell::new(1, 2), Cell::new(0, 3)]).unwrap();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[[0,3],[1,2]]");

    let back: CellSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);

    let bad = serde_json::from_str::<CellSet>("[[0,3],[10,2]]");
    assert!(bad.is_err());
}
