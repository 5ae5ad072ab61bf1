use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("carrier", 5),
    ShipType::new("battleship", 4),
    ShipType::new("cruiser", 3),
    ShipType::new("submarine", 3),
    ShipType::new("destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// State file used when no explicit path is given.
pub const DEFAULT_STATE_FILE: &str = "battleship_state.json";

/// Environment variable consulted for the log level.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Number of ships in the inventory with exactly `length` segments.
pub fn ships_with_length(length: usize) -> usize {
    SHIPS.iter().filter(|s| s.length() == length).count()
}
