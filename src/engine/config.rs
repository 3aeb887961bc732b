use super::ship::ShipDef;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random samples tried per ship before placement is declared exhausted.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// How many times a side's whole setup is restarted after
/// `GameError::PlacementExhausted` before the game gives up.
pub const MAX_SETUP_RETRIES: usize = 3;

