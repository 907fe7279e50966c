pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;

/// Longest ship in the fleet.
pub const MAX_SHIP_LENGTH: usize = 4;

pub const NUM_SHIPS: usize = 10;

/// Fleet composition, largest first. Auto-fill places ships in this order.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// How many times auto-fill starts the fleet over after a ship found no legal
/// placement.
pub const FLEET_RESTARTS: usize = 64;

/// Number of ships of `length` in the standard fleet.
pub fn fleet_quota(length: usize) -> usize {
    FLEET.iter().filter(|&&l| l == length).count()
}
