//! Fleet placement: legality checks, enumeration, random auto-fill and
//! relocation of already placed ships.

use alloc::vec::Vec;
use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord};
use crate::config::{FLEET_RESTARTS, MAX_SHIP_LENGTH};
use crate::grid::{CellState, Grid};
use crate::mask::Mask;
use crate::ship::{footprint_mask, Orientation, Placement, Ship, ShipId};

fn valid_length(length: usize) -> bool {
    (1..=MAX_SHIP_LENGTH).contains(&length)
}

/// Footprint must stay inside the grid and avoid the blocked zone.
fn fits(grid: &Grid, blocked: &Mask, origin: Coord, length: usize, orientation: Orientation) -> bool {
    if !valid_length(length) || !grid.contains(origin) {
        return false;
    }
    match footprint_mask(origin, length, orientation) {
        Ok(mask) => !mask.intersects(blocked),
        Err(_) => false,
    }
}

/// Whether a ship of `length` may be placed at `origin`.
///
/// Every occupied cell must be inside the grid, and neither it nor any of its
/// eight neighbours may hold anything but open water (or the footprint of a
/// lifted ship).
pub fn can_place(grid: &Grid, origin: Coord, length: usize, orientation: Orientation) -> bool {
    fits(grid, &grid.blocked_mask(), origin, length, orientation)
}

/// Every legal placement for a ship of `length`, horizontal ones first.
pub fn enumerate_legal_placements(grid: &Grid, length: usize) -> Vec<Placement> {
    let mut placements = Vec::new();
    if !valid_length(length) {
        return placements;
    }
    let blocked = grid.blocked_mask();
    for orientation in Orientation::BOTH {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let origin = Coord::new(x, y);
                if fits(grid, &blocked, origin, length, orientation) {
                    placements.push(Placement::new(origin, orientation));
                }
            }
        }
    }
    placements
}

/// Place a new ship. Nothing is mutated unless the placement is legal and the
/// fleet still has room for a ship of this length.
///
/// Rejected with `RelocationInProgress` while a ship is lifted.
pub fn place_ship(
    board: &mut Board,
    origin: Coord,
    length: usize,
    orientation: Orientation,
) -> Result<ShipId, BoardError> {
    if board.grid().count(CellState::Marked) > 0 {
        return Err(BoardError::RelocationInProgress);
    }
    if !valid_length(length) {
        return Err(BoardError::InvalidLength(length));
    }
    if !board.fleet().has_room_for(length) {
        return Err(BoardError::FleetLengthExhausted(length));
    }
    if !can_place(board.grid(), origin, length, orientation) {
        return Err(BoardError::IllegalPlacement);
    }
    let (grid, fleet) = board.parts_mut();
    let id = fleet.next_id();
    let ship = Ship::new(id, origin, length, orientation);
    for coord in ship.cells() {
        let cell = grid.cell_at_mut(coord)?;
        cell.state = CellState::ShipIntact;
        cell.ship = Some(id);
    }
    fleet.push(ship);
    Ok(id)
}

/// Place every ship still missing from the fleet, largest first, each at a
/// uniformly random legal placement.
///
/// When some ship has nowhere to go the board is reset to its state at call
/// time and the fleet is tried again, up to `FLEET_RESTARTS` times. On final
/// failure the board is left as it was and `UnableToPlaceFleet` is returned.
pub fn add_random_ships<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    if board.grid().count(CellState::Marked) > 0 {
        return Err(BoardError::RelocationInProgress);
    }
    let baseline = board.clone();
    for attempt in 0..=FLEET_RESTARTS {
        if attempt > 0 {
            debug!("auto-fill restart {} of {}", attempt, FLEET_RESTARTS);
            *board = baseline.clone();
        }
        if fill_missing(board, rng)? {
            return Ok(());
        }
    }
    *board = baseline;
    Err(BoardError::UnableToPlaceFleet)
}

/// `Ok(false)` when a ship found no legal placement.
fn fill_missing<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<bool, BoardError> {
    for length in board.fleet().missing_lengths() {
        let options = enumerate_legal_placements(board.grid(), length);
        let Some(choice) = options.choose(rng) else {
            debug!(
                "no legal placement left for length {}, {} cells blocked",
                length,
                board.grid().blocked_mask().count_ones()
            );
            return Ok(false);
        };
        place_ship(board, choice.origin, length, choice.orientation)?;
    }
    Ok(true)
}

/// `true` when every cell of the ship is `Marked`.
pub fn is_lifted(board: &Board, id: ShipId) -> Result<bool, BoardError> {
    let ship = board.fleet().ship(id)?;
    Ok(ship
        .cells()
        .all(|c| board.grid().state_at(c) == Ok(CellState::Marked)))
}

/// Pick up an intact ship for relocation. Its cells turn `Marked`, which the
/// validator treats as free, so the ship may be dropped over its old spot.
pub fn lift_ship(board: &mut Board, id: ShipId) -> Result<(), BoardError> {
    let ship = *board.fleet().ship(id)?;
    if board.grid().count(CellState::Marked) > 0 {
        return Err(BoardError::RelocationInProgress);
    }
    if !ship.is_intact(board.grid()) {
        return Err(BoardError::ShipNotIntact);
    }
    let (grid, _) = board.parts_mut();
    for coord in ship.cells() {
        grid.set_state(coord, CellState::Marked)?;
    }
    Ok(())
}

/// Legal drop targets for a lifted ship.
pub fn relocation_preview(board: &Board, id: ShipId) -> Result<Vec<Placement>, BoardError> {
    if !is_lifted(board, id)? {
        return Err(BoardError::ShipNotLifted);
    }
    let length = board.fleet().ship(id)?.length();
    Ok(enumerate_legal_placements(board.grid(), length))
}

/// Put a lifted ship down at a new position. An illegal drop puts the ship
/// back where it was and reports `IllegalPlacement`.
pub fn drop_ship(
    board: &mut Board,
    id: ShipId,
    origin: Coord,
    orientation: Orientation,
) -> Result<(), BoardError> {
    if !is_lifted(board, id)? {
        return Err(BoardError::ShipNotLifted);
    }
    let ship = *board.fleet().ship(id)?;
    let (grid, fleet) = board.parts_mut();
    if !can_place(grid, origin, ship.length(), orientation) {
        for coord in ship.cells() {
            grid.set_state(coord, CellState::ShipIntact)?;
        }
        return Err(BoardError::IllegalPlacement);
    }
    for coord in ship.cells() {
        let cell = grid.cell_at_mut(coord)?;
        cell.state = CellState::Empty;
        cell.ship = None;
    }
    let moved = fleet.ship_mut(id)?;
    moved.move_to(Placement::new(origin, orientation));
    for coord in moved.cells() {
        let cell = grid.cell_at_mut(coord)?;
        cell.state = CellState::ShipIntact;
        cell.ship = Some(id);
    }
    debug!("ship {} moved to {} {:?}", id.0, origin, orientation);
    Ok(())
}

/// Lift and drop in one step.
pub fn relocate_ship(
    board: &mut Board,
    id: ShipId,
    origin: Coord,
    orientation: Orientation,
) -> Result<(), BoardError> {
    lift_ship(board, id)?;
    drop_ship(board, id, origin, orientation)
}
