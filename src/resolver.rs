//! Attack resolution: cell transitions, destruction cascade and halo marking.

use log::{debug, trace};

use crate::board::Board;
use crate::common::{AttackOutcome, BoardError, Coord};
use crate::grid::{Cell, CellState, Grid};

/// Resolve an attack at `coord`.
///
/// Open water becomes `Miss`. An intact ship cell becomes `ShipHit`; if that
/// completes the ship, all of its cells become `ShipDestroyed` and every open
/// neighbour of the wreck is `Deflected`, otherwise only the open diagonal
/// neighbours of the hit are. Already resolved cells are rejected with
/// `IllegalAttack` and the board is left untouched.
pub fn resolve(board: &mut Board, coord: Coord) -> Result<AttackOutcome, BoardError> {
    let cell = *board.grid().cell_at(coord)?;
    let outcome = match cell.state {
        CellState::Empty => {
            let (grid, _) = board.parts_mut();
            grid.set_state(coord, CellState::Miss)?;
            AttackOutcome::Miss
        }
        CellState::ShipIntact => strike(board, cell)?,
        _ => {
            return Err(BoardError::IllegalAttack {
                x: coord.x,
                y: coord.y,
            })
        }
    };
    trace!("attack at {} -> {:?}", coord, outcome);
    Ok(outcome)
}

fn strike(board: &mut Board, cell: Cell) -> Result<AttackOutcome, BoardError> {
    let id = cell.ship.ok_or(BoardError::UnknownShip)?;
    let ship = *board.fleet().ship(id)?;
    let (grid, fleet) = board.parts_mut();
    grid.set_state(cell.coord, CellState::ShipHit)?;

    if !ship.is_destroyed(grid) {
        let diagonals = grid.neighbors_diag4(cell.coord);
        deflect(grid, &diagonals)?;
        return Ok(AttackOutcome::Hit);
    }

    for coord in ship.cells() {
        grid.set_state(coord, CellState::ShipDestroyed)?;
    }
    for coord in ship.cells() {
        let ring = grid.neighbors8(coord);
        deflect(grid, &ring)?;
    }
    let surviving = fleet.surviving(grid);
    debug!(
        "ship {} of length {} destroyed, {} left",
        id.0,
        ship.length(),
        surviving
    );
    if surviving == 0 {
        Ok(AttackOutcome::HitAndWon)
    } else {
        Ok(AttackOutcome::HitAndDestroyed)
    }
}

/// Turn the open cells among `cells` into `Deflected`.
fn deflect(grid: &mut Grid, cells: &[Cell]) -> Result<(), BoardError> {
    for cell in cells.iter().filter(|c| c.state == CellState::Empty) {
        grid.set_state(cell.coord, CellState::Deflected)?;
    }
    Ok(())
}
