//! Commonly used types and functions for ease of import.

pub use crate::{
    add_random_ships, can_place, enumerate_legal_placements, next_move, place_ship, resolve,
    AiPlayer, AttackOutcome, Board, BoardError, Coord, CellState, Grid, HeuristicView,
    Orientation, Perspective, Player, ShipId,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
