//! Common types for the rule engine: coordinates, attack outcomes and board errors.

use core::fmt;

/// A grid position. `x` is the column, `y` the row, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset by a signed delta. `None` when the result would be negative;
    /// the upper bound is checked by the grid.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Coord { x, y })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Column letter, 1-based row: (0, 0) is "A1".
        let col = (b'A' + (self.x % 26) as u8) as char;
        write!(f, "{}{}", col, self.y + 1)
    }
}

/// Result of one resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack landed on open water.
    Miss,
    /// Attack hit a ship that is still afloat.
    Hit,
    /// Attack destroyed a ship; other ships remain.
    HitAndDestroyed,
    /// Attack destroyed the last surviving ship of the fleet.
    HitAndWon,
}

impl AttackOutcome {
    /// `true` for every outcome that struck a ship.
    pub fn is_hit(self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Ship footprint leaves the grid or touches another ship.
    IllegalPlacement,
    /// Ship length outside `1..=MAX_SHIP_LENGTH`.
    InvalidLength(usize),
    /// The fleet already holds every ship of this length.
    FleetLengthExhausted(usize),
    /// Target cell was already resolved.
    IllegalAttack { x: usize, y: usize },
    /// A ship cell carries no ship id.
    UnknownShip,
    /// No ship with this id exists in the fleet.
    InvalidShipId(usize),
    /// Drop requested for a ship that was never lifted.
    ShipNotLifted,
    /// Ship has been struck or is already lifted, so it cannot move.
    ShipNotIntact,
    /// Another ship is already lifted for relocation.
    RelocationInProgress,
    /// Auto-fill gave up after exhausting its restarts.
    UnableToPlaceFleet,
    /// Text view could not be parsed.
    InvalidView(&'static str),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", x, y)
            }
            BoardError::IllegalPlacement => write!(f, "Ship placement is not legal"),
            BoardError::InvalidLength(len) => write!(f, "Invalid ship length {}", len),
            BoardError::FleetLengthExhausted(len) => {
                write!(f, "Fleet has no more ships of length {}", len)
            }
            BoardError::IllegalAttack { x, y } => {
                write!(f, "Cell ({}, {}) was already resolved", x, y)
            }
            BoardError::UnknownShip => write!(f, "Ship cell is not linked to any ship"),
            BoardError::InvalidShipId(id) => write!(f, "No ship with id {}", id),
            BoardError::ShipNotLifted => write!(f, "Ship is not lifted for relocation"),
            BoardError::ShipNotIntact => write!(f, "Ship cannot be moved in its current state"),
            BoardError::RelocationInProgress => write!(f, "Another ship is being relocated"),
            BoardError::UnableToPlaceFleet => write!(f, "Unable to place fleet"),
            BoardError::InvalidView(msg) => write!(f, "Invalid view: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
