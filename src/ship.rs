//! Ship definitions and footprint geometry.

use core::fmt;

use crate::common::{BoardError, Coord};
use crate::grid::{CellState, Grid};
use crate::mask::Mask;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const BOTH: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// The other orientation, used when a dragged ship is rotated.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Unit step along the orientation.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Index of a ship within its fleet. Cells hold this instead of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

/// Candidate position for a ship of some length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub origin: Coord,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(origin: Coord, orientation: Orientation) -> Self {
        Self {
            origin,
            orientation,
        }
    }
}

/// Cells covered by a ship of `length` at `origin`. Coordinates are not
/// bounds-checked.
pub fn footprint(
    origin: Coord,
    length: usize,
    orientation: Orientation,
) -> impl Iterator<Item = Coord> {
    let (dx, dy) = orientation.step();
    (0..length).map(move |i| Coord::new(origin.x + i * dx, origin.y + i * dy))
}

/// Footprint as a mask; `OutOfBounds` if any cell leaves the grid.
pub fn footprint_mask(
    origin: Coord,
    length: usize,
    orientation: Orientation,
) -> Result<Mask, BoardError> {
    Mask::from_coords(footprint(origin, length, orientation))
}

/// A ship placed on a grid.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: ShipId,
    origin: Coord,
    length: usize,
    orientation: Orientation,
}

impl Ship {
    pub(crate) fn new(id: ShipId, origin: Coord, length: usize, orientation: Orientation) -> Self {
        Ship {
            id,
            origin,
            length,
            orientation,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub(crate) fn move_to(&mut self, placement: Placement) {
        self.origin = placement.origin;
        self.orientation = placement.orientation;
    }

    /// Occupied cells, origin first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        footprint(self.origin, self.length, self.orientation)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// All segments struck.
    pub fn is_destroyed(&self, grid: &Grid) -> bool {
        self.cells().all(|c| {
            matches!(
                grid.state_at(c),
                Ok(CellState::ShipHit) | Ok(CellState::ShipDestroyed)
            )
        })
    }

    /// No segment struck and not lifted.
    pub fn is_intact(&self, grid: &Grid) -> bool {
        self.cells()
            .all(|c| grid.state_at(c) == Ok(CellState::ShipIntact))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, origin: ({}, {}), length: {}, orientation: {:?} }}",
            self.id.0, self.origin.x, self.origin.y, self.length, self.orientation,
        )
    }
}
