//! Grid of cells with bounds-checked access and adjacency queries.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord};
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::mask::Mask;
use crate::ship::ShipId;

const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
const RING: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Resolution state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    /// Attacked open water.
    Miss,
    /// Open water ruled out by a neighbouring hit or destruction.
    Deflected,
    ShipIntact,
    ShipHit,
    ShipDestroyed,
    /// Footprint of a ship lifted for relocation.
    Marked,
}

impl CellState {
    /// Single-character sign used in text dumps.
    pub fn sign(self) -> char {
        match self {
            CellState::Empty => '_',
            CellState::Miss => '.',
            CellState::Deflected => ',',
            CellState::ShipIntact => 'S',
            CellState::ShipHit => 'X',
            CellState::ShipDestroyed => 'D',
            CellState::Marked => 'H',
        }
    }

    /// Cells a new ship may occupy or border.
    pub fn is_free(self) -> bool {
        matches!(self, CellState::Empty | CellState::Marked)
    }

    /// Cells that have already been attacked or ruled out.
    pub fn is_resolved(self) -> bool {
        matches!(
            self,
            CellState::Miss | CellState::Deflected | CellState::ShipHit | CellState::ShipDestroyed
        )
    }
}

/// Whose eyes a board is seen through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// The fleet's owner, arranging ships before combat.
    Owner,
    /// The attacker, picking a target.
    Opponent,
}

/// One grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub state: CellState,
    pub ship: Option<ShipId>,
}

impl Cell {
    /// Legal-target predicate: owners may only pick up intact ship cells,
    /// opponents may only attack cells that are not yet resolved.
    pub fn is_targetable(&self, perspective: Perspective) -> bool {
        match perspective {
            Perspective::Owner => self.state == CellState::ShipIntact,
            Perspective::Opponent => {
                matches!(self.state, CellState::Empty | CellState::ShipIntact)
            }
        }
    }
}

/// Fixed-size array of cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Grid {
    /// A grid of `Empty` cells.
    pub fn new() -> Self {
        let cells = core::array::from_fn(|y| {
            core::array::from_fn(|x| Cell {
                coord: Coord::new(x, y),
                state: CellState::Empty,
                ship: None,
            })
        });
        Grid { cells }
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < BOARD_WIDTH && coord.y < BOARD_HEIGHT
    }

    /// Bounds-checked cell lookup.
    pub fn cell_at(&self, coord: Coord) -> Result<&Cell, BoardError> {
        if !self.contains(coord) {
            return Err(BoardError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        Ok(&self.cells[coord.y][coord.x])
    }

    pub(crate) fn cell_at_mut(&mut self, coord: Coord) -> Result<&mut Cell, BoardError> {
        if !self.contains(coord) {
            return Err(BoardError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        Ok(&mut self.cells[coord.y][coord.x])
    }

    /// Shorthand for the state at `coord`.
    pub fn state_at(&self, coord: Coord) -> Result<CellState, BoardError> {
        self.cell_at(coord).map(|c| c.state)
    }

    pub(crate) fn set_state(&mut self, coord: Coord, state: CellState) -> Result<(), BoardError> {
        self.cell_at_mut(coord)?.state = state;
        Ok(())
    }

    fn around(&self, coord: Coord, deltas: &[(isize, isize)]) -> Vec<Cell> {
        deltas
            .iter()
            .filter_map(|&(dx, dy)| coord.offset(dx, dy))
            .filter_map(|c| self.cell_at(c).ok().copied())
            .collect()
    }

    /// The 3×3 neighbourhood minus the centre, in-bounds cells only.
    pub fn neighbors8(&self, coord: Coord) -> Vec<Cell> {
        self.around(coord, &RING)
    }

    pub fn neighbors_diag4(&self, coord: Coord) -> Vec<Cell> {
        self.around(coord, &DIAGONAL)
    }

    pub fn neighbors_orth4(&self, coord: Coord) -> Vec<Cell> {
        self.around(coord, &ORTHOGONAL)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter())
    }

    /// Mask of every cell whose state satisfies `pred`.
    pub fn mask_where<F>(&self, pred: F) -> Mask
    where
        F: Fn(CellState) -> bool,
    {
        let mut mask = Mask::new();
        for cell in self.cells().filter(|c| pred(c.state)) {
            // cells() only yields in-bounds coordinates
            let _ = mask.set(cell.coord);
        }
        mask
    }

    /// Cells no new ship may occupy: every non-free cell grown by one in all
    /// directions.
    pub fn blocked_mask(&self) -> Mask {
        self.mask_where(|s| !s.is_free()).dilate()
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells().filter(|c| c.state == state).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.state.sign())?;
            }
            if y + 1 < BOARD_HEIGHT {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "\n}}")
    }
}
