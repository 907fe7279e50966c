//! Board state: one grid and the fleet placed on it.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord};
use crate::config::{fleet_quota, FLEET};
use crate::grid::Grid;
use crate::ship::{Ship, ShipId};

/// Ships placed on a board, indexed by `ShipId`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Fleet { ships: Vec::new() }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn ship(&self, id: ShipId) -> Result<&Ship, BoardError> {
        self.ships.get(id.0).ok_or(BoardError::InvalidShipId(id.0))
    }

    pub(crate) fn ship_mut(&mut self, id: ShipId) -> Result<&mut Ship, BoardError> {
        self.ships
            .get_mut(id.0)
            .ok_or(BoardError::InvalidShipId(id.0))
    }

    /// Number of placed ships of `length`.
    pub fn count_of(&self, length: usize) -> usize {
        self.ships.iter().filter(|s| s.length() == length).count()
    }

    /// `true` while the standard fleet still lacks a ship of `length`.
    pub fn has_room_for(&self, length: usize) -> bool {
        self.count_of(length) < fleet_quota(length)
    }

    /// Lengths not yet placed, largest first.
    pub fn missing_lengths(&self) -> Vec<usize> {
        let mut placed: Vec<usize> = self.ships.iter().map(|s| s.length()).collect();
        let mut missing = Vec::new();
        for &len in FLEET.iter() {
            match placed.iter().position(|&l| l == len) {
                Some(i) => {
                    placed.swap_remove(i);
                }
                None => missing.push(len),
            }
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.ships.len() == FLEET.len() && self.missing_lengths().is_empty()
    }

    /// Ships on `grid` that are not yet destroyed.
    pub fn surviving(&self, grid: &Grid) -> usize {
        self.ships.iter().filter(|s| !s.is_destroyed(grid)).count()
    }

    pub(crate) fn push(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    pub(crate) fn next_id(&self) -> ShipId {
        ShipId(self.ships.len())
    }
}

/// A grid together with the fleet placed on it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    fleet: Fleet,
}

impl Board {
    /// Empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            grid: Grid::new(),
            fleet: Fleet::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Grid, &mut Fleet) {
        (&mut self.grid, &mut self.fleet)
    }

    /// Ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Result<Option<&Ship>, BoardError> {
        match self.grid.cell_at(coord)?.ship {
            Some(id) => self.fleet.ship(id).map(Some),
            None => Ok(None),
        }
    }

    /// Returns `true` once every placed ship is destroyed.
    pub fn all_destroyed(&self) -> bool {
        !self.fleet.is_empty() && self.fleet.surviving(&self.grid) == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  grid:\n{}\n  ships: {:?}\n}}",
            self.grid,
            self.fleet.ships()
        )
    }
}
