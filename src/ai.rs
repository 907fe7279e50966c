//! Targeting logic for the automated opponent.
//! Works only from what the attacker can see: hits, misses and wrecks.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use log::trace;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{BoardError, Coord};
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, FLEET};
use crate::grid::{CellState, Grid};
use crate::ship::Orientation;

/// Density counts over the board, indexed `[y][x]`.
pub type DensityMatrix = [[u32; BOARD_WIDTH]; BOARD_HEIGHT];

/// What an attacker knows about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewCell {
    Unknown,
    ConfirmedMiss,
    /// Ship segment hit, ship still afloat.
    ConfirmedHit,
    ConfirmedDestroyed,
}

impl ViewCell {
    pub fn sign(self) -> char {
        match self {
            ViewCell::Unknown => '_',
            ViewCell::ConfirmedMiss => '.',
            ViewCell::ConfirmedHit => 'X',
            ViewCell::ConfirmedDestroyed => 'D',
        }
    }

    fn from_sign(c: char) -> Option<Self> {
        match c {
            '_' => Some(ViewCell::Unknown),
            '.' => Some(ViewCell::ConfirmedMiss),
            'X' => Some(ViewCell::ConfirmedHit),
            'D' => Some(ViewCell::ConfirmedDestroyed),
            _ => None,
        }
    }
}

impl From<CellState> for ViewCell {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Empty | CellState::ShipIntact | CellState::Marked => ViewCell::Unknown,
            CellState::Miss | CellState::Deflected => ViewCell::ConfirmedMiss,
            CellState::ShipHit => ViewCell::ConfirmedHit,
            CellState::ShipDestroyed => ViewCell::ConfirmedDestroyed,
        }
    }
}

/// Opponent-visible projection of a grid. Carries no ship identity.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HeuristicView {
    cells: [[ViewCell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl HeuristicView {
    /// A view where nothing is known yet.
    pub fn unknown() -> Self {
        HeuristicView {
            cells: [[ViewCell::Unknown; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// `None` outside the board.
    pub fn get(&self, coord: Coord) -> Option<ViewCell> {
        self.cells.get(coord.y)?.get(coord.x).copied()
    }

    pub fn set(&mut self, coord: Coord, cell: ViewCell) -> Result<(), BoardError> {
        let slot = self
            .cells
            .get_mut(coord.y)
            .and_then(|row| row.get_mut(coord.x))
            .ok_or(BoardError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            })?;
        *slot = cell;
        Ok(())
    }

    fn is(&self, coord: Coord, cell: ViewCell) -> bool {
        self.get(coord) == Some(cell)
    }

    /// Coordinates of every cell equal to `cell`, row-major.
    pub fn positions(&self, cell: ViewCell) -> Vec<Coord> {
        let mut out = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if c == cell {
                    out.push(Coord::new(x, y));
                }
            }
        }
        out
    }
}

impl Default for HeuristicView {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<&Grid> for HeuristicView {
    fn from(grid: &Grid) -> Self {
        let mut view = HeuristicView::unknown();
        for cell in grid.cells() {
            view.cells[cell.coord.y][cell.coord.x] = ViewCell::from(cell.state);
        }
        view
    }
}

impl fmt::Display for HeuristicView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.sign())?;
            }
            if y + 1 < BOARD_HEIGHT {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for HeuristicView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HeuristicView {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "\n}}")
    }
}

/// Parses one row per line using `_ . X D`. Whitespace between signs is
/// ignored and blank lines are skipped.
impl FromStr for HeuristicView {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut view = HeuristicView::unknown();
        let mut rows = 0;
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if rows == BOARD_HEIGHT {
                return Err(BoardError::InvalidView("too many rows"));
            }
            let mut cols = 0;
            for c in line.chars().filter(|c| !c.is_whitespace()) {
                if cols == BOARD_WIDTH {
                    return Err(BoardError::InvalidView("row too long"));
                }
                view.cells[rows][cols] =
                    ViewCell::from_sign(c).ok_or(BoardError::InvalidView("unknown sign"))?;
                cols += 1;
            }
            if cols != BOARD_WIDTH {
                return Err(BoardError::InvalidView("row too short"));
            }
            rows += 1;
        }
        if rows != BOARD_HEIGHT {
            return Err(BoardError::InvalidView("too few rows"));
        }
        Ok(view)
    }
}

/// Search mode the heuristic is in for a given view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Finish off a wounded ship.
    Target,
    /// Look for the largest ship not yet sunk.
    Hunt,
}

/// A sunk ship recovered from the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunkShip {
    pub origin: Coord,
    pub length: usize,
    pub orientation: Orientation,
}

/// Target mode whenever a wounded ship is on the board.
pub fn mode(view: &HeuristicView) -> Mode {
    if view.positions(ViewCell::ConfirmedHit).is_empty() {
        Mode::Hunt
    } else {
        Mode::Target
    }
}

/// Unknown orthogonal neighbours of every wounded cell. A cell next to two
/// hits appears twice, which weights it accordingly.
pub fn target_candidates(view: &HeuristicView) -> Vec<Coord> {
    let mut pool = Vec::new();
    for hit in view.positions(ViewCell::ConfirmedHit) {
        for (dx, dy) in [(-1, 0), (0, -1), (1, 0), (0, 1)] {
            if let Some(n) = hit.offset(dx, dy) {
                if view.is(n, ViewCell::Unknown) {
                    pool.push(n);
                }
            }
        }
    }
    pool
}

/// Maximal runs of destroyed cells. Ships never touch, so each run is one
/// wreck: horizontal runs of two or more, vertical runs of two or more, and
/// lone cells with no destroyed cell above or below.
pub fn sunk_ships(view: &HeuristicView) -> Vec<SunkShip> {
    let wreck = |x: usize, y: usize| view.is(Coord::new(x, y), ViewCell::ConfirmedDestroyed);
    let mut found = Vec::new();

    for y in 0..BOARD_HEIGHT {
        let mut x = 0;
        while x < BOARD_WIDTH {
            if !wreck(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < BOARD_WIDTH && wreck(x, y) {
                x += 1;
            }
            let length = x - start;
            let above = y > 0 && wreck(start, y - 1);
            let below = wreck(start, y + 1);
            if length > 1 || (!above && !below) {
                found.push(SunkShip {
                    origin: Coord::new(start, y),
                    length,
                    orientation: Orientation::Horizontal,
                });
            }
        }
    }

    for x in 0..BOARD_WIDTH {
        let mut y = 0;
        while y < BOARD_HEIGHT {
            if !wreck(x, y) {
                y += 1;
                continue;
            }
            let start = y;
            while y < BOARD_HEIGHT && wreck(x, y) {
                y += 1;
            }
            if y - start > 1 {
                found.push(SunkShip {
                    origin: Coord::new(x, start),
                    length: y - start,
                    orientation: Orientation::Vertical,
                });
            }
        }
    }
    found
}

/// Fleet lengths not accounted for by a wreck, largest first.
pub fn remaining_lengths(view: &HeuristicView) -> Vec<usize> {
    let mut remaining: Vec<usize> = FLEET.to_vec();
    for sunk in sunk_ships(view) {
        if let Some(i) = remaining.iter().position(|&l| l == sunk.length) {
            remaining.remove(i);
        }
    }
    remaining.sort_unstable_by(|a, b| b.cmp(a));
    remaining
}

pub fn largest_remaining_length(view: &HeuristicView) -> Option<usize> {
    remaining_lengths(view).first().copied()
}

/// For every horizontal and vertical window of `length` cells lying fully on
/// unknown water, add one to each cell of the window.
pub fn density_matrix(view: &HeuristicView, length: usize) -> DensityMatrix {
    let mut matrix = [[0u32; BOARD_WIDTH]; BOARD_HEIGHT];
    if length == 0 {
        return matrix;
    }
    for orientation in Orientation::BOTH {
        let (dx, dy) = orientation.step();
        let max_x = BOARD_WIDTH.saturating_sub((length - 1) * dx);
        let max_y = BOARD_HEIGHT.saturating_sub((length - 1) * dy);
        for y in 0..max_y {
            for x in 0..max_x {
                let window = (0..length).map(|k| Coord::new(x + k * dx, y + k * dy));
                if window.clone().all(|c| view.is(c, ViewCell::Unknown)) {
                    for c in window {
                        matrix[c.y][c.x] += 1;
                    }
                }
            }
        }
    }
    matrix
}

/// Cells holding the maximum of the density matrix for the largest remaining
/// ship. Falls back to every unknown cell when no window fits at all.
pub fn hunt_candidates(view: &HeuristicView) -> Vec<Coord> {
    let Some(length) = largest_remaining_length(view) else {
        return Vec::new();
    };
    let matrix = density_matrix(view, length);
    let best = matrix.iter().flatten().copied().max().unwrap_or(0);
    if best == 0 {
        return view.positions(ViewCell::Unknown);
    }
    let mut out = Vec::new();
    for (y, row) in matrix.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v == best {
                out.push(Coord::new(x, y));
            }
        }
    }
    out
}

/// Next coordinate to attack, or `None` once there is nothing left to find.
///
/// Wounded ships are finished first by probing their unknown orthogonal
/// neighbours. Otherwise the move is drawn from the densest cells for the
/// largest ship still afloat. Pure apart from the random draw.
pub fn next_move<R: Rng + ?Sized>(view: &HeuristicView, rng: &mut R) -> Option<Coord> {
    if mode(view) == Mode::Target {
        let pool = target_candidates(view);
        if let Some(&coord) = pool.choose(rng) {
            trace!("target mode: {} candidates, picked {}", pool.len(), coord);
            return Some(coord);
        }
    }
    let pool = hunt_candidates(view);
    let pick = pool.choose(rng).copied();
    trace!("hunt mode: {} candidates, picked {:?}", pool.len(), pick);
    pick
}
