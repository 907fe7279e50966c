//! Rule engine for a two-player grid naval combat game: board state, ship
//! placement with a no-touching buffer, attack resolution and a hunt/target
//! opponent heuristic.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod board;
mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod mask;
mod placement;
mod player;
mod player_ai;
pub mod prelude;
mod resolver;
mod ship;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use mask::{CellMask, Mask};
pub use placement::*;
pub use player::*;
pub use player_ai::*;
pub use resolver::*;
pub use ship::*;
