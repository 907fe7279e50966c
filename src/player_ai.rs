use crate::{
    ai::{self, HeuristicView},
    board::Board,
    common::{BoardError, Coord},
    placement,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Automated opponent: random fleet layout, hunt/target shooting.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        placement::add_random_ships(board, rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng, view: &HeuristicView) -> Option<Coord> {
        ai::next_move(view, rng)
    }
}
