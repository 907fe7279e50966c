use crate::{
    ai::HeuristicView,
    board::Board,
    common::{AttackOutcome, BoardError, Coord},
};
use rand::rngs::SmallRng;

/// Interface implemented by the sides of a game.
pub trait Player {
    /// Place the whole fleet onto the provided board.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next target given what is known about the opponent's board.
    /// `None` when there is nothing left to attack.
    fn select_target(&mut self, rng: &mut SmallRng, view: &HeuristicView) -> Option<Coord>;

    /// Inform the player of the result of its last attack.
    fn handle_attack_result(&mut self, _coord: Coord, _outcome: AttackOutcome) {}
}
