//! Engine abstraction layer used by the terminal driver.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::game::Game;
use crate::moves::move_description::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Overrides the session's configured search depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for the session's side to move. The game is mutated
    /// only as search scratch-space; committing the move stays with the
    /// caller.
    fn choose_move(&mut self, game: &mut Game, params: &GoParams) -> Result<EngineOutput, String>;
}
