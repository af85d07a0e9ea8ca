//! Searcher-backed engine: iterative-deepening negamax with the session's
//! configured refinements.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game::Game;
use crate::search::alpha_beta::Searcher;

pub struct NegamaxEngine;

impl NegamaxEngine {
    pub fn new() -> Self {
        NegamaxEngine
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "QuinceChess Negamax"
    }

    fn choose_move(&mut self, game: &mut Game, params: &GoParams) -> Result<EngineOutput, String> {
        let mut config = game.search_config;
        if let Some(depth) = params.depth {
            config.max_depth = depth;
        }

        let side = game.turn();
        let last = game.last_move().copied();
        let mut searcher = Searcher::new(config);
        let best = searcher.best_move(game.board_mut(), side, last);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string negamax depth {} moves_analyzed {}",
            config.max_depth, searcher.moves_analyzed
        ));
        if let Some(mv) = best {
            out.info_lines
                .push(format!("info string negamax best {} score {}", mv, mv.score));
        }
        out.best_move = best;
        Ok(out)
    }
}
