//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game::Game;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "QuinceChess Random"
    }

    fn choose_move(&mut self, game: &mut Game, _params: &GoParams) -> Result<EngineOutput, String> {
        let side = game.turn();
        let legal_moves = game.all_legal_moves(side);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_opening_move() {
        let mut game = Game::new();
        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&mut game, &GoParams::default())
            .expect("engine produces output");
        let best = out.best_move.expect("opening position has moves");
        let legal = game.legal_moves_from(&best.from.to_string());
        assert!(legal.contains(&best.to));
    }

    #[test]
    fn reports_none_when_stuck() {
        let mut game = Game::new();
        let board = game.board_mut();
        for cell in board.cells().map(|c| c.coord).collect::<Vec<_>>() {
            board.set_piece(cell, crate::game_state::chess_types::Piece::empty());
        }
        use crate::game_state::chess_types::{Piece, PieceKind, Side};
        use crate::utils::algebraic::parse_coord;
        board.set_piece(
            parse_coord("A8").expect("A8 parses"),
            Piece::new(PieceKind::King, Side::Black),
        );
        board.set_piece(
            parse_coord("B6").expect("B6 parses"),
            Piece::new(PieceKind::Queen, Side::White),
        );
        board.set_piece(
            parse_coord("H1").expect("H1 parses"),
            Piece::new(PieceKind::King, Side::White),
        );
        // Black to move with no legal reply.
        game.attempt_move("H1", "H2").expect("white tempo move");
        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&mut game, &GoParams::default())
            .expect("engine produces output");
        assert!(out.best_move.is_none());
    }
}
