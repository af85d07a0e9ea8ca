//! Iterative-deepening negamax search with alpha-beta pruning.
//!
//! The searcher mutates the real board through scoped apply/undo guards, so
//! every recursion path, cutoffs included, restores the position it probed.
//! Optional refinements, each behind a config toggle: null-move pruning,
//! principal-variation re-search, and a capture-only quiescence extension at
//! the leaves.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Side;
use crate::moves::move_description::Move;
use crate::rules::legality::{generate_all_legal_moves, generate_good_captures};
use crate::rules::move_apply::AppliedMove;
use crate::rules::scoring::evaluate;

const MIN_SCORE: i32 = -10_000_000;
const MAX_SCORE: i32 = 10_000_000;

/// Search behavior switches, stored on the game session.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub null_move_pruning: bool,
    pub principal_variation: bool,
    pub quiescence: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 3,
            null_move_pruning: true,
            principal_variation: true,
            quiescence: true,
        }
    }
}

/// One best-move computation. Create fresh per search; `moves_analyzed`
/// accumulates over the whole deepening loop.
pub struct Searcher {
    config: SearchConfig,
    last_move: Option<Move>,
    near_game_end: bool,
    pub moves_analyzed: u64,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Searcher {
            config,
            last_move: None,
            near_game_end: false,
            moves_analyzed: 0,
        }
    }

    /// Iterative-deepening root. Root moves are generated once, ordered by
    /// the generation heuristic, and re-scored at every depth; the final
    /// depth's preference wins. Returns `None` when `side` has no legal
    /// move.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        side: Side,
        last_move: Option<Move>,
    ) -> Option<Move> {
        self.last_move = last_move;
        let last = self.last_move;

        let mut root_moves = generate_all_legal_moves(board, side, last.as_ref());
        if root_moves.is_empty() {
            return None;
        }

        // Null-move pruning is unsound in thin positions, where passing a
        // turn can mask zugzwang. Either side being low on pieces or on
        // options turns it off for this search.
        let enemy_moves = generate_all_legal_moves(board, side.enemy(), last.as_ref());
        self.near_game_end = board.cells_owned_by(side).len() <= 5
            || root_moves.len() <= 5
            || board.cells_owned_by(side.enemy()).len() <= 5
            || enemy_moves.len() <= 5;

        // Seeded with the top-ordered move so a position where every reply
        // loses still yields a move.
        let mut best = Some(root_moves[0]);
        for depth in 1..=i32::from(self.config.max_depth) {
            let mut alpha = MIN_SCORE;
            let beta = MAX_SCORE;
            for mv in root_moves.iter_mut() {
                let score;
                {
                    let mut applied = AppliedMove::apply(board, *mv);
                    score = -self.alpha_beta(applied.board(), side.enemy(), depth - 1, -beta, -alpha);
                }
                self.moves_analyzed += 1;
                mv.score = score;
                if score > alpha {
                    alpha = score;
                    best = Some(*mv);
                }
            }
        }
        best
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        side: Side,
        depth: i32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        let last = self.last_move;

        if self.config.null_move_pruning && depth >= 2 && !self.near_game_end {
            let reduction = if depth > 6 { 3 } else { 2 };
            let score =
                -self.alpha_beta(board, side.enemy(), depth - reduction - 1, -beta, -beta + 1);
            if score >= beta {
                return beta;
            }
        }

        if depth <= 0 {
            return if self.config.quiescence {
                self.quiescence(board, side, alpha, beta)
            } else {
                evaluate(board, side, last.as_ref())
            };
        }

        let mut found_pv = false;
        for mv in generate_all_legal_moves(board, side, last.as_ref()) {
            let score;
            {
                let mut applied = AppliedMove::apply(board, mv);
                if found_pv && self.config.principal_variation {
                    // Narrow-window probe around the PV; re-search at full
                    // width only when the probe lands inside the window.
                    let probe =
                        self.alpha_beta(applied.board(), side.enemy(), depth - 1, -alpha - 1, -alpha);
                    let probe = -probe;
                    score = if probe > alpha && probe < beta {
                        -self.alpha_beta(applied.board(), side.enemy(), depth - 1, -beta, -alpha)
                    } else {
                        probe
                    };
                } else {
                    score = -self.alpha_beta(applied.board(), side.enemy(), depth - 1, -beta, -alpha);
                }
            }
            self.moves_analyzed += 1;
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
                found_pv = true;
            }
        }
        alpha
    }

    /// Capture-only extension at the leaves: stand pat on the static score,
    /// then try captures by pieces heavier than a pawn until the position
    /// quiets down.
    fn quiescence(&mut self, board: &mut Board, side: Side, mut alpha: i32, beta: i32) -> i32 {
        let last = self.last_move;

        let stand_pat = evaluate(board, side, last.as_ref());
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        for mv in generate_good_captures(board, side, last.as_ref()) {
            let score;
            {
                let mut applied = AppliedMove::apply(board, mv);
                score = -self.quiescence(applied.board(), side.enemy(), -beta, -alpha);
            }
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::cell::Coord;
    use crate::game_state::chess_types::{Piece, PieceKind};
    use crate::utils::algebraic::parse_coord;

    fn coord(name: &str) -> Coord {
        parse_coord(name).expect("test coordinate parses")
    }

    fn snapshot(board: &Board) -> Vec<Piece> {
        board.cells().map(|cell| cell.piece).collect()
    }

    fn mate_in_one() -> Board {
        let mut board = Board::new();
        board.set_piece(coord("H8"), Piece::new(PieceKind::King, Side::Black));
        board.set_piece(coord("G7"), Piece::new(PieceKind::Pawn, Side::Black));
        board.set_piece(coord("H7"), Piece::new(PieceKind::Pawn, Side::Black));
        board.set_piece(coord("E1"), Piece::new(PieceKind::Rook, Side::White));
        board.set_piece(coord("A1"), Piece::new(PieceKind::King, Side::White));
        board
    }

    #[test]
    fn finds_the_back_rank_mate() {
        let mut board = mate_in_one();
        let config = SearchConfig {
            max_depth: 2,
            ..SearchConfig::default()
        };
        let mut searcher = Searcher::new(config);
        let best = searcher
            .best_move(&mut board, Side::White, None)
            .expect("white has moves");
        assert_eq!(best.from, coord("E1"));
        assert_eq!(best.to, coord("E8"));
        assert!(searcher.moves_analyzed > 0);
    }

    #[test]
    fn finds_the_mate_with_all_refinements_disabled() {
        let mut board = mate_in_one();
        let config = SearchConfig {
            max_depth: 2,
            null_move_pruning: false,
            principal_variation: false,
            quiescence: false,
        };
        let mut searcher = Searcher::new(config);
        let best = searcher
            .best_move(&mut board, Side::White, None)
            .expect("white has moves");
        assert_eq!(best.to, coord("E8"));
    }

    #[test]
    fn prefers_capturing_a_hanging_queen() {
        let mut board = Board::new();
        board.set_piece(coord("A1"), Piece::new(PieceKind::King, Side::White));
        board.set_piece(coord("D1"), Piece::new(PieceKind::Rook, Side::White));
        board.set_piece(coord("D8"), Piece::new(PieceKind::Queen, Side::Black));
        board.set_piece(coord("H8"), Piece::new(PieceKind::King, Side::Black));
        board.set_piece(coord("H7"), Piece::new(PieceKind::Pawn, Side::Black));
        let mut searcher = Searcher::new(SearchConfig::default());
        let best = searcher
            .best_move(&mut board, Side::White, None)
            .expect("white has moves");
        assert_eq!(best.to, coord("D8"));
    }

    #[test]
    fn search_restores_the_board() {
        let mut board = Board::new_game();
        let before = snapshot(&board);
        let mut searcher = Searcher::new(SearchConfig {
            max_depth: 2,
            ..SearchConfig::default()
        });
        let best = searcher.best_move(&mut board, Side::White, None);
        assert!(best.is_some());
        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn returns_none_when_no_legal_move_exists() {
        let mut board = Board::new();
        board.set_piece(coord("A8"), Piece::new(PieceKind::King, Side::Black));
        board.set_piece(coord("B6"), Piece::new(PieceKind::Queen, Side::White));
        board.set_piece(coord("H1"), Piece::new(PieceKind::King, Side::White));
        let mut searcher = Searcher::new(SearchConfig::default());
        assert!(searcher.best_move(&mut board, Side::Black, None).is_none());
    }
}
