//! Game-ending predicates: checkmate, stalemate, and the fifty-move draw.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Side};
use crate::moves::move_description::Move;
use crate::rules::legality::{count_legal_moves, is_under_check};

/// `side` is checkmated: in check with no legal move.
pub fn is_checkmate(board: &mut Board, side: Side, last_move: Option<&Move>) -> bool {
    is_under_check(board, side, last_move) && count_legal_moves(board, side, last_move) == 0
}

/// `side` is stalemated: not in check, yet has no legal move.
pub fn is_stalemate(board: &mut Board, side: Side, last_move: Option<&Move>) -> bool {
    !is_under_check(board, side, last_move) && count_legal_moves(board, side, last_move) == 0
}

/// Fifty-move rule over the done history, scanned newest to oldest. The scan
/// ends with "no draw" at the first capture or pawn move; the draw triggers
/// once fifty quiet moves have been counted.
pub fn is_fifty_move_draw(history: &[Move]) -> bool {
    let mut quiet = 0;
    for mv in history.iter().rev() {
        if mv.is_capture() || mv.piece.kind == PieceKind::Pawn {
            return false;
        }
        quiet += 1;
        if quiet >= 50 {
            return true;
        }
    }
    false
}
