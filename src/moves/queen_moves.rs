//! Queen pseudo-legal generation: the union of rook and bishop slides.

use crate::game_state::board::Board;
use crate::game_state::cell::{Cell, Coord};
use crate::moves::bishop_moves::collect_bishop_moves;
use crate::moves::rook_moves::collect_rook_moves;

pub fn collect_queen_moves(board: &Board, source: &Cell, moves: &mut Vec<Coord>) {
    collect_rook_moves(board, source, moves);
    collect_bishop_moves(board, source, moves);
}
