//! Knight pseudo-legal generation.
//!
//! The eight targets are reached by composing one orthogonal step with the
//! diagonal step that continues it, so edge clipping falls out of the
//! directional accessors.

use crate::game_state::board::{Board, Neighbor};
use crate::game_state::cell::{Cell, Coord};

const JUMPS: [(Neighbor, Neighbor); 8] = [
    (Board::north, Board::north_west),
    (Board::north, Board::north_east),
    (Board::south, Board::south_west),
    (Board::south, Board::south_east),
    (Board::west, Board::north_west),
    (Board::west, Board::south_west),
    (Board::east, Board::north_east),
    (Board::east, Board::south_east),
];

pub fn collect_knight_moves(board: &Board, source: &Cell, moves: &mut Vec<Coord>) {
    for (first, second) in JUMPS {
        if let Some(mid) = first(board, source) {
            if let Some(target) = second(board, mid) {
                if !target.is_owned_by(source) {
                    moves.push(target.coord);
                }
            }
        }
    }
}
