//! Rook pseudo-legal generation: slides along the four orthogonals.

use crate::game_state::board::{Board, Neighbor};
use crate::game_state::cell::{Cell, Coord};

const ORTHOGONALS: [Neighbor; 4] = [Board::north, Board::south, Board::east, Board::west];

pub fn collect_rook_moves(board: &Board, source: &Cell, moves: &mut Vec<Coord>) {
    for dir in ORTHOGONALS {
        let mut cursor = dir(board, source);
        while let Some(cell) = cursor {
            if cell.is_empty() {
                moves.push(cell.coord);
                cursor = dir(board, cell);
            } else {
                if cell.is_owned_by_enemy(source) {
                    moves.push(cell.coord);
                }
                break;
            }
        }
    }
}
