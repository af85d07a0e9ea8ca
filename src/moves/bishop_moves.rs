//! Bishop pseudo-legal generation: slides along the four diagonals.

use crate::game_state::board::{Board, Neighbor};
use crate::game_state::cell::{Cell, Coord};

const DIAGONALS: [Neighbor; 4] = [
    Board::north_east,
    Board::north_west,
    Board::south_east,
    Board::south_west,
];

pub fn collect_bishop_moves(board: &Board, source: &Cell, moves: &mut Vec<Coord>) {
    for dir in DIAGONALS {
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
