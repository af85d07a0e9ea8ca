//! King pseudo-legal generation, including castling.
//!
//! Castling is generated here as a two-square king move; the rook leg is
//! applied later by move execution. Generation needs a mutable board because
//! the king's one-step transit square is validated by simulating the step
//! and probing for check.

use crate::game_state::board::{Board, Neighbor};
use crate::game_state::cell::{Cell, Coord};
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_description::Move;
use crate::rules::legality::causes_check;

const STEPS: [Neighbor; 8] = [
    Board::north,
    Board::south,
    Board::east,
    Board::west,
    Board::north_east,
    Board::north_west,
    Board::south_east,
    Board::south_west,
];

pub fn collect_king_moves(
    board: &mut Board,
    source: &Cell,
    last_move: Option<&Move>,
    moves: &mut Vec<Coord>,
) {
    for dir in STEPS {
        if let Some(cell) = dir(board, source) {
            if !cell.is_owned_by(source) {
                moves.push(cell.coord);
            }
        }
    }

    // A king that has ever moved keeps castle generation off, which also
    // terminates the nested check-simulation recursion below: the simulated
    // one-step move bumps the king's move count.
    if source.piece.move_count == 0 {
        if let Some(target) = castle_destination(board, source, last_move, Board::east, 0) {
            moves.push(target);
        }
        if let Some(target) = castle_destination(board, source, last_move, Board::west, 1) {
            moves.push(target);
        }
    }
}

/// Walks `dir` from the king: the first cell must be empty and safe to step
/// through, the second (the castle destination) empty, then `extra_gap` more
/// empty cells, and finally an unmoved friendly rook.
fn castle_destination(
    board: &mut Board,
    source: &Cell,
    last_move: Option<&Move>,
    dir: Neighbor,
    extra_gap: usize,
) -> Option<Coord> {
    let transit = {
        let cell = dir(board, source)?;
        if !cell.is_empty() {
            return None;
        }
        cell.coord
    };
    if causes_check(board, source.coord, transit, last_move) {
        return None;
    }

    let transit_cell = board.cell(transit)?.clone();
    let target = {
        let cell = dir(board, &transit_cell)?;
        if !cell.is_empty() {
            return None;
        }
        cell.coord
    };

    let mut walk = board.cell(target)?.clone();
    for _ in 0..extra_gap {
        let next = dir(board, &walk)?.clone();
        if !next.is_empty() {
            return None;
        }
        walk = next;
    }

    let corner = dir(board, &walk)?;
    if corner.piece.kind == PieceKind::Rook
        && corner.piece.move_count == 0
        && corner.is_owned_by(source)
    {
        Some(target)
    } else {
        None
    }
}
