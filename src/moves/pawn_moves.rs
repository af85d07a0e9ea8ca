//! Pawn pseudo-legal generation.
//!
//! Single push, double push on the pawn's first move, diagonal captures, and
//! the en-passant capture. The en-passant window is read from the previous
//! move: it must have been a pawn move whose live destination piece has a
//! move count of exactly one, landing on the mover's row one column away.

use crate::game_state::board::{Board, Neighbor};
use crate::game_state::cell::{Cell, Coord};
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_description::Move;

pub fn collect_pawn_moves(
    board: &Board,
    source: &Cell,
    last_move: Option<&Move>,
    moves: &mut Vec<Coord>,
) {
    let (forward, diag_west, diag_east): (Neighbor, Neighbor, Neighbor) =
        if source.piece.side.is_white() {
            (Board::north, Board::north_west, Board::north_east)
        } else {
            (Board::south, Board::south_west, Board::south_east)
        };

    if let Some(one) = forward(board, source) {
        if one.is_empty() {
            moves.push(one.coord);
            if source.piece.move_count == 0 {
                if let Some(two) = forward(board, one) {
                    if two.is_empty() {
                        moves.push(two.coord);
                    }
                }
            }
        }
    }

    for diag in [diag_west, diag_east] {
        if let Some(cell) = diag(board, source) {
            if cell.is_owned_by_enemy(source) {
                moves.push(cell.coord);
            }
        }
    }

    if let Some(last) = last_move {
        if is_en_passant_window(board, last) && last.to.row == source.coord.row {
            let diag = if last.to.column == source.coord.column - 1 {
                Some(diag_west)
            } else if last.to.column == source.coord.column + 1 {
                Some(diag_east)
            } else {
                None
            };
            if let Some(diag) = diag {
                if let Some(cell) = diag(board, source) {
                    if cell.is_empty() {
                        moves.push(cell.coord);
                    }
                }
            }
        }
    }
}

/// The previous move opens an en-passant window when it moved a pawn whose
/// piece, read live from the board, has made exactly one move.
fn is_en_passant_window(board: &Board, last: &Move) -> bool {
    if last.piece.kind != PieceKind::Pawn {
        return false;
    }
    let landed = board.piece_at(last.to);
    landed.kind == PieceKind::Pawn && landed.move_count == 1
}
