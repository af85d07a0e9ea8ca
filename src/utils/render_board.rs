//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the cell table for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::cell::Coord;
use crate::game_state::chess_types::{Piece, PieceKind, Side};

/// Render the board to a Unicode string for terminal output, White's back
/// rank at the bottom.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (1..=8).rev() {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for column in 1..=8 {
            let piece = board.piece_at(Coord::new(row, column));
            match piece_to_unicode(piece) {
                Some(ch) => out.push(ch),
                None => out.push('·'),
            }

            if column < 8 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> Option<char> {
    let ch = match (piece.side, piece.kind) {
        (_, PieceKind::Empty) => return None,
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_render_has_expected_edges() {
        let rendered = render_board(&Board::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert!(lines[1].starts_with("8 ♜"));
        assert!(lines[8].starts_with("1 ♖"));
        assert!(lines[4].contains('·'));
    }
}
