//! Check detection and the legal-move filter.
//!
//! Pseudo-legal candidates come from the per-kind generators; legality is
//! decided by simulating each candidate on the real board and probing whether
//! the mover's own king is attacked afterwards. The board therefore doubles
//! as the simulation scratch-space, which is why everything here takes
//! `&mut Board` even though every call restores the state it found.

use crate::game_state::board::Board;
use crate::game_state::cell::Coord;
use crate::game_state::chess_types::{PieceKind, Side};
use crate::moves::bishop_moves::collect_bishop_moves;
use crate::moves::king_moves::collect_king_moves;
use crate::moves::knight_moves::collect_knight_moves;
use crate::moves::move_description::{classify, Move, MoveKind};
use crate::moves::pawn_moves::collect_pawn_moves;
use crate::moves::queen_moves::collect_queen_moves;
use crate::moves::rook_moves::collect_rook_moves;
use crate::rules::move_apply::AppliedMove;

/// Pseudo-legal destinations for the piece on `source`, dispatched by kind.
/// An empty or off-board source yields no moves.
pub fn possible_moves(board: &mut Board, source: Coord, last_move: Option<&Move>) -> Vec<Coord> {
    let Some(cell) = board.cell(source) else {
        return Vec::new();
    };
    let cell = cell.clone();

    let mut moves = Vec::new();
    match cell.piece.kind {
        PieceKind::Empty => {}
        PieceKind::Pawn => collect_pawn_moves(board, &cell, last_move, &mut moves),
        PieceKind::Knight => collect_knight_moves(board, &cell, &mut moves),
        PieceKind::Bishop => collect_bishop_moves(board, &cell, &mut moves),
        PieceKind::Rook => collect_rook_moves(board, &cell, &mut moves),
        PieceKind::Queen => collect_queen_moves(board, &cell, &mut moves),
        PieceKind::King => collect_king_moves(board, &cell, last_move, &mut moves),
    }
    moves
}

/// True when any enemy piece pseudo-legally reaches `side`'s king. A side
/// with no king on the board is never in check; only synthetic positions can
/// reach that state.
pub fn is_under_check(board: &mut Board, side: Side, last_move: Option<&Move>) -> bool {
    let mut king = None;
    for coord in board.cells_owned_by(side) {
        if board.piece_at(coord).kind == PieceKind::King {
            king = Some(coord);
            break;
        }
    }
    let Some(king) = king else {
        return false;
    };

    for enemy in board.cells_owned_by(side.enemy()) {
        if possible_moves(board, enemy, last_move).contains(&king) {
            return true;
        }
    }
    false
}

/// Simulates `from -> to` (classified, so castle and en-passant legs apply)
/// and reports whether the mover's own king ends up attacked. The board is
/// restored before returning.
pub fn causes_check(board: &mut Board, from: Coord, to: Coord, last_move: Option<&Move>) -> bool {
    let mut mv = Move::new(board, from, to);
    classify(board, &mut mv);
    let side = mv.piece.side;
    let mut applied = AppliedMove::apply(board, mv);
    is_under_check(applied.board(), side, last_move)
}

/// Legal destinations for the piece on `source`: pseudo-legal candidates
/// minus those whose simulation leaves the own king in check. Independently
/// of that filter, a king that is currently in check may not move more than
/// one column, which removes castling attempts out of check.
pub fn legal_moves(board: &mut Board, source: Coord, last_move: Option<&Move>) -> Vec<Coord> {
    let mut candidates = possible_moves(board, source, last_move);
    if candidates.is_empty() {
        return candidates;
    }
    let piece = board.piece_at(source);

    candidates.retain(|&to| !causes_check(board, source, to, last_move));

    if piece.kind == PieceKind::King && is_under_check(board, piece.side, last_move) {
        candidates.retain(|&to| (to.column - source.column).abs() <= 1);
    }

    candidates
}

/// Number of legal moves available to `side`.
pub fn count_legal_moves(board: &mut Board, side: Side, last_move: Option<&Move>) -> usize {
    board
        .cells_owned_by(side)
        .into_iter()
        .map(|from| legal_moves(board, from, last_move).len())
        .sum()
}

/// All legal moves for `side`, classified and ordered best-guess first:
/// promotions score 1000, captures the victim's weight.
pub fn generate_all_legal_moves(
    board: &mut Board,
    side: Side,
    last_move: Option<&Move>,
) -> Vec<Move> {
    let mut all = Vec::new();
    for from in board.cells_owned_by(side) {
        for to in legal_moves(board, from, last_move) {
            let mut mv = Move::new(board, from, to);
            classify(board, &mut mv);
            mv.score = match mv.kind {
                MoveKind::Promotion => 1000,
                MoveKind::Capture => mv.captured.weight(),
                _ => 0,
            };
            all.push(mv);
        }
    }
    all.sort_by_key(|mv| -mv.score);
    all
}

/// Captures worth extending the quiescence search with: only pieces heavier
/// than a pawn capture, and only onto occupied cells.
pub fn generate_good_captures(
    board: &mut Board,
    side: Side,
    last_move: Option<&Move>,
) -> Vec<Move> {
    let mut captures = Vec::new();
    for from in board.cells_owned_by(side) {
        if board.piece_at(from).weight() <= 100 {
            continue;
        }
        for to in legal_moves(board, from, last_move) {
            if board.piece_at(to).is_empty() {
                continue;
            }
            let mut mv = Move::new(board, from, to);
            classify(board, &mut mv);
            captures.push(mv);
        }
    }
    captures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;
    use crate::utils::algebraic::parse_coord;

    fn coord(name: &str) -> Coord {
        parse_coord(name).expect("test coordinate parses")
    }

    fn snapshot(board: &Board) -> Vec<Piece> {
        board.cells().map(|cell| cell.piece).collect()
    }

    #[test]
    fn opening_position_has_twenty_legal_moves_per_side() {
        let mut board = Board::new_game();
        assert_eq!(count_legal_moves(&mut board, Side::White, None), 20);
        assert_eq!(count_legal_moves(&mut board, Side::Black, None), 20);
    }

    #[test]
    fn check_detection_sees_a_rook_on_the_file() {
        let mut board = Board::new();
        board.set_piece(coord("E1"), Piece::new(PieceKind::King, Side::White));
        board.set_piece(coord("E8"), Piece::new(PieceKind::Rook, Side::Black));
        assert!(is_under_check(&mut board, Side::White, None));
        assert!(!is_under_check(&mut board, Side::Black, None));
    }

    #[test]
    fn blocked_rook_gives_no_check() {
        let mut board = Board::new();
        board.set_piece(coord("E1"), Piece::new(PieceKind::King, Side::White));
        board.set_piece(coord("E4"), Piece::new(PieceKind::Pawn, Side::White));
        board.set_piece(coord("E8"), Piece::new(PieceKind::Rook, Side::Black));
        assert!(!is_under_check(&mut board, Side::White, None));
    }

    #[test]
    fn pinned_rook_may_only_move_along_the_pin() {
        let mut board = Board::new();
        board.set_piece(coord("E1"), Piece::new(PieceKind::King, Side::White));
        board.set_piece(coord("E2"), Piece::new(PieceKind::Rook, Side::White));
        board.set_piece(coord("E8"), Piece::new(PieceKind::Rook, Side::Black));
        let moves = legal_moves(&mut board, coord("E2"), None);
        assert!(!moves.contains(&coord("D2")));
        assert!(!moves.contains(&coord("A2")));
        assert!(moves.contains(&coord("E5")));
        assert!(moves.contains(&coord("E8")));
    }

    #[test]
    fn king_in_check_cannot_castle_away() {
        let mut board = Board::new();
        board.set_piece(coord("E1"), Piece::new(PieceKind::King, Side::White));
        board.set_piece(coord("H1"), Piece::new(PieceKind::Rook, Side::White));
        board.set_piece(coord("E8"), Piece::new(PieceKind::Rook, Side::Black));
        board.set_piece(coord("A8"), Piece::new(PieceKind::King, Side::Black));
        let moves = legal_moves(&mut board, coord("E1"), None);
        for to in &moves {
            assert!(
                (to.column - 5).abs() <= 1,
                "castle destination {} offered while in check",
                to
            );
        }
    }

    #[test]
    fn legality_probing_leaves_the_board_unchanged() {
        let mut board = Board::new_game();
        let before = snapshot(&board);
        let _ = generate_all_legal_moves(&mut board, Side::White, None);
        let _ = is_under_check(&mut board, Side::White, None);
        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn generated_moves_are_ordered_captures_first() {
        let mut board = Board::new();
        board.set_piece(coord("A1"), Piece::new(PieceKind::King, Side::White));
        board.set_piece(coord("D4"), Piece::new(PieceKind::Rook, Side::White));
        board.set_piece(coord("D8"), Piece::new(PieceKind::Queen, Side::Black));
        board.set_piece(coord("H8"), Piece::new(PieceKind::King, Side::Black));
        let moves = generate_all_legal_moves(&mut board, Side::White, None);
        assert!(!moves.is_empty());
        assert_eq!(moves[0].to, coord("D8"));
        assert_eq!(moves[0].score, 900);
    }

    #[test]
    fn good_captures_exclude_pawn_movers_and_quiet_moves() {
        let mut board = Board::new();
        board.set_piece(coord("A1"), Piece::new(PieceKind::King, Side::White));
        board.set_piece(coord("D4"), Piece::new(PieceKind::Rook, Side::White));
        board.set_piece(coord("C3"), Piece::new(PieceKind::Pawn, Side::White));
        board.set_piece(coord("D6"), Piece::new(PieceKind::Knight, Side::Black));
        board.set_piece(coord("B4"), Piece::new(PieceKind::Bishop, Side::Black));
        board.set_piece(coord("H8"), Piece::new(PieceKind::King, Side::Black));
        let captures = generate_good_captures(&mut board, Side::White, None);
        assert!(captures.iter().all(|mv| !mv.captured.is_empty()));
        assert!(captures.iter().all(|mv| mv.piece.kind != PieceKind::Pawn));
        assert!(captures.iter().any(|mv| mv.to == coord("D6")));
    }
}
