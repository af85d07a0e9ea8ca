//! Move execution and undo.
//!
//! `execute_move` and `undo_move` are exact inverses over every move kind.
//! The mover's snapshot in the `Move` is frozen before execution, so undo
//! restores it verbatim (move count included) instead of decrementing live
//! state. `AppliedMove` scopes a speculative application so that every early
//! return in the search still releases the board to its prior state.

use crate::game_state::board::Board;
use crate::game_state::cell::Coord;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::moves::move_description::{Move, MoveKind};

/// Applies `mv` to the board. For promotions with no explicit replacement a
/// queen of the mover's side is placed. En passant records the removed pawn
/// into `mv` so undo can restore it.
pub fn execute_move(board: &mut Board, mv: &mut Move) {
    match mv.kind {
        MoveKind::Normal | MoveKind::Capture => move_piece(board, mv.from, mv.to),
        MoveKind::Castle => {
            move_piece(board, mv.from, mv.to);
            let (rook_from, rook_to) = castle_rook_legs(mv);
            move_piece(board, rook_from, rook_to);
        }
        MoveKind::Promotion => {
            move_piece(board, mv.from, mv.to);
            let replacement = mv
                .promoted
                .unwrap_or_else(|| Piece::new(PieceKind::Queen, mv.piece.side));
            board.set_piece(mv.to, replacement);
        }
        MoveKind::EnPassant => {
            let behind = en_passant_victim(mv);
            mv.en_passant_captured = Some(board.piece_at(behind));
            board.set_piece(behind, Piece::empty());
            move_piece(board, mv.from, mv.to);
        }
    }
}

/// Reverts an executed `mv`, restoring both cells (and the rook or captured
/// pawn for the special kinds) to their pre-execution values.
pub fn undo_move(board: &mut Board, mv: &Move) {
    board.set_piece(mv.to, mv.captured);
    board.set_piece(mv.from, mv.piece);

    match mv.kind {
        MoveKind::Normal | MoveKind::Capture | MoveKind::Promotion => {}
        MoveKind::Castle => {
            let (rook_home, rook_landing) = castle_rook_legs(mv);
            let mut rook = board.piece_at(rook_landing);
            rook.move_count -= 1;
            board.set_piece(rook_home, rook);
            board.set_piece(rook_landing, Piece::empty());
        }
        MoveKind::EnPassant => {
            let behind = en_passant_victim(mv);
            let victim = mv.en_passant_captured.unwrap_or_else(Piece::empty);
            board.set_piece(behind, victim);
        }
    }
}

/// Lifts the mover from `from` to `to`, bumping its move count.
fn move_piece(board: &mut Board, from: Coord, to: Coord) {
    let mut mover = board.piece_at(from);
    mover.move_count += 1;
    board.set_piece(to, mover);
    board.set_piece(from, Piece::empty());
}

/// Rook source and destination for a castle, derived from the king's landing
/// cell: the corner rook ends up on the cell the king stepped across.
fn castle_rook_legs(mv: &Move) -> (Coord, Coord) {
    let row = mv.to.row;
    if mv.to.column > mv.from.column {
        (Coord::new(row, 8), Coord::new(row, mv.to.column - 1))
    } else {
        (Coord::new(row, 1), Coord::new(row, mv.to.column + 1))
    }
}

/// The captured pawn of an en-passant move sits behind the destination,
/// relative to the mover's forward direction.
fn en_passant_victim(mv: &Move) -> Coord {
    if mv.piece.side.is_white() {
        Coord::new(mv.to.row - 1, mv.to.column)
    } else {
        Coord::new(mv.to.row + 1, mv.to.column)
    }
}

/// Scoped speculative application: the move is executed on construction and
/// undone when the guard drops, so search cutoffs cannot leak a half-applied
/// board.
pub struct AppliedMove<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> AppliedMove<'a> {
    pub fn apply(board: &'a mut Board, mut mv: Move) -> Self {
        execute_move(board, &mut mv);
        AppliedMove { board, mv }
    }

    #[inline]
    pub fn board(&mut self) -> &mut Board {
        self.board
    }

    #[inline]
    pub fn record(&self) -> &Move {
        &self.mv
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        undo_move(self.board, &self.mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Side;
    use crate::moves::move_description::classify;
    use crate::utils::algebraic::parse_coord;

    fn coord(name: &str) -> Coord {
        parse_coord(name).expect("test coordinate parses")
    }

    fn snapshot(board: &Board) -> Vec<Piece> {
        board.cells().map(|cell| cell.piece).collect()
    }

    fn classified(board: &Board, from: &str, to: &str) -> Move {
        let mut mv = Move::new(board, coord(from), coord(to));
        classify(board, &mut mv);
        mv
    }

    #[test]
    fn normal_move_round_trips() {
        let mut board = Board::new_game();
        let before = snapshot(&board);
        let mut mv = classified(&board, "G1", "F3");

        execute_move(&mut board, &mut mv);
        assert!(board.at_notation("G1").expect("G1 exists").is_empty());
        let knight = board.piece_at(coord("F3"));
        assert_eq!(knight.kind, PieceKind::Knight);
        assert_eq!(knight.move_count, 1);

        undo_move(&mut board, &mv);
        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn capture_round_trips() {
        let mut board = Board::new();
        board.set_piece(coord("D4"), Piece::new(PieceKind::Rook, Side::White));
        board.set_piece(coord("D7"), Piece::new(PieceKind::Pawn, Side::Black));
        let before = snapshot(&board);
        let mut mv = classified(&board, "D4", "D7");

        execute_move(&mut board, &mut mv);
        assert_eq!(board.piece_at(coord("D7")).kind, PieceKind::Rook);
        undo_move(&mut board, &mv);
        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn kingside_castle_moves_and_restores_the_rook() {
        let mut board = Board::new();
        board.set_piece(coord("E1"), Piece::new(PieceKind::King, Side::White));
        board.set_piece(coord("H1"), Piece::new(PieceKind::Rook, Side::White));
        let before = snapshot(&board);
        let mut mv = classified(&board, "E1", "G1");

        execute_move(&mut board, &mut mv);
        assert_eq!(board.piece_at(coord("G1")).kind, PieceKind::King);
        assert_eq!(board.piece_at(coord("F1")).kind, PieceKind::Rook);
        assert_eq!(board.piece_at(coord("F1")).move_count, 1);
        assert!(board.at_notation("H1").expect("H1 exists").is_empty());

        undo_move(&mut board, &mv);
        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn queenside_castle_moves_and_restores_the_rook() {
        let mut board = Board::new();
        board.set_piece(coord("E8"), Piece::new(PieceKind::King, Side::Black));
        board.set_piece(coord("A8"), Piece::new(PieceKind::Rook, Side::Black));
        let before = snapshot(&board);
        let mut mv = classified(&board, "E8", "C8");

        execute_move(&mut board, &mut mv);
        assert_eq!(board.piece_at(coord("C8")).kind, PieceKind::King);
        assert_eq!(board.piece_at(coord("D8")).kind, PieceKind::Rook);
        assert!(board.at_notation("A8").expect("A8 exists").is_empty());

        undo_move(&mut board, &mv);
        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn promotion_defaults_to_queen_and_round_trips() {
        let mut board = Board::new();
        board.set_piece(coord("A7"), Piece::new(PieceKind::Pawn, Side::White));
        let before = snapshot(&board);
        let mut mv = classified(&board, "A7", "A8");

        execute_move(&mut board, &mut mv);
        let promoted = board.piece_at(coord("A8"));
        assert_eq!(promoted.kind, PieceKind::Queen);
        assert_eq!(promoted.side, Side::White);

        undo_move(&mut board, &mv);
        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn explicit_underpromotion_is_honored() {
        let mut board = Board::new();
        board.set_piece(coord("G7"), Piece::new(PieceKind::Pawn, Side::White));
        let mut mv = classified(&board, "G7", "G8");
        mv.promoted = Some(Piece::new(PieceKind::Knight, Side::White));

        execute_move(&mut board, &mut mv);
        assert_eq!(board.piece_at(coord("G8")).kind, PieceKind::Knight);
        undo_move(&mut board, &mv);
        assert_eq!(board.piece_at(coord("G7")).kind, PieceKind::Pawn);
    }

    #[test]
    fn en_passant_removes_and_restores_the_bypassing_pawn() {
        let mut board = Board::new();
        board.set_piece(coord("E5"), Piece::new(PieceKind::Pawn, Side::White));
        board.set_piece(coord("D7"), Piece::new(PieceKind::Pawn, Side::Black));
        let mut double = classified(&board, "D7", "D5");
        execute_move(&mut board, &mut double);
        let before = snapshot(&board);

        let mut mv = classified(&board, "E5", "D6");
        assert_eq!(mv.kind, MoveKind::EnPassant);
        execute_move(&mut board, &mut mv);
        assert_eq!(board.piece_at(coord("D6")).kind, PieceKind::Pawn);
        assert!(board.at_notation("D5").expect("D5 exists").is_empty());
        assert!(board.at_notation("E5").expect("E5 exists").is_empty());
        assert_eq!(
            mv.en_passant_captured.expect("victim recorded").side,
            Side::Black
        );

        undo_move(&mut board, &mv);
        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn applied_move_guard_undoes_on_drop() {
        let mut board = Board::new_game();
        let before = snapshot(&board);
        let mv = classified(&board, "E2", "E4");
        {
            let mut applied = AppliedMove::apply(&mut board, mv);
            assert_eq!(
                applied.board().piece_at(coord("E4")).kind,
                PieceKind::Pawn
            );
            assert_eq!(applied.record().from, coord("E2"));
        }
        assert_eq!(snapshot(&board), before);
    }
}
