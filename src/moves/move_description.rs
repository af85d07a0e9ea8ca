//! Move records and classification.
//!
//! A `Move` carries both live addresses (`from`/`to`, which keep resolving
//! against the board as it changes) and frozen `Piece` snapshots taken at
//! creation time. Execution reads the live board; undo restores the
//! snapshots. Both halves are required for the exact-inverse guarantee.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::cell::Coord;
use crate::game_state::chess_types::{Piece, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    Capture,
    Castle,
    Promotion,
    EnPassant,
}

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    /// Mover snapshot, frozen before execution (pre-increment move count).
    pub piece: Piece,
    /// Destination snapshot, frozen before execution.
    pub captured: Piece,
    /// Replacement piece for promotions. `None` means promote to queen.
    pub promoted: Option<Piece>,
    /// The pawn removed by an en-passant capture, recorded at execute time.
    pub en_passant_captured: Option<Piece>,
    pub kind: MoveKind,
    /// Heuristic ordering score assigned during generation, overwritten with
    /// the search score at the root.
    pub score: i32,
}

impl Move {
    /// Snapshots a candidate move from the current board. The kind starts as
    /// `Normal`; call [`classify`] before executing.
    pub fn new(board: &Board, from: Coord, to: Coord) -> Self {
        Move {
            from,
            to,
            piece: board.piece_at(from),
            captured: board.piece_at(to),
            promoted: None,
            en_passant_captured: None,
            kind: MoveKind::Normal,
            score: 0,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = if self.captured.is_empty() { "-" } else { "x" };
        write!(f, "{} {}{}{}", self.piece.kind, self.from, join, self.to)
    }
}

/// Assigns the move kind by evaluating, in this fixed order over the current
/// (pre-execution) board state: Normal, then Capture, then Castle, then
/// Promotion, then EnPassant. Later rules override earlier ones, so a
/// capturing promotion classifies as `Promotion` with the victim still held
/// in `captured`.
pub fn classify(board: &Board, mv: &mut Move) {
    let mover = board.piece_at(mv.from);
    let dest = board.piece_at(mv.to);

    mv.kind = MoveKind::Normal;

    if !dest.is_empty() {
        mv.kind = MoveKind::Capture;
    }
    if mover.kind == PieceKind::King && (mv.to.column - mv.from.column).abs() > 1 {
        mv.kind = MoveKind::Castle;
    }
    if mover.kind == PieceKind::Pawn && (mv.to.row == 8 || mv.to.row == 1) {
        mv.kind = MoveKind::Promotion;
    }
    if mover.kind == PieceKind::Pawn && mv.to.column != mv.from.column && dest.is_empty() {
        mv.kind = MoveKind::EnPassant;
    }
}
