//! Core piece-level value types shared by the board, rules, and search.

use std::fmt;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn enemy(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Side::White)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind. `Empty` is the vacancy sentinel: cells always hold a `Piece`
/// value, never an absent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Empty,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
            PieceKind::Empty => "Empty",
        };
        write!(f, "{}", name)
    }
}

/// A piece value as stored in one board cell.
///
/// `move_count` increments exactly once per executed move of this piece and
/// is restored on undo. It is the only has-moved signal in the engine:
/// castling eligibility, the pawn double step, and the en-passant window all
/// read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub move_count: u16,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece {
            kind,
            side,
            move_count: 0,
        }
    }

    #[inline]
    pub const fn empty() -> Self {
        Piece::new(PieceKind::Empty, Side::White)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    /// Material weight used by the evaluator and the capture heuristics.
    #[inline]
    pub const fn weight(self) -> i32 {
        match self.kind {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 325,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King | PieceKind::Empty => 0,
        }
    }
}
