//! Board coordinates and cells.
//!
//! `Coord` is 1-based: row 1 is White's back rank, column 1 is the A file.
//! A `Cell` pairs a coordinate with the piece value currently on it; two
//! cells compare equal when their coordinates match, regardless of content.

use std::fmt;

use crate::game_state::chess_types::Piece;

/// 1-based board coordinate. `Display` renders the algebraic name ("E4").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i8,
    pub column: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Coord { row, column }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 1 && self.row <= 8 && self.column >= 1 && self.column <= 8
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'A' + (self.column - 1) as u8) as char;
        write!(f, "{}{}", file, self.row)
    }
}

/// One square of the board.
#[derive(Debug, Clone)]
pub struct Cell {
    pub coord: Coord,
    pub piece: Piece,
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Cell {
    #[inline]
    pub fn new(coord: Coord) -> Self {
        Cell {
            coord,
            piece: Piece::empty(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_empty()
    }

    /// True when this cell holds a piece of the same side as `other`'s piece.
    /// An empty cell owns nothing.
    #[inline]
    pub fn is_owned_by(&self, other: &Cell) -> bool {
        !self.is_empty() && self.piece.side == other.piece.side
    }

    /// True when this cell holds a piece of the side opposing `other`'s piece.
    #[inline]
    pub fn is_owned_by_enemy(&self, other: &Cell) -> bool {
        !self.is_empty() && self.piece.side != other.piece.side
    }
}
