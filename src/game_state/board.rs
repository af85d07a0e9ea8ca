//! The 64-cell board table.
//!
//! Cells are stored row-major and addressed by 1-based `Coord` or by
//! algebraic name. The eight directional accessors are the only spatial
//! vocabulary in the engine; every generator walks the board through them
//! (or through two-step compositions of them), so edge handling lives here
//! and nowhere else.

use std::collections::BTreeSet;

use crate::game_state::cell::{Cell, Coord};
use crate::game_state::chess_types::{Piece, PieceKind, Side};
use crate::utils::algebraic::parse_coord;

/// Directional neighbor accessor, usable as a first-class value so pawn and
/// knight generation can be written once per shape instead of once per side.
pub type Neighbor = for<'a, 'b> fn(&'a Board, &'b Cell) -> Option<&'a Cell>;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    changed: BTreeSet<Coord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with all 64 cells vacant.
    pub fn new() -> Self {
        let mut cells = Vec::with_capacity(64);
        for row in 1..=8 {
            for column in 1..=8 {
                cells.push(Cell::new(Coord::new(row, column)));
            }
        }
        Board {
            cells,
            changed: BTreeSet::new(),
        }
    }

    /// A board holding the standard opening position.
    pub fn new_game() -> Self {
        let mut board = Self::new();
        board.reset();
        board
    }

    /// Restores the standard 32-piece opening position with zeroed move
    /// counts. Every cell is marked changed.
    pub fn reset(&mut self) {
        for row in 1..=8i8 {
            for column in 1..=8i8 {
                let kind = BACK_RANK[(column - 1) as usize];
                let piece = match row {
                    1 => Piece::new(kind, Side::White),
                    2 => Piece::new(PieceKind::Pawn, Side::White),
                    7 => Piece::new(PieceKind::Pawn, Side::Black),
                    8 => Piece::new(kind, Side::Black),
                    _ => Piece::empty(),
                };
                self.set_piece(Coord::new(row, column), piece);
            }
        }
    }

    #[inline]
    fn index_of(coord: Coord) -> usize {
        debug_assert!(coord.is_on_board());
        ((coord.row - 1) * 8 + (coord.column - 1)) as usize
    }

    #[inline]
    pub fn at(&self, row: i8, column: i8) -> Option<&Cell> {
        let coord = Coord::new(row, column);
        if coord.is_on_board() {
            self.cells.get(Self::index_of(coord))
        } else {
            None
        }
    }

    #[inline]
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.at(coord.row, coord.column)
    }

    /// Resolves an algebraic name like "E4". Malformed names yield `None`.
    pub fn at_notation(&self, name: &str) -> Option<&Cell> {
        parse_coord(name).ok().and_then(|coord| self.cell(coord))
    }

    /// The piece on a known-valid coordinate.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Piece {
        self.cells[Self::index_of(coord)].piece
    }

    /// Writes a piece value and records the cell in the changed set.
    #[inline]
    pub fn set_piece(&mut self, coord: Coord, piece: Piece) {
        self.cells[Self::index_of(coord)].piece = piece;
        self.changed.insert(coord);
    }

    // --- Directional accessors. Rows grow northward, columns eastward. ---

    #[inline]
    pub fn north(&self, cell: &Cell) -> Option<&Cell> {
        self.at(cell.coord.row + 1, cell.coord.column)
    }

    #[inline]
    pub fn south(&self, cell: &Cell) -> Option<&Cell> {
        self.at(cell.coord.row - 1, cell.coord.column)
    }

    #[inline]
    pub fn east(&self, cell: &Cell) -> Option<&Cell> {
        self.at(cell.coord.row, cell.coord.column + 1)
    }

    #[inline]
    pub fn west(&self, cell: &Cell) -> Option<&Cell> {
        self.at(cell.coord.row, cell.coord.column - 1)
    }

    #[inline]
    pub fn north_east(&self, cell: &Cell) -> Option<&Cell> {
        self.at(cell.coord.row + 1, cell.coord.column + 1)
    }

    #[inline]
    pub fn north_west(&self, cell: &Cell) -> Option<&Cell> {
        self.at(cell.coord.row + 1, cell.coord.column - 1)
    }

    #[inline]
    pub fn south_east(&self, cell: &Cell) -> Option<&Cell> {
        self.at(cell.coord.row - 1, cell.coord.column + 1)
    }

    #[inline]
    pub fn south_west(&self, cell: &Cell) -> Option<&Cell> {
        self.at(cell.coord.row - 1, cell.coord.column - 1)
    }

    /// Row-major ordered coordinates of the non-empty cells owned by `side`.
    pub fn cells_owned_by(&self, side: Side) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|cell| !cell.is_empty() && cell.piece.side == side)
            .map(|cell| cell.coord)
            .collect()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Drains the set of cells whose content may have changed since the last
    /// drain, for rendering layers that refresh incrementally. Speculative
    /// search moves are restored before anyone observes them, so a renderer
    /// re-reading these cells always sees consistent state.
    pub fn take_changed_cells(&mut self) -> Vec<Coord> {
        let drained: Vec<Coord> = self.changed.iter().copied().collect();
        self.changed.clear();
        drained
    }
}
