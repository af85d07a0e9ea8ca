//! The game session: board, side to move, and the done/undone move stacks.
//!
//! `Game` is the external surface of the engine. Everything a driver needs
//! goes through it: attempting a player move, asking the search for a best
//! move, undo/redo, status queries, and draining the changed-cell set for
//! incremental rendering.

use std::error::Error;
use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::cell::Coord;
use crate::game_state::chess_types::{Piece, PieceKind, Side};
use crate::moves::move_description::{classify, Move, MoveKind};
use crate::rules::endings::{is_checkmate, is_fifty_move_draw, is_stalemate};
use crate::rules::legality::{generate_all_legal_moves, is_under_check, legal_moves};
use crate::rules::move_apply::{execute_move, undo_move};
use crate::search::alpha_beta::{SearchConfig, Searcher};
use crate::utils::algebraic::parse_coord;

/// Why an attempted move was rejected. `code()` keeps the legacy numeric
/// contract: `-1` for anything wrong with the source, `-2` for a legal
/// source with an illegal destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    InvalidAddress(String),
    NotMovablePiece,
    IllegalDestination,
}

impl MoveError {
    #[inline]
    pub fn code(&self) -> i32 {
        match self {
            MoveError::InvalidAddress(_) | MoveError::NotMovablePiece => -1,
            MoveError::IllegalDestination => -2,
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidAddress(detail) => write!(f, "invalid address: {}", detail),
            MoveError::NotMovablePiece => {
                write!(f, "no piece of the side to move on the source cell")
            }
            MoveError::IllegalDestination => write!(f, "destination is not a legal move"),
        }
    }
}

impl Error for MoveError {}

/// Result of a status query after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The named side is checkmated.
    Checkmate(Side),
    /// The named side has no legal move while not in check.
    Stalemate(Side),
    FiftyMoveDraw,
}

pub struct Game {
    board: Board,
    turn: Side,
    done: Vec<Move>,
    undone: Vec<Move>,
    pub search_config: SearchConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new_game(),
            turn: Side::White,
            done: Vec::new(),
            undone: Vec::new(),
            search_config: SearchConfig::default(),
        }
    }

    /// Restarts from the opening position, clearing both history stacks.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Side::White;
        self.done.clear();
        self.undone.clear();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions. Bypasses history, so
    /// callers own the consistency of what they build.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.done
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.done.last()
    }

    /// Validates and plays one move for the side to move. On success the
    /// move is recorded, the redo stack cleared, and the turn passed. On
    /// failure board and history are untouched.
    pub fn attempt_move(&mut self, source: &str, dest: &str) -> Result<(), MoveError> {
        let from = parse_coord(source).map_err(MoveError::InvalidAddress)?;
        let to = parse_coord(dest).map_err(MoveError::InvalidAddress)?;

        let piece = self.board.piece_at(from);
        if piece.is_empty() || piece.side != self.turn {
            return Err(MoveError::NotMovablePiece);
        }

        let last = self.done.last().copied();
        if !legal_moves(&mut self.board, from, last.as_ref()).contains(&to) {
            return Err(MoveError::IllegalDestination);
        }

        let mut mv = Move::new(&self.board, from, to);
        classify(&self.board, &mut mv);
        execute_move(&mut self.board, &mut mv);
        if mv.kind == MoveKind::Promotion && mv.promoted.is_none() {
            // Record the default so redo replays the identical move.
            mv.promoted = Some(Piece::new(PieceKind::Queen, mv.piece.side));
        }
        self.done.push(mv);
        self.undone.clear();
        self.turn = self.turn.enemy();
        Ok(())
    }

    /// Takes back the most recent move. Returns it, or `None` with nothing
    /// to undo.
    pub fn undo_last(&mut self) -> Option<Move> {
        let mv = self.done.pop()?;
        undo_move(&mut self.board, &mv);
        self.undone.push(mv);
        self.turn = self.turn.enemy();
        Some(mv)
    }

    /// Replays the most recently undone move. Returns it, or `None` with
    /// nothing to redo.
    pub fn redo(&mut self) -> Option<Move> {
        let mut mv = self.undone.pop()?;
        execute_move(&mut self.board, &mut mv);
        self.done.push(mv);
        self.turn = self.turn.enemy();
        Some(mv)
    }

    /// Legal destinations from an algebraic source cell; empty for malformed
    /// names or empty cells.
    pub fn legal_moves_from(&mut self, source: &str) -> Vec<Coord> {
        let Ok(from) = parse_coord(source) else {
            return Vec::new();
        };
        let last = self.done.last().copied();
        legal_moves(&mut self.board, from, last.as_ref())
    }

    /// All legal moves for `side`, heuristically ordered.
    pub fn all_legal_moves(&mut self, side: Side) -> Vec<Move> {
        let last = self.done.last().copied();
        generate_all_legal_moves(&mut self.board, side, last.as_ref())
    }

    pub fn is_in_check(&mut self, side: Side) -> bool {
        let last = self.done.last().copied();
        is_under_check(&mut self.board, side, last.as_ref())
    }

    /// Game state from the side to move's perspective.
    pub fn status(&mut self) -> GameStatus {
        let side = self.turn;
        let last = self.done.last().copied();
        if is_checkmate(&mut self.board, side, last.as_ref()) {
            return GameStatus::Checkmate(side);
        }
        if is_stalemate(&mut self.board, side, last.as_ref()) {
            return GameStatus::Stalemate(side);
        }
        if is_fifty_move_draw(&self.done) {
            return GameStatus::FiftyMoveDraw;
        }
        GameStatus::InProgress
    }

    /// Runs the configured search for `side`. `None` iff `side` has no legal
    /// move. The board is restored before returning; only `attempt_move`
    /// commits state.
    pub fn best_move(&mut self, side: Side) -> Option<Move> {
        let mut searcher = Searcher::new(self.search_config);
        let last = self.done.last().copied();
        searcher.best_move(&mut self.board, side, last)
    }

    /// Drains the cells whose content may have changed, for renderers.
    pub fn take_changed_cells(&mut self) -> Vec<Coord> {
        self.board.take_changed_cells()
    }
}
