//! Crate root module declarations for the Quince Chess engine project.
//!
//! This file exposes all top-level subsystems (game state, per-kind move
//! generation, rules, search, engines, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod cell;
    pub mod chess_types;
    pub mod game;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_description;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod rules {
    pub mod endings;
    pub mod legality;
    pub mod move_apply;
    pub mod scoring;
}

pub mod search {
    pub mod alpha_beta;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod pgn;
    pub mod render_board;
}
