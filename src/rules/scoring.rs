//! Board evaluation: material difference with a tempo malus, plus the
//! checkmate sentinel.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Side;
use crate::moves::move_description::Move;
use crate::rules::endings::is_checkmate;

/// Flat cost charged to the side being evaluated, so standing pat is never
/// free.
pub const TEMPO_MALUS: i32 = 25;

/// Score returned when the evaluated side has checkmated its enemy.
pub const MATE_SCORE: i32 = i32::MAX;

/// Summed piece weights for `side`.
pub fn material_score(board: &Board, side: Side) -> i32 {
    board
        .cells_owned_by(side)
        .into_iter()
        .map(|coord| board.piece_at(coord).weight())
        .sum()
}

/// Evaluation from `side`'s point of view: own material minus enemy material
/// minus the tempo malus, overridden by the mate sentinel when the enemy has
/// been checkmated.
pub fn evaluate(board: &mut Board, side: Side, last_move: Option<&Move>) -> i32 {
    let score = material_score(board, side) - material_score(board, side.enemy()) - TEMPO_MALUS;
    if is_checkmate(board, side.enemy(), last_move) {
        return MATE_SCORE;
    }
    score
}
