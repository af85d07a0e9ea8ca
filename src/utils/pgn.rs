//! PGN-style export of the played move history.
//!
//! Serializes the done stack and a header block to PGN text. Moves are
//! written in long algebraic coordinates (promotions carry their piece
//! letter), which replayers resolve without disambiguation rules.

use std::collections::BTreeMap;

use crate::moves::move_description::{Move, MoveKind};
use crate::game_state::chess_types::PieceKind;

pub fn write_game_record(history: &[Move], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Quince Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        chrono::Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    write_game_record_with_headers(history, &headers)
}

pub fn write_game_record_with_headers(
    history: &[Move],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(history.len() + 1);
    for (ply, mv) in history.iter().enumerate() {
        let lan = long_algebraic(mv);
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, lan));
        } else {
            movetext_parts.push(lan);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn long_algebraic(mv: &Move) -> String {
    let mut lan = format!("{}{}", mv.from, mv.to).to_lowercase();
    if mv.kind == MoveKind::Promotion {
        let kind = mv.promoted.map(|p| p.kind).unwrap_or(PieceKind::Queen);
        lan.push(match kind {
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            _ => 'q',
        });
    }
    lan
}

fn normalize_result(result: &str) -> &str {
    match result {
        "1-0" | "0-1" | "1/2-1/2" | "*" => result,
        _ => "*",
    }
}

fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game::Game;

    #[test]
    fn records_an_opening_with_numbered_pairs() {
        let mut game = Game::new();
        for (from, to) in [("E2", "E4"), ("E7", "E5"), ("G1", "F3"), ("B8", "C6")] {
            game.attempt_move(from, to).expect("scripted move is legal");
        }
        let pgn = write_game_record(game.history(), "*");
        assert!(pgn.contains("[Event \"Quince Chess Game\"]"));
        assert!(pgn.contains("1. e2e4 e7e5 2. g1f3 b8c6 *"));
        // Date header carries a real date, not a placeholder.
        assert!(!pgn.contains("????"));
    }

    #[test]
    fn promotion_moves_carry_the_piece_letter() {
        let mv = {
            let mut game = Game::new();
            let board = game.board_mut();
            use crate::game_state::cell::Coord;
            use crate::game_state::chess_types::{Piece, Side};
            for column in 1..=2 {
                board.set_piece(Coord::new(8, column), Piece::empty());
                board.set_piece(Coord::new(7, column), Piece::empty());
            }
            let mut runner = Piece::new(PieceKind::Pawn, Side::White);
            runner.move_count = 3;
            board.set_piece(Coord::new(7, 1), runner);
            game.attempt_move("A7", "A8").expect("promotion is legal");
            *game.history().last().expect("recorded")
        };
        assert_eq!(long_algebraic(&mv), "a7a8q");
    }

    #[test]
    fn unknown_results_normalize_to_unfinished() {
        let pgn = write_game_record(&[], "whatever");
        assert!(pgn.contains("[Result \"*\"]"));
        assert!(pgn.trim_end().ends_with('*'));
    }
}
