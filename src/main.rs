//! Interactive terminal driver: play against the negamax engine or drive
//! both sides by hand.

use std::io::{self, BufRead, Write};

use quince_chess::engines::engine_negamax::NegamaxEngine;
use quince_chess::engines::engine_trait::{Engine, GoParams};
use quince_chess::game_state::game::{Game, GameStatus, MoveError};
use quince_chess::utils::pgn::write_game_record;
use quince_chess::utils::render_board::render_board;

fn main() {
    let stdin = io::stdin();
    let mut game = Game::new();
    let mut engine = NegamaxEngine::new();

    println!("quince_chess - type 'help' for commands");
    println!("{}", render_board(game.board()));

    loop {
        print!("{} to move> ", game.turn());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("input error: {}", err);
                break;
            }
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["show"] => println!("{}", render_board(game.board())),
            ["new"] => {
                game.reset();
                engine.new_game();
                println!("{}", render_board(game.board()));
            }
            ["move", from, to] => match game.attempt_move(from, to) {
                Ok(()) => after_move(&mut game),
                Err(err) => report_rejection(err),
            },
            ["ai"] => run_engine(&mut game, &mut engine, None),
            ["ai", depth] => match depth.parse::<u8>() {
                Ok(depth) => run_engine(&mut game, &mut engine, Some(depth)),
                Err(_) => println!("usage: ai [depth]"),
            },
            ["undo"] => match game.undo_last() {
                Some(mv) => {
                    println!("took back {}", mv);
                    println!("{}", render_board(game.board()));
                }
                None => println!("nothing to undo"),
            },
            ["redo"] => match game.redo() {
                Some(mv) => {
                    println!("replayed {}", mv);
                    println!("{}", render_board(game.board()));
                }
                None => println!("nothing to redo"),
            },
            ["moves", from] => {
                let targets = game.legal_moves_from(from);
                if targets.is_empty() {
                    println!("no legal moves from {}", from);
                } else {
                    let names: Vec<String> = targets.iter().map(|c| c.to_string()).collect();
                    println!("{}", names.join(" "));
                }
            }
            ["status"] => println!("{:?}", game.status()),
            ["pgn"] => {
                let result = match game.status() {
                    GameStatus::Checkmate(side) => {
                        if side.is_white() {
                            "0-1"
                        } else {
                            "1-0"
                        }
                    }
                    GameStatus::Stalemate(_) | GameStatus::FiftyMoveDraw => "1/2-1/2",
                    GameStatus::InProgress => "*",
                };
                println!("{}", write_game_record(game.history(), result));
            }
            _ => println!("unrecognized command; type 'help'"),
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  move <from> <to>   play a move, e.g. 'move e2 e4'");
    println!("  ai [depth]         let the engine move for the side to move");
    println!("  moves <from>       list legal destinations from a cell");
    println!("  undo / redo        step through the history");
    println!("  show               render the board");
    println!("  status             report check/mate/draw state");
    println!("  pgn                dump the game record");
    println!("  new                restart from the opening position");
    println!("  quit               leave");
}

fn run_engine(game: &mut Game, engine: &mut NegamaxEngine, depth: Option<u8>) {
    let params = GoParams { depth };
    match engine.choose_move(game, &params) {
        Ok(out) => {
            for line in &out.info_lines {
                println!("{}", line);
            }
            match out.best_move {
                Some(mv) => {
                    let (from, to) = (mv.from.to_string(), mv.to.to_string());
                    match game.attempt_move(&from, &to) {
                        Ok(()) => {
                            println!("engine plays {}", mv);
                            after_move(game);
                        }
                        Err(err) => println!("engine move rejected: {}", err),
                    }
                }
                None => println!("engine has no legal move"),
            }
        }
        Err(err) => println!("engine error: {}", err),
    }
}

fn after_move(game: &mut Game) {
    println!("{}", render_board(game.board()));
    match game.status() {
        GameStatus::InProgress => {
            if game.is_in_check(game.turn()) {
                println!("{} is in check", game.turn());
            }
        }
        GameStatus::Checkmate(side) => println!("checkmate, {} loses", side),
        GameStatus::Stalemate(side) => println!("stalemate, {} has no move", side),
        GameStatus::FiftyMoveDraw => println!("draw by the fifty-move rule"),
    }
}

fn report_rejection(err: MoveError) {
    println!("rejected ({}): {}", err.code(), err);
}
