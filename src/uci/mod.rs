//! The UCI text-protocol driver.
//!
//! A blocking loop over stdin: builds a [`Position`] from `position`
//! commands, runs the search on `go`, prints `bestmove` replies. The
//! engine core stays protocol-agnostic; everything textual lives here.

mod command;
mod time;

use std::io::{self, BufRead};

use rand::Rng;

use crate::board::{search, Color, Move, Position, StdoutLogger};

pub use command::{parse_command, UciCommand};
pub use time::think_time_ms;

const ENGINE_NAME: &str = concat!("Ember ", env!("CARGO_PKG_VERSION"));

/// Run the UCI loop until `quit` or end of input.
pub fn run_loop() {
    let stdin = io::stdin();
    let mut pos = Position::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(cmd) = parse_command(&line) else {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                eprintln!("unknown command: {trimmed}");
            }
            continue;
        };

        #[cfg(feature = "logging")]
        log::debug!("uci: {cmd:?}");

        match cmd {
            UciCommand::Uci => {
                println!("id name {ENGINE_NAME}");
                println!("id author the Ember authors");
                // Advertised for GUI compatibility; fixed values for now.
                println!("option name Move Overhead type spin default 10 min 0 max 5000");
                println!("option name Threads type spin default 1 min 1 max 1");
                println!("option name Hash type spin default 16 min 1 max 2048");
                println!("uciok");
            }
            UciCommand::IsReady => println!("readyok"),
            UciCommand::UciNewGame => pos = Position::new(),
            UciCommand::SetOption => {}
            UciCommand::Position { fen, moves } => {
                if let Some(next) = build_position(fen.as_deref(), &moves) {
                    pos = next;
                }
            }
            UciCommand::Go {
                wtime,
                btime,
                winc,
                binc,
                movetime,
            } => {
                let (time_left, increment) = match pos.side_to_move() {
                    Color::White => (wtime, winc),
                    Color::Black => (btime, binc),
                };
                let budget = think_time_ms(
                    movetime,
                    time_left.unwrap_or(0),
                    increment.unwrap_or(0),
                );
                let best = search(&pos, budget, Some(&StdoutLogger)).best_move;
                report_best_move(&pos, best);
            }
            UciCommand::Stop => {
                // The search is synchronous; by the time a `stop` line is
                // read there is nothing left to interrupt.
            }
            UciCommand::Display => println!("{pos}"),
            UciCommand::Quit => break,
        }
    }
}

/// Build a position from a `position` command payload. Returns `None` (and
/// reports to stderr) when the FEN or a move fails to parse.
fn build_position(fen: Option<&str>, moves: &[String]) -> Option<Position> {
    let mut pos = match fen {
        None => Position::new(),
        Some(fen) => match Position::try_from_fen(fen) {
            Ok(pos) => pos,
            Err(err) => {
                eprintln!("bad fen: {err}");
                return None;
            }
        },
    };
    for text in moves {
        match pos.parse_move(text) {
            Ok(mv) => pos.make_move(mv),
            Err(err) => {
                eprintln!("bad move: {err}");
                return None;
            }
        }
    }
    Some(pos)
}

/// Print the `bestmove` reply. A null best move normally means no legal
/// moves exist; if the search somehow gave up with moves on the board, fall
/// back to a random legal one rather than forfeit.
fn report_best_move(pos: &Position, best: Move) {
    if !best.is_null() {
        println!("bestmove {best}");
        return;
    }
    let legal = pos.legal_moves();
    if legal.is_empty() {
        println!("bestmove (none)");
    } else {
        let pick = rand::thread_rng().gen_range(0..legal.len());
        println!("bestmove {}", legal[pick]);
    }
}
