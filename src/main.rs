use std::env;
use std::process::ExitCode;

use ember::board::Position;
use ember::uci;

/// With no arguments, speak UCI on stdin/stdout. With `"<FEN>" <depth>`,
/// print the perft node count for the position and exit.
fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() == 1 {
        uci::run_loop();
        return ExitCode::SUCCESS;
    }

    if args.len() < 3 {
        eprintln!("usage: {} \"<FEN>\" <depth>", args[0]);
        return ExitCode::from(2);
    }

    let pos = match Position::try_from_fen(&args[1]) {
        Ok(pos) => pos,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };
    let depth: u32 = match args[2].parse() {
        Ok(depth) => depth,
        Err(_) => {
            eprintln!("invalid depth '{}'", args[2]);
            return ExitCode::from(1);
        }
    };

    println!("{}", pos.perft(depth));
    ExitCode::SUCCESS
}
