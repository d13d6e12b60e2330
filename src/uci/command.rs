//! UCI command parsing.

/// A parsed line of UCI input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    SetOption,
    Position {
        /// `None` means `startpos`.
        fen: Option<String>,
        moves: Vec<String>,
    },
    Go {
        wtime: Option<u64>,
        btime: Option<u64>,
        winc: Option<u64>,
        binc: Option<u64>,
        movetime: Option<u64>,
    },
    Stop,
    Display,
    Quit,
}

/// Parse one input line. Returns `None` for empty or unknown input.
#[must_use]
pub fn parse_command(line: &str) -> Option<UciCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&first, rest) = tokens.split_first()?;

    match first {
        "uci" => Some(UciCommand::Uci),
        "isready" => Some(UciCommand::IsReady),
        "ucinewgame" => Some(UciCommand::UciNewGame),
        "setoption" => Some(UciCommand::SetOption),
        "stop" => Some(UciCommand::Stop),
        "d" | "display" => Some(UciCommand::Display),
        "quit" => Some(UciCommand::Quit),
        "position" => parse_position(rest),
        "go" => Some(parse_go(rest)),
        _ => None,
    }
}

fn parse_position(tokens: &[&str]) -> Option<UciCommand> {
    let mut iter = tokens.iter().peekable();
    let fen = match iter.next()? {
        &"startpos" => None,
        &"fen" => {
            // Everything up to `moves` belongs to the FEN; the castling,
            // en-passant and clock fields arrive as separate tokens.
            let mut fen_tokens = Vec::new();
            while let Some(&&tok) = iter.peek() {
                if tok == "moves" {
                    break;
                }
                fen_tokens.push(tok);
                let _ = iter.next();
            }
            Some(fen_tokens.join(" "))
        }
        _ => return None,
    };

    let mut moves = Vec::new();
    if let Some(&&"moves") = iter.peek() {
        let _ = iter.next();
        moves.extend(iter.map(|t| (*t).to_string()));
    }

    Some(UciCommand::Position { fen, moves })
}

fn parse_go(tokens: &[&str]) -> UciCommand {
    let mut wtime = None;
    let mut btime = None;
    let mut winc = None;
    let mut binc = None;
    let mut movetime = None;

    let mut iter = tokens.iter();
    while let Some(&key) = iter.next() {
        let value = iter.clone().next().and_then(|v| v.parse::<u64>().ok());
        match key {
            "wtime" => wtime = value,
            "btime" => btime = value,
            "winc" => winc = value,
            "binc" => binc = value,
            "movetime" => movetime = value,
            _ => continue,
        }
        let _ = iter.next();
    }

    UciCommand::Go {
        wtime,
        btime,
        winc,
        binc,
        movetime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_command("uci"), Some(UciCommand::Uci));
        assert_eq!(parse_command("isready"), Some(UciCommand::IsReady));
        assert_eq!(parse_command("ucinewgame"), Some(UciCommand::UciNewGame));
        assert_eq!(parse_command("stop"), Some(UciCommand::Stop));
        assert_eq!(parse_command("quit"), Some(UciCommand::Quit));
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("flip"), None);
    }

    #[test]
    fn test_position_startpos() {
        let cmd = parse_command("position startpos").unwrap();
        assert_eq!(
            cmd,
            UciCommand::Position {
                fen: None,
                moves: vec![],
            }
        );
    }

    #[test]
    fn test_position_startpos_with_moves() {
        let cmd = parse_command("position startpos moves e2e4 e7e5 g1f3").unwrap();
        let UciCommand::Position { fen, moves } = cmd else {
            panic!("expected position command");
        };
        assert!(fen.is_none());
        assert_eq!(moves, vec!["e2e4", "e7e5", "g1f3"]);
    }

    #[test]
    fn test_position_fen_with_multi_token_tail() {
        let cmd = parse_command(
            "position fen r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 4 11 moves e1g1",
        )
        .unwrap();
        let UciCommand::Position { fen, moves } = cmd else {
            panic!("expected position command");
        };
        assert_eq!(fen.as_deref(), Some("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 4 11"));
        assert_eq!(moves, vec!["e1g1"]);
    }

    #[test]
    fn test_go_fields() {
        let cmd = parse_command("go wtime 300000 btime 295000 winc 2000 binc 2000").unwrap();
        assert_eq!(
            cmd,
            UciCommand::Go {
                wtime: Some(300_000),
                btime: Some(295_000),
                winc: Some(2000),
                binc: Some(2000),
                movetime: None,
            }
        );
    }

    #[test]
    fn test_go_movetime() {
        let cmd = parse_command("go movetime 5000").unwrap();
        let UciCommand::Go { movetime, .. } = cmd else {
            panic!("expected go command");
        };
        assert_eq!(movetime, Some(5000));
    }

    #[test]
    fn test_go_ignores_unknown_fields() {
        let cmd = parse_command("go infinite wtime 1000").unwrap();
        let UciCommand::Go { wtime, .. } = cmd else {
            panic!("expected go command");
        };
        assert_eq!(wtime, Some(1000));
    }
}
