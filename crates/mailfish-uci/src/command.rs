//! UCI command parsing.

use mailfish_core::Game;

use crate::error::UciError;

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` uses the engine's default budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search this many nodes only.
    pub nodes: Option<u64>,
    /// Search to this depth only.
    pub depth: Option<u32>,
}

/// Options adjustable through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciOption {
    /// Node budget used when `go` does not give one.
    Nodes(u64),
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- set up a game with optional moves applied.
    Position(Game),
    /// `go` -- search with the given limits.
    Go(GoParams),
    /// `setoption` -- change an engine option.
    SetOption(UciOption),
    /// `d` -- print the board and its FEN.
    Display,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (silently ignored, as UCI requires).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "quit" => Ok(Command::Quit),
        "d" => Ok(Command::Display),
        "position" => parse_position(args),
        "go" => parse_go(args),
        "setoption" => parse_setoption(args),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    let Some((&keyword, rest)) = tokens.split_first() else {
        return Err(UciError::MalformedPosition);
    };

    let moves_at = rest.iter().position(|&t| t == "moves").unwrap_or(rest.len());
    let (setup, moves) = rest.split_at(moves_at);

    let mut game = match keyword {
        "startpos" => Game::starting_position(),
        "fen" => {
            let fen = setup.join(" ");
            fen.parse::<Game>()
                .map_err(|source| UciError::InvalidFen { fen, source })?
        }
        _ => return Err(UciError::MalformedPosition),
    };

    // Skip the "moves" keyword itself
    for uci_str in moves.iter().skip(1) {
        let mv = game.parse_uci_move(uci_str).ok_or_else(|| UciError::InvalidMove {
            uci_move: uci_str.to_string(),
        })?;
        game = game.play(mv);
    }

    Ok(Command::Position(game))
}

/// Parse the `go` command arguments.
///
/// Supports `nodes` and `depth`. Clock parameters and other unknown tokens
/// are skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "nodes" => {
                params.nodes = Some(parse_int(tokens.get(i + 1), "nodes")?);
                i += 2;
            }
            "depth" => {
                params.depth = Some(parse_int(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <name> [value <value>]`.
///
/// Options the engine does not know are reported as [`Command::Unknown`].
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    let value_at = tokens.iter().position(|&t| t == "value").unwrap_or(tokens.len());
    let name = tokens[..value_at]
        .iter()
        .skip_while(|&&t| t == "name")
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let value = tokens.get(value_at + 1..).unwrap_or_default().join(" ");

    if name.eq_ignore_ascii_case("nodes") {
        let nodes = value.parse().map_err(|_| UciError::InvalidOptionValue {
            name,
            value: value.clone(),
        })?;
        Ok(Command::SetOption(UciOption::Nodes(nodes)))
    } else {
        Ok(Command::Unknown(format!("setoption {name}")))
    }
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, UciError> {
    let value = token.ok_or_else(|| UciError::MissingGoValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| UciError::InvalidGoValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use mailfish_core::{Color, STARTING_FEN};

    use super::*;

    #[test]
    fn parse_uci() {
        assert!(matches!(parse_command("uci").unwrap(), Command::Uci));
    }

    #[test]
    fn parse_isready() {
        assert!(matches!(parse_command("isready").unwrap(), Command::IsReady));
    }

    #[test]
    fn parse_quit() {
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_display() {
        assert!(matches!(parse_command("d").unwrap(), Command::Display));
    }

    #[test]
    fn parse_ucinewgame() {
        assert!(matches!(
            parse_command("ucinewgame").unwrap(),
            Command::UciNewGame
        ));
    }

    #[test]
    fn parse_position_startpos() {
        match parse_command("position startpos").unwrap() {
            Command::Position(game) => assert_eq!(game, Game::starting_position()),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        match parse_command("position startpos moves e2e4 e7e5").unwrap() {
            Command::Position(game) => {
                assert_eq!(
                    game.to_string(),
                    "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
                );
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_fen() {
        let cmd = parse_command(
            "position fen rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        )
        .unwrap();
        match cmd {
            Command::Position(game) => assert_eq!(game.side_to_move(), Color::Black),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_short_fen_with_moves() {
        let cmd = parse_command("position fen 8/4P3/8/8/8/8/k7/7K w - - moves e7e8q").unwrap();
        match cmd {
            Command::Position(game) => assert_eq!(game.to_string(), "4Q3/8/8/8/8/8/k7/7K b - - 0 1"),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_fen_roundtrip() {
        match parse_command(&format!("position fen {STARTING_FEN}")).unwrap() {
            Command::Position(game) => assert_eq!(game.to_string(), STARTING_FEN),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_go_depth() {
        match parse_command("go depth 6").unwrap() {
            Command::Go(params) => assert_eq!(params.depth, Some(6)),
            other => panic!("expected Go, got {other:?}"),
        }
    }

    #[test]
    fn parse_go_nodes() {
        match parse_command("go nodes 1000000").unwrap() {
            Command::Go(params) => assert_eq!(params.nodes, Some(1_000_000)),
            other => panic!("expected Go, got {other:?}"),
        }
    }

    #[test]
    fn parse_go_bare_defaults() {
        match parse_command("go").unwrap() {
            Command::Go(params) => assert_eq!(params, GoParams::default()),
            other => panic!("expected Go, got {other:?}"),
        }
    }

    #[test]
    fn parse_go_skips_clock_parameters() {
        match parse_command("go wtime 300000 btime 300000 nodes 500").unwrap() {
            Command::Go(params) => {
                assert_eq!(params.nodes, Some(500));
                assert_eq!(params.depth, None);
            }
            other => panic!("expected Go, got {other:?}"),
        }
    }

    #[test]
    fn parse_go_missing_nodes_value() {
        assert!(matches!(
            parse_command("go nodes"),
            Err(UciError::MissingGoValue { .. })
        ));
    }

    #[test]
    fn parse_go_invalid_depth_value() {
        assert!(matches!(
            parse_command("go depth abc"),
            Err(UciError::InvalidGoValue { .. })
        ));
    }

    #[test]
    fn parse_setoption_nodes() {
        match parse_command("setoption name Nodes value 2500").unwrap() {
            Command::SetOption(opt) => assert_eq!(opt, UciOption::Nodes(2500)),
            other => panic!("expected SetOption, got {other:?}"),
        }
    }

    #[test]
    fn parse_setoption_bad_value() {
        assert!(matches!(
            parse_command("setoption name Nodes value lots"),
            Err(UciError::InvalidOptionValue { .. })
        ));
    }

    #[test]
    fn parse_setoption_unknown_name() {
        let cmd = parse_command("setoption name Hash value 16").unwrap();
        assert!(matches!(cmd, Command::Unknown(_)));
    }

    #[test]
    fn parse_unknown_command() {
        let cmd = parse_command("foobar").unwrap();
        assert!(matches!(cmd, Command::Unknown(_)));
    }

    #[test]
    fn parse_empty_line() {
        let cmd = parse_command("").unwrap();
        assert!(matches!(cmd, Command::Unknown(_)));
    }

    #[test]
    fn parse_position_missing_keyword() {
        assert!(matches!(
            parse_command("position"),
            Err(UciError::MalformedPosition)
        ));
    }

    #[test]
    fn parse_position_invalid_fen() {
        assert!(matches!(
            parse_command("position fen invalid"),
            Err(UciError::InvalidFen { .. })
        ));
    }

    #[test]
    fn parse_position_invalid_move() {
        assert!(matches!(
            parse_command("position startpos moves e2e5"),
            Err(UciError::InvalidMove { .. })
        ));
    }
}
