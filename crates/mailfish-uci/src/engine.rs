//! Synchronous UCI engine loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use mailfish_core::Game;
use mailfish_engine::{NodeBudget, SearchResult, Searcher};

use crate::command::{Command, GoParams, UciOption, parse_command};
use crate::error::UciError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Node budget for a `go` without `nodes`.
    pub default_nodes: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_nodes: 10_000,
        }
    }
}

/// The UCI engine, holding the current game and searcher.
///
/// Commands are handled one at a time on the calling thread; `go` blocks
/// until the search finishes and its `bestmove` is written.
#[derive(Debug, Default)]
pub struct UciEngine {
    game: Game,
    searcher: Searcher,
    config: EngineConfig,
}

impl UciEngine {
    /// Create a new engine with the starting position.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            game: Game::starting_position(),
            searcher: Searcher::new(),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the UCI loop on stdin/stdout until `quit` or input closes.
    pub fn run(self) -> Result<(), UciError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the UCI loop over any reader/writer pair.
    ///
    /// Malformed commands are logged and skipped; only I/O failures end the
    /// loop with an error.
    pub fn run_with<R: BufRead, W: Write>(mut self, input: R, mut out: W) -> Result<(), UciError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut out)?,
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
            out.flush()?;
        }

        info!("mailfish shutting down");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), UciError> {
        match cmd {
            Command::Uci => self.handle_uci(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::UciNewGame => self.game = Game::starting_position(),
            Command::Position(game) => self.game = game,
            Command::Go(params) => self.handle_go(params, out)?,
            Command::SetOption(opt) => self.handle_setoption(opt),
            Command::Display => self.handle_display(out)?,
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn handle_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name mailfish")?;
        writeln!(out, "id author the mailfish developers")?;
        writeln!(
            out,
            "option name Nodes type spin default {} min 1 max {}",
            EngineConfig::default().default_nodes,
            u32::MAX
        )?;
        writeln!(out, "uciok")
    }

    fn handle_setoption(&mut self, option: UciOption) {
        match option {
            UciOption::Nodes(0) => warn!("Nodes must be positive, keeping {}", self.config.default_nodes),
            UciOption::Nodes(nodes) => self.config.default_nodes = nodes,
        }
    }

    fn handle_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.game.white_board().pretty())?;
        writeln!(out)?;
        writeln!(out, "Fen: {}", self.game)
    }

    fn handle_go<W: Write>(&mut self, params: GoParams, out: &mut W) -> Result<(), UciError> {
        let budget = match self.budget(params) {
            Ok(budget) => budget,
            Err(e) => {
                warn!(error = %e, "rejecting go");
                writeln!(out, "bestmove 0000")?;
                return Ok(());
            }
        };

        let game = self.game;
        let mut written = Ok(());
        let result = self.searcher.search_with(game.position(), &budget, |iter| {
            if written.is_ok() {
                written = write_info(&mut *out, &game, iter);
            }
        });
        written?;

        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", game.move_to_uci(mv))?,
            None => writeln!(out, "bestmove 0000")?,
        }
        Ok(())
    }

    fn budget(&self, params: GoParams) -> Result<NodeBudget, UciError> {
        let budget = NodeBudget::new(params.nodes.unwrap_or(self.config.default_nodes))?;
        match params.depth {
            Some(depth) => Ok(budget.with_max_depth(depth)?),
            None => Ok(budget),
        }
    }
}

fn write_info<W: Write>(out: &mut W, game: &Game, iter: &SearchResult) -> io::Result<()> {
    write!(
        out,
        "info depth {} score cp {} nodes {}",
        iter.depth, iter.score, iter.nodes
    )?;
    if let Some(mv) = iter.best_move {
        write!(out, " pv {}", game.move_to_uci(mv))?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> String {
        run_engine(UciEngine::new(), script)
    }

    fn run_engine(engine: UciEngine, script: &str) -> String {
        let mut out = Vec::new();
        engine.run_with(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn uci_handshake() {
        let out = run("uci\nisready\n");
        assert!(out.starts_with("id name mailfish\n"));
        assert!(out.contains("option name Nodes type spin default 10000"));
        assert!(out.ends_with("uciok\nreadyok\n"));
    }

    #[test]
    fn go_reports_info_then_bestmove() {
        let out = run("position startpos\ngo nodes 200\n");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines.len() >= 2);
        assert!(lines[0].starts_with("info depth 1 score cp "));
        assert!(lines[..lines.len() - 1].iter().all(|l| l.starts_with("info depth ")));
        let last = lines[lines.len() - 1];
        assert!(last.starts_with("bestmove "), "{last}");
    }

    #[test]
    fn go_depth_caps_iterations() {
        let out = run("go depth 2 nodes 1000000\n");
        assert_eq!(out.lines().filter(|l| l.starts_with("info")).count(), 2);
    }

    #[test]
    fn bestmove_is_playable_for_black() {
        let out = run("position startpos moves e2e4\ngo depth 2\n");
        let best = out.lines().last().unwrap().strip_prefix("bestmove ").unwrap();
        let game = Game::starting_position();
        let game = game.play(game.parse_uci_move("e2e4").unwrap());
        assert!(game.parse_uci_move(best).is_some(), "{best} is not a black move");
    }

    #[test]
    fn promotion_is_reported_with_suffix() {
        let out = run("position fen 8/4P3/8/8/8/8/k7/7K w - - 0 1\ngo depth 2\n");
        assert_eq!(out.lines().last(), Some("bestmove e7e8q"));
    }

    #[test]
    fn kingless_position_is_rejected() {
        let out = run("position fen 4k3/8/8/8/8/8/8/4Q3 w - - 0 1\nd\n");
        assert!(out.contains(&format!("Fen: {}", mailfish_core::STARTING_FEN)));
    }

    #[test]
    fn rejected_limits_answer_null_move() {
        let out = run("go nodes 0\ngo depth 0\n");
        assert_eq!(out, "bestmove 0000\nbestmove 0000\n");
    }

    #[test]
    fn setoption_changes_default_budget() {
        let mut engine = UciEngine::new();
        engine.handle_setoption(UciOption::Nodes(321));
        assert_eq!(engine.config().default_nodes, 321);
        engine.handle_setoption(UciOption::Nodes(0));
        assert_eq!(engine.config().default_nodes, 321);
    }

    #[test]
    fn display_prints_board_and_fen() {
        let out = run("position startpos moves e2e4\nd\n");
        assert!(out.contains("   a b c d e f g h"));
        assert!(out.contains("Fen: rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"));
    }

    #[test]
    fn bad_commands_are_skipped() {
        let out = run("position fen nonsense\nfoo\nposition startpos moves e2e5\nisready\n");
        assert_eq!(out, "readyok\n");
    }

    #[test]
    fn quit_stops_reading() {
        let out = run("quit\nisready\n");
        assert!(out.is_empty());
    }

    #[test]
    fn ucinewgame_resets_position() {
        let mut engine = UciEngine::new();
        let mut out = Vec::new();
        engine
            .handle(parse_command("position startpos moves e2e4").unwrap(), &mut out)
            .unwrap();
        assert_ne!(*engine.game(), Game::starting_position());
        engine.handle(Command::UciNewGame, &mut out).unwrap();
        assert_eq!(*engine.game(), Game::starting_position());
    }
}
