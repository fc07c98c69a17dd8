//! Perft (performance test) for move generation correctness verification.
//!
//! Moves are pseudo-legal, so counts beyond depth 3 from the start position
//! diverge from the published legal-move figures.

use crate::game::Game;
use crate::position::Position;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of generated moves without making them.
pub fn perft(pos: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = pos.moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &mv in &moves {
        let child = pos.make_move(mv);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(game: &Game, depth: usize) -> Vec<(String, u64)> {
    let pos = game.position();
    let mut results: Vec<(String, u64)> = pos
        .moves()
        .iter()
        .map(|&mv| {
            let child = pos.make_move(mv);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (game.move_to_uci(mv), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
