//! Iterative-deepening search under a node budget.

pub mod control;
pub mod negamax;
pub mod ordering;

use mailfish_core::{Move, Position};
use tracing::debug;

use control::NodeBudget;
use negamax::{MATE_LOWER, MATE_UPPER};

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Move chosen at the deepest completed depth; `None` when the
    /// position has no moves.
    pub best_move: Option<Move>,
    /// Score of the deepest completed depth, from the mover's side.
    pub score: i32,
    /// Total nodes visited during the search.
    pub nodes: u64,
    /// Depth reached.
    pub depth: u8,
}

/// Searcher state: the node counter for the current search.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited since the last search started.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Run iterative deepening within `budget`.
    pub fn search(&mut self, pos: &Position, budget: &NodeBudget) -> SearchResult {
        self.search_with(pos, budget, |_| {})
    }

    /// Run iterative deepening within `budget`.
    ///
    /// Calls `on_iter` with the running result after each completed depth,
    /// allowing the caller to emit UCI `info` lines. Depths run until the
    /// budget is spent, a mate score appears, or the depth cap is reached.
    pub fn search_with<F>(&mut self, pos: &Position, budget: &NodeBudget, mut on_iter: F) -> SearchResult
    where
        F: FnMut(&SearchResult),
    {
        self.nodes = 0;
        let mut result = SearchResult {
            best_move: None,
            score: pos.score(),
            nodes: 0,
            depth: 0,
        };

        for depth in 1..=budget.max_depth() {
            let (score, best_move) = self.bound(pos, MATE_UPPER, i32::from(depth));

            result = SearchResult {
                best_move: best_move.or(result.best_move),
                score,
                nodes: self.nodes,
                depth,
            };
            debug!(depth, score, nodes = self.nodes, best = ?best_move, "depth complete");
            on_iter(&result);

            if budget.exhausted(self.nodes) || score.abs() >= MATE_LOWER {
                break;
            }
        }

        result
    }
}
