//! Fail-soft negamax over pseudo-legal moves.
//!
//! Kings are captured rather than mated: a side whose king has been taken
//! scores at or below `-MATE_LOWER`, and every node above it sees that as a
//! mate score.

use mailfish_core::{Move, PieceKind, Position};

use crate::search::Searcher;
use crate::search::ordering::order_moves;

/// Smallest score that means a king is lost.
pub const MATE_LOWER: i32 = PieceKind::King.value() - 10 * PieceKind::Queen.value();

/// Score bound no real position reaches.
pub const MATE_UPPER: i32 = PieceKind::King.value() + 10 * PieceKind::Queen.value();

/// Iterative-deepening cap.
pub const MAX_DEPTH: u8 = 99;

impl Searcher {
    /// Search `pos` to `depth` plies and return a fail-soft score with the
    /// move that produced it.
    ///
    /// The node cuts off as soon as a move reaches `gamma`. A returned
    /// score below the caller's window is still the best score seen, not
    /// a clamped bound. Each call counts one node. A side whose king is
    /// already gone gets `(-MATE_UPPER, None)` without generating moves.
    pub fn bound(&mut self, pos: &Position, gamma: i32, depth: i32) -> (i32, Option<Move>) {
        self.nodes += 1;

        if pos.score() <= -MATE_LOWER {
            return (-MATE_UPPER, None);
        }
        if depth <= 0 {
            return (pos.score(), None);
        }

        let mut moves = pos.moves();
        order_moves(pos, &mut moves);

        let mut best = -MATE_UPPER;
        let mut best_move = None;
        for &mv in &moves {
            let child = pos.make_move(mv);
            let (child_score, _) = self.bound(&child, -best, depth - 1);
            let score = -child_score;

            if score > best || best_move.is_none() {
                best = score;
                best_move = Some(mv);
            }
            if best >= gamma {
                break;
            }
        }

        (best, best_move)
    }
}
