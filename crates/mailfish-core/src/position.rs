//! A board plus the game state needed to generate and score moves.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::pst::static_score;
use crate::side::Side;
use crate::square::Square;

/// A position seen from the side to move.
///
/// Positions are plain values: applying a move returns a new position and
/// leaves the old one untouched, so search needs no undo logic. After every
/// move the position is flipped, so the side to move always owns the
/// [`Side::Own`] pieces and `score` is always from its point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    /// Evaluation from the side to move's perspective (higher is better).
    pub(crate) score: i32,
    /// Castling rights, indexed by [`Side::index`].
    pub(crate) castling: [CastleRights; Side::COUNT],
    /// Square a pawn may capture into en passant.
    pub(crate) en_passant: Option<Square>,
    /// Square the opponent's king crossed while castling on the last move.
    pub(crate) king_passant: Option<Square>,
}

impl Position {
    /// Build a position from a board and state flags, scoring it from scratch.
    pub fn new(
        board: Board,
        own_castling: CastleRights,
        opponent_castling: CastleRights,
        en_passant: Option<Square>,
    ) -> Position {
        Position {
            board,
            score: static_score(&board),
            castling: [own_castling, opponent_castling],
            en_passant,
            king_passant: None,
        }
    }

    /// The standard starting position with full castling rights.
    pub fn starting_position() -> Position {
        Position::new(
            Board::starting_position(),
            CastleRights::BOTH,
            CastleRights::BOTH,
            None,
        )
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Evaluation from the side to move's perspective.
    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Castling rights of `side`.
    #[inline]
    pub fn castling(&self, side: Side) -> CastleRights {
        self.castling[side.index()]
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn king_passant(&self) -> Option<Square> {
        self.king_passant
    }

    /// Re-express the position from the opponent's point of view.
    ///
    /// Negates the score, swaps castling rights, mirrors the en-passant and
    /// king-passant squares and flips the board.
    pub fn flip(&self) -> Position {
        Position {
            board: self.board.flip(),
            score: -self.score,
            castling: [self.castling[Side::Opponent.index()], self.castling[Side::Own.index()]],
            en_passant: self.en_passant.map(Square::flip),
            king_passant: self.king_passant.map(Square::flip),
        }
    }

    /// Return `true` if a pawn may step diagonally onto the empty square `sq`:
    /// it is the en-passant target, or within one file of the square a
    /// castling king just crossed.
    #[inline]
    pub(crate) fn is_passant_target(&self, sq: Square) -> bool {
        self.en_passant == Some(sq) || self.near_king_passant(sq)
    }

    #[inline]
    pub(crate) fn near_king_passant(&self, sq: Square) -> bool {
        self.king_passant.is_some_and(|kp| kp.distance(sq) < 2)
    }
}
