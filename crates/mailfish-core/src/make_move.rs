//! Move application via copy-make, with incremental score updates.

use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::pst::pst_value;
use crate::side::Side;
use crate::square::{N, S, Square};

impl Position {
    /// Score change, from the mover's point of view, caused by `mv`.
    ///
    /// Computed from the piece-square tables of the cells the move touches,
    /// so the successor's score never needs a full-board rescan. Captured
    /// pieces are looked up at the mirrored square because their tables are
    /// oriented for the opponent.
    pub fn value(&self, mv: Move) -> i32 {
        let (source, dest) = (mv.source(), mv.dest());
        let piece = self.board[source];
        debug_assert!(piece.ours(), "{mv:?} does not move an own piece");
        let Some(kind) = piece.kind() else {
            return 0;
        };

        let mut score = pst_value(kind, dest) - pst_value(kind, source);

        if let Piece::Occupied(captured, Side::Opponent) = self.board[dest] {
            score += pst_value(captured, dest.flip());
        }

        // Landing on or beside the square a castling king just crossed
        // counts as capturing that king.
        if self.near_king_passant(dest) {
            score += pst_value(PieceKind::King, dest.flip());
        }

        match kind {
            PieceKind::King if source.distance(dest) == 2 => {
                let corner = castle_side(source, dest).rook_square();
                score += pst_value(PieceKind::Rook, source.midpoint(dest));
                score -= pst_value(PieceKind::Rook, corner);
            }
            PieceKind::Pawn => {
                if dest.is_promotion_rank() {
                    score += pst_value(PieceKind::Queen, dest) - pst_value(PieceKind::Pawn, dest);
                }
                if self.en_passant == Some(dest) {
                    score += pst_value(PieceKind::Pawn, dest.shift(S).flip());
                }
            }
            _ => {}
        }

        score
    }

    /// Apply `mv` and return the resulting position, flipped so it is ready
    /// for the opponent. Copy-make: `self` is not modified.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the source square holds a piece of the side to move.
    pub fn make_move(&self, mv: Move) -> Position {
        let (source, dest) = (mv.source(), mv.dest());
        let piece = self.board[source];
        debug_assert!(piece.ours(), "{mv:?} does not move an own piece");

        let mut next = *self;
        next.en_passant = None;
        next.king_passant = None;
        next.score = self.score + self.value(mv);

        next.board.set(dest, piece);
        next.board.set(source, Piece::Empty);

        let own = Side::Own.index();
        let opponent = Side::Opponent.index();
        if source == Square::A1 {
            next.castling[own] = next.castling[own].revoke(CastleSide::West);
        }
        if source == Square::H1 {
            next.castling[own] = next.castling[own].revoke(CastleSide::East);
        }
        // The far corners are the opponent's rook homes seen through the
        // half-turn rotation: A8 is their east corner, H8 their west.
        if dest == Square::A8 {
            next.castling[opponent] = next.castling[opponent].revoke(CastleSide::East);
        }
        if dest == Square::H8 {
            next.castling[opponent] = next.castling[opponent].revoke(CastleSide::West);
        }

        match piece.kind() {
            Some(PieceKind::King) => {
                next.castling[own] = CastleRights::NONE;
                if source.distance(dest) == 2 {
                    let transit = source.midpoint(dest);
                    let corner = castle_side(source, dest).rook_square();
                    debug_assert_eq!(
                        self.board[corner],
                        Piece::own(PieceKind::Rook),
                        "{mv:?} castles without a rook on {corner}"
                    );
                    next.board.set(corner, Piece::Empty);
                    next.board.set(transit, Piece::own(PieceKind::Rook));
                    next.king_passant = Some(transit);
                }
            }
            Some(PieceKind::Pawn) => {
                if dest.is_promotion_rank() {
                    next.board.set(dest, Piece::own(PieceKind::Queen));
                }
                if source.shift(N + N) == dest {
                    next.en_passant = Some(source.shift(N));
                }
                if self.en_passant == Some(dest) {
                    next.board.set(dest.shift(S), Piece::Empty);
                }
            }
            _ => {}
        }

        next.flip()
    }
}

/// Which rook a two-square king move castles with.
#[inline]
fn castle_side(source: Square, dest: Square) -> CastleSide {
    if dest < source {
        CastleSide::West
    } else {
        CastleSide::East
    }
}
