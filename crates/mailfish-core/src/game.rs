//! A position tied to the real-world side to move and move counters.
//!
//! [`Position`] only knows "us" and "them". `Game` remembers which color
//! "us" is, which is all that is needed to translate squares and moves
//! to and from standard notation.

use tracing::trace;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

/// A position plus the real-world color to move and the FEN move counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    position: Position,
    side_to_move: Color,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Game {
    /// Wrap a position whose own pieces belong to `side_to_move`.
    pub fn new(position: Position, side_to_move: Color) -> Game {
        Game {
            position,
            side_to_move,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub(crate) fn with_counters(mut self, halfmove_clock: u16, fullmove_number: u16) -> Game {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
        self
    }

    /// The standard starting position, White to move.
    pub fn starting_position() -> Game {
        Game::new(Position::starting_position(), Color::White)
    }

    /// The position from the side to move's point of view.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// The board oriented for White: White's pieces are `Own` and rank 1 is
    /// the near rank.
    pub fn white_board(&self) -> Board {
        match self.side_to_move {
            Color::White => self.position.board,
            Color::Black => self.position.board.flip(),
        }
    }

    /// Castling rights of `color`.
    pub fn castling(&self, color: Color) -> CastleRights {
        if color == self.side_to_move {
            self.position.castling(Side::Own)
        } else {
            self.position.castling(Side::Opponent)
        }
    }

    /// The en-passant target in real-world coordinates.
    pub fn en_passant(&self) -> Option<Square> {
        self.position.en_passant.map(|sq| self.to_real(sq))
    }

    /// Apply a move of the side to move and advance color and counters.
    pub fn play(&self, mv: Move) -> Game {
        let board = &self.position.board;
        let is_pawn = board[mv.source()].kind() == Some(PieceKind::Pawn);
        let is_capture = board[mv.dest()].is_enemy();
        trace!(mv = %self.move_to_uci(mv), "playing move");

        Game {
            position: self.position.make_move(mv),
            side_to_move: !self.side_to_move,
            halfmove_clock: if is_pawn || is_capture { 0 } else { self.halfmove_clock.saturating_add(1) },
            fullmove_number: match self.side_to_move {
                Color::White => self.fullmove_number,
                Color::Black => self.fullmove_number.saturating_add(1),
            },
        }
    }

    /// Render a move of the side to move in coordinate notation ("e2e4"),
    /// appending `q` for promotions.
    pub fn move_to_uci(&self, mv: Move) -> String {
        let source = self.to_real(mv.source());
        let dest = self.to_real(mv.dest());
        if self.is_promotion(mv) {
            format!("{source}{dest}q")
        } else {
            format!("{source}{dest}")
        }
    }

    /// Parse coordinate notation into one of the generated moves.
    ///
    /// A promotion suffix is optional; when present it must be `q`, the
    /// only piece pawns promote to. Returns `None` if the text is malformed
    /// or the move is not generated in this position.
    pub fn parse_uci_move(&self, text: &str) -> Option<Move> {
        let source = Square::from_algebraic(text.get(0..2)?)?;
        let dest = Square::from_algebraic(text.get(2..4)?)?;
        let suffix = text.get(4..)?;
        let mv = Move::new(self.to_real(source), self.to_real(dest));

        match suffix {
            "" => {}
            "q" if self.is_promotion(mv) => {}
            _ => return None,
        }

        self.position.moves().contains(mv).then_some(mv)
    }

    fn is_promotion(&self, mv: Move) -> bool {
        self.position.board[mv.source()].kind() == Some(PieceKind::Pawn) && mv.dest().is_promotion_rank()
    }

    /// Convert between the position's orientation and White's. The
    /// conversion is its own inverse.
    fn to_real(&self, sq: Square) -> Square {
        match self.side_to_move {
            Color::White => sq,
            Color::Black => sq.flip(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::starting_position()
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::castle_rights::CastleSide;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn play_all(game: Game, moves: &[&str]) -> Game {
        moves.iter().fold(game, |g, text| {
            let mv = g.parse_uci_move(text).unwrap_or_else(|| panic!("{text} not generated"));
            g.play(mv)
        })
    }

    #[test]
    fn uci_roundtrip_for_both_colors() {
        let game = Game::starting_position();
        let mv = game.parse_uci_move("e2e4").unwrap();
        assert_eq!(game.move_to_uci(mv), "e2e4");

        let game = game.play(mv);
        assert_eq!(game.side_to_move(), Color::Black);
        let reply = game.parse_uci_move("e7e5").unwrap();
        assert_eq!(game.move_to_uci(reply), "e7e5");
        assert_eq!(reply.source(), sq("e7").flip());
    }

    #[test]
    fn every_generated_move_roundtrips() {
        let game = play_all(Game::starting_position(), &["e2e4", "d7d5"]);
        for &mv in &game.position().moves() {
            let text = game.move_to_uci(mv);
            assert_eq!(game.parse_uci_move(&text), Some(mv), "roundtrip failed for {text}");
        }
    }

    #[test]
    fn rejects_unknown_or_malformed_moves() {
        let game = Game::starting_position();
        assert_eq!(game.parse_uci_move("e2e5"), None);
        assert_eq!(game.parse_uci_move("e7e5"), None);
        assert_eq!(game.parse_uci_move("e2"), None);
        assert_eq!(game.parse_uci_move("e2e4q"), None);
        assert_eq!(game.parse_uci_move("zz99"), None);
        assert_eq!(game.parse_uci_move("é2e4"), None);
    }

    #[test]
    fn counters_advance() {
        let game = play_all(Game::starting_position(), &["g1f3", "g8f6", "b1c3"]);
        assert_eq!(game.halfmove_clock(), 3);
        assert_eq!(game.fullmove_number(), 2);
        let game = play_all(game, &["e7e5"]);
        assert_eq!(game.halfmove_clock(), 0);
        assert_eq!(game.fullmove_number(), 3);
    }

    #[test]
    fn white_board_is_stable_across_turns() {
        let game = play_all(Game::starting_position(), &["e2e4"]);
        let board = game.white_board();
        assert_eq!(board[sq("e4")], Piece::own(PieceKind::Pawn));
        assert_eq!(board[sq("e7")], Piece::opponent(PieceKind::Pawn));
        assert_eq!(game.en_passant(), Some(sq("e3")));
    }

    #[test]
    fn black_castles_king_side() {
        let game = play_all(
            Game::starting_position(),
            &["e2e4", "e7e5", "g1f3", "g8f6", "f1c4", "f8c5", "e1g1", "e8g8"],
        );
        let board = game.white_board();
        assert_eq!(board[sq("g1")], Piece::own(PieceKind::King));
        assert_eq!(board[sq("f1")], Piece::own(PieceKind::Rook));
        assert_eq!(board[sq("g8")], Piece::opponent(PieceKind::King));
        assert_eq!(board[sq("f8")], Piece::opponent(PieceKind::Rook));
        assert_eq!(board[sq("h8")], Piece::Empty);
        assert!(game.castling(Color::White).is_empty());
        assert!(game.castling(Color::Black).is_empty());
    }

    #[test]
    fn rook_move_revokes_only_its_corner() {
        let game = play_all(Game::starting_position(), &["h2h4", "a7a5", "h1h3", "a8a6"]);
        let white = game.castling(Color::White);
        let black = game.castling(Color::Black);
        // White's H rook is east; Black's A rook is east in Black's rotated view.
        assert!(white.has(CastleSide::West) && !white.has(CastleSide::East));
        assert!(black.has(CastleSide::West) && !black.has(CastleSide::East));
    }

    #[test]
    fn promotion_suffix() {
        let game: Game = "8/4P3/8/8/8/8/k7/7K w - - 0 1".parse().unwrap();
        let mv = game.parse_uci_move("e7e8q").unwrap();
        assert_eq!(game.parse_uci_move("e7e8"), Some(mv));
        assert_eq!(game.move_to_uci(mv), "e7e8q");
        assert_eq!(game.parse_uci_move("e7e8n"), None);
    }
}
