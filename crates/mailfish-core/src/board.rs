//! The padded mailbox board and its symmetry flip.

use std::fmt;
use std::ops::Index;

use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::{BOARD_CELLS, Square};

/// Back-rank layout from the A file to the H file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A 10x12 array of cells with the 8x8 playing area embedded in a border of
/// [`Piece::OffBoard`] sentinels.
///
/// The board is always oriented so the side to move plays "up" (toward
/// row 2) and owns the [`Side::Own`](crate::Side::Own) pieces.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Piece; BOARD_CELLS],
}

impl Board {
    /// A board with every playing square empty.
    pub fn empty() -> Board {
        let mut cells = [Piece::OffBoard; BOARD_CELLS];
        for sq in Square::all() {
            cells[sq.index()] = Piece::Empty;
        }
        Board { cells }
    }

    /// The standard starting array with the side to move on ranks 1 and 2.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            board.place(file, 0, Piece::own(kind));
            board.place(file, 1, Piece::own(PieceKind::Pawn));
            board.place(file, 6, Piece::opponent(PieceKind::Pawn));
            board.place(file, 7, Piece::opponent(kind));
        }
        board
    }

    /// Return the cell at `sq`.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Piece {
        self.cells[sq.index()]
    }

    /// Overwrite a playing square.
    ///
    /// # Panics
    ///
    /// Panics if `sq` is a sentinel cell; sentinels are never written.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Piece) {
        assert!(sq.is_on_board(), "attempt to write sentinel cell {}", sq.index());
        debug_assert!(!piece.is_off_board(), "off-board marker written to {sq}");
        self.cells[sq.index()] = piece;
    }

    fn place(&mut self, file: u8, rank: u8, piece: Piece) {
        if let Some(sq) = Square::new(file, rank) {
            self.set(sq, piece);
        }
    }

    /// Return the board as seen by the opponent: cell order reversed and
    /// every piece handed to the other side.
    pub fn flip(&self) -> Board {
        let mut cells = [Piece::OffBoard; BOARD_CELLS];
        for (i, piece) in self.cells.iter().enumerate() {
            cells[BOARD_CELLS - 1 - i] = piece.flip();
        }
        Board { cells }
    }

    /// Iterate over all 120 cells with their squares, in array order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &piece)| Square::from_index(i as u8).map(|sq| (sq, piece)))
    }

    /// Validate structural invariants of the board.
    ///
    /// Checks:
    /// - Exactly one king per side
    /// - No pawns on the first or eighth rank
    pub fn validate(&self) -> Result<(), BoardError> {
        for side in Side::ALL {
            let king = Piece::Occupied(PieceKind::King, side);
            let count = self.iter().filter(|&(_, piece)| piece == king).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { side, count });
            }
        }

        let pawns_on_back_rank = self.iter().any(|(sq, piece)| {
            piece.kind() == Some(PieceKind::Pawn) && matches!(sq.coords(), Some((_, 0 | 7)))
        });
        if pawns_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Index<Square> for Board {
    type Output = Piece;

    #[inline]
    fn index(&self, sq: Square) -> &Piece {
        &self.cells[sq.index()]
    }
}

/// Eight lines of eight cell characters, far rank first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            for file in 0u8..8 {
                if let Some(sq) = Square::new(file, rank) {
                    write!(f, "{}", self[sq])?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{self})")
    }
}

/// Wrapper for pretty-printing a board as a labelled 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = Square::new(file, rank).map_or('?', |sq| board[sq].to_char());
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;
    use crate::square::{BOARD_CELLS, Square};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn empty_board_has_sentinel_border() {
        let board = Board::empty();
        let sentinels = board.iter().filter(|(_, p)| p.is_off_board()).count();
        let empties = board.iter().filter(|(_, p)| p.is_empty()).count();
        assert_eq!(sentinels, BOARD_CELLS - 64);
        assert_eq!(empties, 64);
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board[sq("e1")], Piece::own(PieceKind::King));
        assert_eq!(board[sq("d1")], Piece::own(PieceKind::Queen));
        assert_eq!(board[sq("a1")], Piece::own(PieceKind::Rook));
        assert_eq!(board[sq("e2")], Piece::own(PieceKind::Pawn));
        assert_eq!(board[sq("e8")], Piece::opponent(PieceKind::King));
        assert_eq!(board[sq("e4")], Piece::Empty);
    }

    #[test]
    fn flip_is_involution() {
        let board = Board::starting_position();
        assert_eq!(board.flip().flip(), board);
        let empty = Board::empty();
        assert_eq!(empty.flip(), empty);
    }

    #[test]
    fn flip_mirrors_and_swaps_sides() {
        let board = Board::starting_position();
        let flipped = board.flip();
        for sq in Square::all() {
            assert_eq!(flipped[sq.flip()], board[sq].flip());
        }
        // The opponent's king on e8 becomes our king, mirrored to d1.
        assert_eq!(flipped[sq("d1")], Piece::own(PieceKind::King));
    }

    #[test]
    fn starting_position_is_symmetric_under_flip_except_royals() {
        let board = Board::starting_position();
        let flipped = board.flip();
        for rank in [0u8, 1, 6, 7] {
            for file in [0u8, 1, 2, 5, 6, 7] {
                let s = Square::new(file, rank).unwrap();
                assert_eq!(board[s].kind(), flipped[s].kind(), "mismatch on {s}");
            }
        }
    }

    #[test]
    #[should_panic]
    fn sentinel_write_panics() {
        let mut board = Board::empty();
        board.set(Square::from_index(0).unwrap(), Piece::Empty);
    }

    #[test]
    fn display_grid() {
        let text = format!("{}", Board::starting_position());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "rnbqkbnr");
        assert_eq!(lines[4], "........");
        assert_eq!(lines[7], "RNBQKBNR");
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Board::starting_position().pretty());
        assert!(output.contains("r n b q k b n r"));
        assert!(output.contains("R N B Q K B N R"));
        assert!(output.contains("a b c d e f g h"));
    }

    #[test]
    fn starting_position_validates() {
        assert_eq!(Board::starting_position().validate(), Ok(()));
        assert_eq!(Board::starting_position().flip().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_missing_or_extra_kings() {
        assert_eq!(
            Board::empty().validate(),
            Err(BoardError::InvalidKingCount { side: Side::Own, count: 0 })
        );

        let mut board = Board::starting_position();
        board.set(sq("e4"), Piece::opponent(PieceKind::King));
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount { side: Side::Opponent, count: 2 })
        );
    }

    #[test]
    fn validate_rejects_pawns_on_back_rank() {
        let mut board = Board::starting_position();
        board.set(sq("b1"), Piece::own(PieceKind::Pawn));
        assert_eq!(board.validate(), Err(BoardError::PawnsOnBackRank));

        let mut board = Board::starting_position();
        board.set(sq("g8"), Piece::opponent(PieceKind::Pawn));
        assert_eq!(board.validate(), Err(BoardError::PawnsOnBackRank));
    }
}
