//! Squares of the padded 10x12 mailbox board.
//!
//! The 8x8 playing area sits at rows 2..=9 and columns 1..=8 of a 120-cell
//! array. Row 2 is the far rank (rank 8 when White is to move) and row 9 the
//! near rank. Every other cell is an off-board sentinel, so stepping any
//! piece offset from a playing square always lands inside the array.

use std::fmt;

/// Number of cells in the padded board array.
pub const BOARD_CELLS: usize = 120;

/// Signed offset between two squares of the padded board.
pub type Direction = i8;

/// One rank toward the opponent.
pub const N: Direction = -10;
/// One file toward the H side.
pub const E: Direction = 1;
/// One rank toward the mover.
pub const S: Direction = 10;
/// One file toward the A side.
pub const W: Direction = -1;

/// An index into the 120-cell board array.
///
/// Squares are always relative to the orientation of the board they index:
/// after a [`flip`](Square::flip) the same real-world square has a
/// different index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Home corner of the west rook.
    pub const A1: Square = Square(91);
    /// Home corner of the east rook.
    pub const H1: Square = Square(98);
    /// Far-side west corner; capturing into it strips the opponent's east castle.
    pub const A8: Square = Square(21);
    /// Far-side east corner; capturing into it strips the opponent's west castle.
    pub const H8: Square = Square(28);

    /// Create a square from an array index, returning `None` outside the array.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if (index as usize) < BOARD_CELLS {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a playing square from zero-based file (0 = a) and rank (0 = rank 1).
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square((9 - rank) * 10 + file + 1))
        } else {
            None
        }
    }

    /// Parse an algebraic square ("e4") in the White-to-move orientation.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Square::new(file - b'a', rank - b'1')
    }

    /// Return the array index (0..120).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return `true` if this square lies inside the 8x8 playing area.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        let row = self.0 / 10;
        let col = self.0 % 10;
        row >= 2 && row <= 9 && col >= 1 && col <= 8
    }

    /// Return `(file, rank)` for playing squares, zero-based.
    #[inline]
    pub const fn coords(self) -> Option<(u8, u8)> {
        if self.is_on_board() {
            Some((self.0 % 10 - 1, 9 - self.0 / 10))
        } else {
            None
        }
    }

    /// Return `true` if the square is on the far rank, where pawns promote.
    #[inline]
    pub const fn is_promotion_rank(self) -> bool {
        self.0 >= Square::A8.0 && self.0 <= Square::H8.0
    }

    /// Mirror the square the same way [`Board::flip`](crate::Board::flip) mirrors cells.
    #[inline]
    pub const fn flip(self) -> Square {
        Square(BOARD_CELLS as u8 - 1 - self.0)
    }

    /// Step from this square by `dir`.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the result stays inside the array, which always
    /// holds when `self` is a playing square.
    #[inline]
    pub const fn shift(self, dir: Direction) -> Square {
        let target = self.0 as i16 + dir as i16;
        debug_assert!(target >= 0 && target < BOARD_CELLS as i16);
        Square(target as u8)
    }

    /// Square halfway between two squares on the same rank.
    #[inline]
    pub const fn midpoint(self, other: Square) -> Square {
        Square(((self.0 as u16 + other.0 as u16) / 2) as u8)
    }

    /// Absolute index distance between two squares.
    #[inline]
    pub const fn distance(self, other: Square) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// Iterate over the 64 playing squares in array order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_CELLS as u8)
            .map(Square)
            .filter(|sq| sq.is_on_board())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coords() {
            Some((file, rank)) => write!(f, "{}{}", (b'a' + file) as char, (b'1' + rank) as char),
            None => write!(f, "#{}", self.0),
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
