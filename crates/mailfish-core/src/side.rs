//! Relative ownership of a piece: the side to move versus its opponent.

use std::ops::Not;

/// Which side a piece belongs to, relative to the side to move.
///
/// Positions are always stored from the mover's point of view, so the
/// mover's pieces are [`Side::Own`] regardless of their real-world color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Own = 0,
    Opponent = 1,
}

impl Side {
    /// Total number of sides.
    pub const COUNT: usize = 2;

    /// Both sides in index order.
    pub const ALL: [Side; 2] = [Side::Own, Side::Opponent];

    /// Return the index (0 for `Own`, 1 for `Opponent`).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the other side.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::Own => Side::Opponent,
            Side::Opponent => Side::Own,
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}
