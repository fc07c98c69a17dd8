//! Board cell contents: empty, off-board sentinel, or a piece with an owner.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// The content of one board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    /// An empty playing square.
    #[default]
    Empty,
    /// Padding outside the 8x8 playing area.
    OffBoard,
    /// A piece of the given kind belonging to the given side.
    Occupied(PieceKind, Side),
}

impl Piece {
    /// Piece of `kind` belonging to the side to move.
    #[inline]
    pub const fn own(kind: PieceKind) -> Piece {
        Piece::Occupied(kind, Side::Own)
    }

    /// Piece of `kind` belonging to the opponent.
    #[inline]
    pub const fn opponent(kind: PieceKind) -> Piece {
        Piece::Occupied(kind, Side::Opponent)
    }

    /// Return the piece kind, if the cell holds a piece.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Occupied(kind, _) => Some(kind),
            _ => None,
        }
    }

    /// Return the owner, if the cell holds a piece.
    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            Piece::Occupied(_, side) => Some(side),
            _ => None,
        }
    }

    /// Material value for the side to move's pieces, 0 for anything else.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Occupied(kind, Side::Own) => kind.value(),
            _ => 0,
        }
    }

    /// Return `true` if the piece belongs to the side to move.
    #[inline]
    pub const fn ours(self) -> bool {
        self.value() > 0
    }

    /// Return `true` if the piece belongs to the opponent.
    #[inline]
    pub const fn is_enemy(self) -> bool {
        matches!(self, Piece::Occupied(_, Side::Opponent))
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline]
    pub const fn is_off_board(self) -> bool {
        matches!(self, Piece::OffBoard)
    }

    /// Hand the piece to the other side; empty and off-board cells are unchanged.
    #[inline]
    pub const fn flip(self) -> Piece {
        match self {
            Piece::Occupied(kind, side) => Piece::Occupied(kind, side.flip()),
            other => other,
        }
    }

    /// Parse a cell character: uppercase is own, lowercase is opponent,
    /// `.` is empty and a space is off-board.
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            '.' => Some(Piece::Empty),
            ' ' => Some(Piece::OffBoard),
            _ => {
                let kind = PieceKind::from_fen_char(c)?;
                if c.is_ascii_uppercase() {
                    Some(Piece::own(kind))
                } else {
                    Some(Piece::opponent(kind))
                }
            }
        }
    }

    /// Inverse of [`Piece::from_char`].
    pub fn to_char(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::OffBoard => ' ',
            Piece::Occupied(kind, Side::Own) => kind.fen_char().to_ascii_uppercase(),
            Piece::Occupied(kind, Side::Opponent) => kind.fen_char(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Empty => write!(f, "Empty"),
            Piece::OffBoard => write!(f, "OffBoard"),
            Piece::Occupied(kind, Side::Own) => write!(f, "Own({})", kind.fen_char().to_ascii_uppercase()),
            Piece::Occupied(kind, Side::Opponent) => write!(f, "Opponent({})", kind.fen_char()),
        }
    }
}
