//! A move as an ordered pair of squares.

use std::fmt;

use crate::square::Square;

/// A move from one square to another, in the mover's board orientation.
///
/// Captures, promotions and castling are not tagged: they are re-derived
/// from the board when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
}

impl Move {
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move { source, dest }
    }

    /// The square the piece leaves.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// The square the piece lands on.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// The same move expressed in the opponent's orientation.
    #[inline]
    pub const fn flip(self) -> Move {
        Move {
            source: self.source.flip(),
            dest: self.dest.flip(),
        }
    }
}

/// Coordinate notation relative to the board the move belongs to.
/// Use [`Game::move_to_uci`](crate::Game::move_to_uci) for real-world squares.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Move;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn accessors_and_display() {
        let mv = Move::new(sq("e2"), sq("e4"));
        assert_eq!(mv.source(), sq("e2"));
        assert_eq!(mv.dest(), sq("e4"));
        assert_eq!(format!("{mv}"), "e2e4");
        assert_eq!(format!("{mv:?}"), "Move(e2e4)");
    }

    #[test]
    fn flip_mirrors_both_squares() {
        let mv = Move::new(sq("e2"), sq("e4"));
        assert_eq!(mv.flip(), Move::new(sq("d7"), sq("d5")));
        assert_eq!(mv.flip().flip(), mv);
    }

    #[test]
    fn equality_and_hash() {
        let a = Move::new(sq("g1"), sq("f3"));
        let b = Move::new(sq("g1"), sq("f3"));
        let c = Move::new(sq("b1"), sq("c3"));
        let set: HashSet<Move> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
