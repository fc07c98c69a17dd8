//! Castling rights for one side.
//!
//! Because the board is rotated half a turn for the opponent, rights are
//! keyed by the rook corner in the mover's orientation rather than by
//! king-side/queen-side: for White the west corner (A1) is the queen side,
//! for Black the west corner is the real H8 and therefore the king side.

use crate::square::Square;

/// Which rook corner to castle toward, in the mover's orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the rook on [`Square::A1`].
    West,
    /// Toward the rook on [`Square::H1`].
    East,
}

impl CastleSide {
    /// Home square of the rook for this side.
    #[inline]
    pub const fn rook_square(self) -> Square {
        match self {
            CastleSide::West => Square::A1,
            CastleSide::East => Square::H1,
        }
    }
}

/// Castling rights of one side: one flag per rook corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights {
    west: bool,
    east: bool,
}

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights { west: false, east: false };
    /// Both castling rights.
    pub const BOTH: CastleRights = CastleRights { west: true, east: true };

    #[inline]
    pub const fn new(west: bool, east: bool) -> CastleRights {
        CastleRights { west, east }
    }

    /// Return `true` if castling toward `side` is still allowed.
    #[inline]
    pub const fn has(self, side: CastleSide) -> bool {
        match side {
            CastleSide::West => self.west,
            CastleSide::East => self.east,
        }
    }

    /// Return these rights with castling toward `side` removed.
    #[inline]
    pub const fn revoke(self, side: CastleSide) -> CastleRights {
        match side {
            CastleSide::West => CastleRights { west: false, east: self.east },
            CastleSide::East => CastleRights { west: self.west, east: false },
        }
    }

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        !self.west && !self.east
    }

    /// Return `true` if every right in `other` is also present in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.west || !other.west) && (self.east || !other.east)
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::square::Square;

    #[test]
    fn revoke_is_one_way() {
        let rights = CastleRights::BOTH.revoke(CastleSide::West);
        assert!(!rights.has(CastleSide::West));
        assert!(rights.has(CastleSide::East));
        assert_eq!(rights.revoke(CastleSide::West), rights);
        assert!(rights.revoke(CastleSide::East).is_empty());
    }

    #[test]
    fn contains() {
        assert!(CastleRights::BOTH.contains(CastleRights::NONE));
        assert!(CastleRights::BOTH.contains(CastleRights::new(true, false)));
        assert!(!CastleRights::new(false, true).contains(CastleRights::new(true, false)));
        assert!(CastleRights::NONE.contains(CastleRights::NONE));
    }

    #[test]
    fn rook_squares() {
        assert_eq!(CastleSide::West.rook_square(), Square::A1);
        assert_eq!(CastleSide::East.rook_square(), Square::H1);
    }

    #[test]
    fn default_is_none() {
        assert_eq!(CastleRights::default(), CastleRights::NONE);
    }
}
