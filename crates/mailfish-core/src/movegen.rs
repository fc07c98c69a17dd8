//! Pseudo-legal move generation by ray casting over the padded board.
//!
//! Moves are generated for the side to move without checking whether the
//! mover's own king is left attacked. Leaving the king en prise is
//! punished by search instead: the reply that captures it scores as a win.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;
use crate::square::{Direction, E, N, S, Square, W};

/// Capacity of a [`MoveList`]. Pseudo-legal move counts in reachable
/// positions stay well below this.
const MAX_MOVES: usize = 320;

const PAWN_DIRS: &[Direction] = &[N, N + N, N + W, N + E];
const KNIGHT_DIRS: &[Direction] = &[
    N + N + E,
    E + N + E,
    E + S + E,
    S + S + E,
    S + S + W,
    W + S + W,
    W + N + W,
    N + N + W,
];
const BISHOP_DIRS: &[Direction] = &[N + E, S + E, S + W, N + W];
const ROOK_DIRS: &[Direction] = &[N, E, S, W];
const ROYAL_DIRS: &[Direction] = &[N, E, S, W, N + E, S + E, S + W, N + W];

/// Step directions for each piece kind.
const fn directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Pawn => PAWN_DIRS,
        PieceKind::Knight => KNIGHT_DIRS,
        PieceKind::Bishop => BISHOP_DIRS,
        PieceKind::Rook => ROOK_DIRS,
        PieceKind::Queen | PieceKind::King => ROYAL_DIRS,
    }
}

/// Stack-allocated buffer for generated moves.
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::new(Square::A1, Square::A1); MAX_MOVES],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        assert!((self.len as usize) < MAX_MOVES, "move list overflow");
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Mutable view, used to reorder moves before searching them.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len as usize]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Return `true` if `mv` was generated.
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl Position {
    /// Generate all pseudo-legal moves for the side to move.
    ///
    /// Castling is emitted while scanning a rook's ray toward its own king.
    /// Whether the king is in check, or crosses an attacked square, is not
    /// tested here: the king-passant square lets the opponent "capture" the
    /// king on its transit square on the next ply.
    pub fn moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let board = &self.board;
        let own_king = Piece::own(PieceKind::King);
        let rights = self.castling(Side::Own);

        for (source, piece) in board.iter() {
            let Piece::Occupied(kind, Side::Own) = piece else {
                continue;
            };

            for &dir in directions(kind) {
                let mut dest = source.shift(dir);
                loop {
                    let target = board[dest];
                    if target.is_off_board() || target.ours() {
                        break;
                    }

                    if kind == PieceKind::Pawn {
                        if (dir == N || dir == N + N) && !target.is_empty() {
                            break;
                        }
                        if dir == N + N
                            && (source < Square::A1.shift(N) || !board[source.shift(N)].is_empty())
                        {
                            break;
                        }
                        if (dir == N + W || dir == N + E)
                            && target.is_empty()
                            && !self.is_passant_target(dest)
                        {
                            break;
                        }
                    }

                    moves.push(Move::new(source, dest));

                    if !kind.is_slider() || target.is_enemy() {
                        break;
                    }

                    if source == Square::A1
                        && board[dest.shift(E)] == own_king
                        && rights.has(CastleSide::West)
                    {
                        moves.push(Move::new(dest.shift(E), dest.shift(W)));
                    }
                    if source == Square::H1
                        && board[dest.shift(W)] == own_king
                        && rights.has(CastleSide::East)
                    {
                        moves.push(Move::new(dest.shift(W), dest.shift(E)));
                    }

                    dest = dest.shift(dir);
                }
            }
        }

        moves
    }
}
