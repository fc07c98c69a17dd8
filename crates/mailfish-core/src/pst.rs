//! Piece-square tables with material folded in, and full-board scoring.
//!
//! The 8x8 tables are written far rank first (index 0 = a8, index 63 = h1)
//! from the side to move's point of view, then padded to the 120-cell board
//! layout at compile time with the piece value added to every playing cell.

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::{BOARD_CELLS, Square};

#[rustfmt::skip]
const PAWN: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
     78,  83,  86,  73, 102,  82,  85,  90,
      7,  29,  21,  44,  40,  31,  44,   7,
    -17,  16,  -2,  15,  14,   0,  15, -13,
    -26,   3,  10,   9,   6,   1,   0, -23,
    -22,   9,   5, -11, -10,  -2,   3, -19,
    -31,   8,  -7, -37, -36, -14,   3, -31,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
    -66, -53, -75, -75, -10, -55, -58, -70,
     -3,  -6, 100, -36,   4,  62,  -4, -14,
     10,  67,   1,  74,  73,  27,  62,  -2,
     24,  24,  45,  37,  33,  41,  25,  17,
     -1,   5,  31,  21,  22,  35,   2,   0,
    -18,  10,  13,  22,  18,  15,  11, -14,
    -23, -15,   2,   0,   2,   0, -23, -20,
    -74, -23, -26, -24, -19, -35, -22, -69,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
    -59, -78, -82, -76, -23,-107, -37, -50,
    -11,  20,  35, -42, -39,  31,   2, -22,
     -9,  39, -32,  41,  52, -10,  28, -14,
     25,  17,  20,  34,  26,  25,  15,  10,
     13,  10,  17,  23,  17,  16,   0,   7,
     14,  25,  24,  15,   8,  25,  20,  15,
     19,  20,  11,   6,   7,   6,  20,  16,
     -7,   2, -15, -12, -14, -15, -10, -10,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
     35,  29,  33,   4,  37,  33,  56,  50,
     55,  29,  56,  67,  55,  62,  34,  60,
     19,  35,  28,  33,  45,  27,  25,  15,
      0,   5,  16,  13,  18,  -4,  -9,  -6,
    -28, -35, -16, -21, -13, -29, -46, -30,
    -42, -28, -42, -25, -25, -35, -26, -46,
    -53, -38, -31, -26, -29, -43, -44, -53,
    -30, -24, -18,   5,  -2, -18, -31, -32,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
      6,   1,  -8,-104,  69,  24,  88,  26,
     14,  32,  60, -10,  20,  76,  57,  24,
     -2,  43,  32,  60,  72,  63,  43,   2,
      1, -16,  22,  17,  25,  20, -13,  -6,
    -14, -15,  -2,  -5,  -1, -10, -20, -22,
    -30,  -6, -13, -11, -16, -11, -16, -27,
    -36, -18,   0, -19, -15, -15, -21, -38,
    -39, -30, -31, -13, -31, -36, -34, -42,
];

/// King table. Castled corners on the near rank score well; wandering up
/// the board does not.
#[rustfmt::skip]
const KING: [i32; 64] = [
      4,  54,  47, -99, -99,  60,  83, -62,
    -32,  10,  55,  56,  56,  55,  10,   3,
    -62,  12, -57,  44, -67,  28,  37, -31,
    -55,  50,  11,  -4, -19,  13,   0, -49,
    -55, -43, -52, -28, -51, -47,  -8, -50,
    -47, -42, -43, -79, -64, -32, -29, -32,
     -4,   3, -14, -50, -57, -18,  13,   4,
     17,  30,  -3, -14,   6,  -1,  40,  18,
];

/// Spread an 8x8 table over the padded layout, adding `value` on every
/// playing cell. Sentinel cells stay 0.
const fn pad(table: &[i32; 64], value: i32) -> [i32; BOARD_CELLS] {
    let mut padded = [0; BOARD_CELLS];
    let mut i = 0;
    while i < 64 {
        let row = i / 8;
        let col = i % 8;
        padded[(row + 2) * 10 + col + 1] = table[i] + value;
        i += 1;
    }
    padded
}

/// Padded tables indexed by [`PieceKind::index`].
const PST: [[i32; BOARD_CELLS]; PieceKind::COUNT] = [
    pad(&PAWN, PieceKind::Pawn.value()),
    pad(&KNIGHT, PieceKind::Knight.value()),
    pad(&BISHOP, PieceKind::Bishop.value()),
    pad(&ROOK, PieceKind::Rook.value()),
    pad(&QUEEN, PieceKind::Queen.value()),
    pad(&KING, PieceKind::King.value()),
];

/// Material plus positional value of an own `kind` standing on `sq`.
#[inline]
pub fn pst_value(kind: PieceKind, sq: Square) -> i32 {
    PST[kind.index()][sq.index()]
}

/// Score a board from scratch, from the side to move's point of view.
///
/// Own pieces count at their square; opponent pieces count negatively at the
/// mirrored square, since their tables are oriented for the other side.
pub fn static_score(board: &Board) -> i32 {
    board
        .iter()
        .map(|(sq, piece)| match piece {
            Piece::Occupied(kind, Side::Own) => pst_value(kind, sq),
            Piece::Occupied(kind, Side::Opponent) => -pst_value(kind, sq.flip()),
            _ => 0,
        })
        .sum()
}
