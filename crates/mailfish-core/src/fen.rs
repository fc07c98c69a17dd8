//! FEN string parsing and serialization for [`Game`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::color::Color;
use crate::error::{BoardError, FenError};
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;
use crate::square::{E, N, S, Square};

const E1: Square = Square::A1.shift(4 * E);
const E8: Square = Square::A8.shift(4 * E);

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Game {
    type Err = FenError;

    /// Parse a FEN record. The two move counters are optional and default
    /// to `0 1`.
    fn from_str(fen: &str) -> Result<Game, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 4 && fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        // Pieces are placed White-side up: White owns the board until we
        // know who is to move.
        let board = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let (white, black) = parse_castling(fields[2])?;

        let en_passant = match fields[3] {
            "-" => None,
            text => Some(Square::from_algebraic(text).ok_or_else(|| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        };

        let (halfmove_clock, fullmove_number) = if fields.len() == 6 {
            (
                parse_counter(fields[4], "halfmove clock")?,
                parse_counter(fields[5], "fullmove number")?,
            )
        } else {
            (0, 1)
        };

        board.validate()?;
        validate_castling(&board, white, black)?;
        if en_passant.is_some_and(|ep| !is_valid_en_passant(&board, ep, side_to_move)) {
            return Err(FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            });
        }

        let position = Position::new(board, white, black, en_passant);
        let position = match side_to_move {
            Color::White => position,
            Color::Black => position.flip(),
        };

        Ok(Game::new(position, side_to_move).with_counters(halfmove_clock, fullmove_number))
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        // FEN ranks go from 8 to 1 (top to bottom)
        let rank = 7 - rank_index as u8;
        let mut file: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += digit as usize;
                continue;
            }

            let kind = PieceKind::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let piece = if c.is_ascii_uppercase() {
                Piece::own(kind)
            } else {
                Piece::opponent(kind)
            };

            let sq = u8::try_from(file)
                .ok()
                .and_then(|f| Square::new(f, rank))
                .ok_or(FenError::BadRankLength {
                    rank_index,
                    length: file + 1,
                })?;
            board.set(sq, piece);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file,
            });
        }
    }
    Ok(board)
}

/// Returns (white, black) rights, each keyed by corner in its owner's view.
///
/// Black sees the board rotated, so its king-side rook sits on the west
/// corner.
fn parse_castling(field: &str) -> Result<(CastleRights, CastleRights), FenError> {
    let mut white = CastleRights::NONE;
    let mut black = CastleRights::NONE;
    if field == "-" {
        return Ok((white, black));
    }

    for c in field.chars() {
        match c {
            'K' => white = grant(white, CastleSide::East),
            'Q' => white = grant(white, CastleSide::West),
            'k' => black = grant(black, CastleSide::West),
            'q' => black = grant(black, CastleSide::East),
            _ => return Err(FenError::InvalidCastlingChar { character: c }),
        }
    }
    Ok((white, black))
}

fn grant(rights: CastleRights, side: CastleSide) -> CastleRights {
    match side {
        CastleSide::West => CastleRights::new(true, rights.has(CastleSide::East)),
        CastleSide::East => CastleRights::new(rights.has(CastleSide::West), true),
    }
}

/// Every granted right needs the king and that rook still at home. The
/// board is White-side up, so White's pieces are `Own`.
fn validate_castling(board: &Board, white: CastleRights, black: CastleRights) -> Result<(), BoardError> {
    let checks = [
        (white.has(CastleSide::East), 'K', Side::Own, Square::H1),
        (white.has(CastleSide::West), 'Q', Side::Own, Square::A1),
        (black.has(CastleSide::West), 'k', Side::Opponent, Square::H8),
        (black.has(CastleSide::East), 'q', Side::Opponent, Square::A8),
    ];

    for (granted, right, side, rook_home) in checks {
        let king_home = match side {
            Side::Own => E1,
            Side::Opponent => E8,
        };
        let at_home = board[king_home] == Piece::Occupied(PieceKind::King, side)
            && board[rook_home] == Piece::Occupied(PieceKind::Rook, side);
        if granted && !at_home {
            return Err(BoardError::CastlingWithoutPieces { right });
        }
    }
    Ok(())
}

/// The target must be the empty square a pawn of the side that just moved
/// skipped over, with that pawn directly beyond it.
fn is_valid_en_passant(board: &Board, ep: Square, side_to_move: Color) -> bool {
    let (rank, pawn_square, pawn) = match side_to_move {
        Color::White => (5, ep.shift(S), Piece::opponent(PieceKind::Pawn)),
        Color::Black => (2, ep.shift(N), Piece::own(PieceKind::Pawn)),
    };
    matches!(ep.coords(), Some((_, r)) if r == rank) && board[ep].is_empty() && board[pawn_square] == pawn
}

fn parse_counter(text: &str, field: &'static str) -> Result<u16, FenError> {
    text.parse().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    })
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.white_board();

        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                let piece = Square::new(file, rank).map_or(Piece::OffBoard, |sq| board[sq]);
                if piece.is_empty() {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    write!(f, "{empty}")?;
                    empty = 0;
                }
                write!(f, "{}", piece.to_char())?;
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} ", self.side_to_move())?;

        let white = self.castling(Color::White);
        let black = self.castling(Color::Black);
        let mut any = false;
        for (flag, c) in [
            (white.has(CastleSide::East), 'K'),
            (white.has(CastleSide::West), 'Q'),
            (black.has(CastleSide::West), 'k'),
            (black.has(CastleSide::East), 'q'),
        ] {
            if flag {
                write!(f, "{c}")?;
                any = true;
            }
        }
        if !any {
            write!(f, "-")?;
        }

        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }

        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
