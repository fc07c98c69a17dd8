//! Core chess types for mailfish: the padded mailbox board, positions seen
//! from the side to move, pseudo-legal move generation, and copy-make move
//! application with incremental piece-square scoring.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod position;
mod pst;
mod side;
mod square;

pub mod perft;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use game::Game;
pub use movegen::MoveList;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use pst::{pst_value, static_score};
pub use side::Side;
pub use square::{BOARD_CELLS, Direction, E, N, S, Square, W};
