//! Board representation and game rules.
//!
//! The position record is an immutable value: applying a move produces a
//! fresh `Position`. Full chess rules are supported, including castling,
//! en passant, and promotion.
//!
//! # Example
//! ```
//! use woodpusher::board::Position;
//!
//! let pos = Position::starting();
//! let moves = pos.generate_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod error;
mod fen;
mod geometry;
mod make_move;
mod movegen;
mod position;
mod san;
mod types;
mod zobrist;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SanError, SquareError};
pub use fen::{is_valid_fen, parse_fen, parse_fen_safe, to_fen, STARTING_FEN};
pub use position::{GameStatus, Position};
pub use types::{CastlingRights, Color, Move, MoveKind, Piece, PieceKind, Square};
