//! Chess board representation and move legality.
//!
//! Pieces live in a square-to-piece [`Placement`]; the [`Board`] wraps it
//! with the side to move, move counters, history and captured pieces.
//! Move attempts are checked for turn order, pseudo-legal destination and
//! king safety before they are committed.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, MoveError};
//!
//! let mut board = Board::new();
//! board.attempt_move_str("e2", "e4").unwrap();
//! assert_eq!(
//!     board.attempt_move_str("d2", "d4"),
//!     Err(MoveError::NotYourTurn { color: Color::White })
//! );
//! println!("Black has {} legal moves", board.legal_moves(Color::Black).len());
//! ```

mod attack_tables;
mod error;
mod fen;
mod make_move;
mod movegen;
mod placement;
pub mod prelude;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, SquareError};
pub use fen::START_FEN;
pub use placement::Placement;
pub use state::{Board, GameStatus};
pub use types::{Color, Move, MoveOutcome, Piece, PieceKind, Square, FILES};
