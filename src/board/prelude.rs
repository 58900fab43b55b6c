//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, Color, FenError, GameStatus, Move, MoveError, MoveOutcome, Piece, PieceKind, Square,
    START_FEN,
};
