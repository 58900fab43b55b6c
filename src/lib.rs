#[macro_use]
mod logging;

pub mod board;

pub use board::{Board, Color, Move, MoveError, MoveOutcome, Piece, PieceKind, Square};
