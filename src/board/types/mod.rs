//! Core chess types.
//!
//! - `Piece`, `PieceKind` and `Color` - chess pieces and sides
//! - `Square` - bounds-checked board coordinate
//! - `Move` and `MoveOutcome` - move representation and commit result

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveOutcome};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, FILES};
