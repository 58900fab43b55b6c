//! Error types for chess board operations.

use std::fmt;

use super::{Color, Square};

/// Error type for position string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Position string has too few fields (needs placement and side to move)
    TooFewParts { found: usize },
    /// Position string has more than six fields
    TooManyParts { found: usize },
    /// Invalid piece character in placement field
    InvalidPiece { char: char },
    /// Placement field does not have exactly 8 ranks
    InvalidRankCount { found: usize },
    /// A rank does not describe exactly 8 files
    InvalidRankWidth { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Castling field of a six-field position string is malformed
    InvalidCastling { found: String },
    /// En passant field of a six-field position string is malformed
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a valid number
    InvalidClock { found: String },
    /// A side does not have exactly one king
    InvalidKingCount { color: Color, found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "Position must have at least 2 fields, found {found}")
            }
            FenError::TooManyParts { found } => {
                write!(f, "Position must have at most 6 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in position")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            FenError::InvalidRankWidth { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant field '{found}'")
            }
            FenError::InvalidClock { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
            FenError::InvalidKingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Why a move attempt was rejected.
///
/// A rejected move never changes the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Source square is empty
    NoPieceAtSource { square: Square },
    /// Piece on the source square belongs to the side not on move
    NotYourTurn { color: Color },
    /// Destination is not among the piece's pseudo-legal moves
    IllegalDestination { from: Square, to: Square },
    /// Move would leave the mover's own king in check
    SelfCheck { from: Square, to: Square },
    /// Coordinate notation could not be parsed
    InvalidCoordinate { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtSource { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::NotYourTurn { color } => {
                write!(f, "Not {color}'s turn")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveError::SelfCheck { from, to } => {
                write!(f, "Moving {from} to {to} leaves the king in check")
            }
            MoveError::InvalidCoordinate { notation } => {
                write!(f, "Invalid coordinate '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        let notation = match err {
            SquareError::InvalidNotation { notation } => notation,
            SquareError::RankOutOfBounds { rank } => format!("rank {rank}"),
            SquareError::FileOutOfBounds { file } => format!("file {file}"),
        };
        MoveError::InvalidCoordinate { notation }
    }
}
