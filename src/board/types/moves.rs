//! Move and move outcome types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// A move as a (from, to) square pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// What happened after a move was committed to the board.
///
/// `CheckMate` and `Draw` are terminal: the move stands, but the side now to
/// move has no legal reply.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    /// Ordinary move, opponent not in check.
    Played,
    /// Opponent is in check but has legal replies.
    Check,
    /// Opponent is in check with no legal replies.
    CheckMate { winner: Color },
    /// Opponent is not in check and has no legal replies (stalemate).
    Draw,
}

impl MoveOutcome {
    /// Returns true if the game cannot continue after this move
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, MoveOutcome::CheckMate { .. } | MoveOutcome::Draw)
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Played => write!(f, "played"),
            MoveOutcome::Check => write!(f, "check"),
            MoveOutcome::CheckMate { winner } => write!(f, "checkmate, {winner} wins"),
            MoveOutcome::Draw => write!(f, "draw by stalemate"),
        }
    }
}
