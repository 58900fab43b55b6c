use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Placement, Square};

/// Status of the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    CheckMate { winner: Color },
    Stalemate,
}

/// A game position plus the bookkeeping that accumulates while playing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) placement: Placement,
    pub(crate) side_to_move: Color,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<String>,
    pub(crate) captured: [Vec<Piece>; 2],
}

impl Board {
    /// The standard starting position, white to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            for (color, back, pawns) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                if let (Some(piece_sq), Some(pawn_sq)) =
                    (Square::new(back, file), Square::new(pawns, file))
                {
                    board.placement.set(piece_sq, Piece::new(color, kind));
                    board
                        .placement
                        .set(pawn_sq, Piece::new(color, PieceKind::Pawn));
                }
            }
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            placement: Placement::empty(),
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
        }
    }

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.placement.get(square)
    }

    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Move text of every committed move, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Pieces of `color` that have been captured, in capture order.
    #[must_use]
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    #[must_use]
    pub fn king_position(&self, color: Color) -> Option<Square> {
        self.placement.find_king(color)
    }

    /// Squares holding a piece of `color`, from a1 to h8.
    #[must_use]
    pub fn occupied(&self, color: Color) -> Vec<Square> {
        self.placement.squares_of(color).map(|(sq, _)| sq).collect()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        let color = self.side_to_move;
        let in_check = self.is_in_check(color);
        match (in_check, self.has_legal_move(color)) {
            (true, false) => GameStatus::CheckMate {
                winner: color.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = Square::new(rank, file)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or(' ', Piece::to_char);
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_layout() {
        let board = Board::new();
        assert_eq!(board.placement().len(), 32);
        assert_eq!(board.occupied(Color::White).len(), 16);
        assert_eq!(board.occupied(Color::Black).len(), 16);
        assert_eq!(board.king_position(Color::White), "e1".parse().ok());
        assert_eq!(board.king_position(Color::Black), "e8".parse().ok());
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_new_matches_start_fen() {
        assert_eq!(Board::new(), Board::from_fen(crate::board::START_FEN));
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut first = Board::new();
        let second = Board::new();
        first.attempt_move_str("e2", "e4").unwrap();

        assert_eq!(first.history().len(), 1);
        assert!(second.history().is_empty());
        assert_eq!(second.side_to_move(), Color::White);
    }

    #[test]
    fn test_display_grid() {
        let text = Board::new().to_string();
        assert!(text.starts_with("  +---+"));
        assert!(text.contains("8 | r | n | b | q | k | b | n | r |"));
        assert!(text.contains("1 | R | N | B | Q | K | B | N | R |"));
        assert!(text.ends_with("White to move"));
    }

    #[test]
    fn test_status_of_start_position() {
        assert_eq!(Board::new().status(), GameStatus::Ongoing);
    }
}
