//! Move text for the game history.
//!
//! Short algebraic style: piece letter (none for pawns), origin file or rank
//! when another piece of the same kind could also reach the square, `x` for
//! captures, the destination, then `+` or `#`. Examples: "e4", "Nf3",
//! "exd5", "Rad1", "Qh4#".
//!
//! # Examples
//! ```
//! use chess_rules::board::{Board, Move};
//!
//! let board = Board::new();
//! let mv = Move::new("g1".parse().unwrap(), "f3".parse().unwrap());
//! assert_eq!(board.move_to_text(mv), "Nf3");
//! ```

use super::{Board, GameStatus, Move, PieceKind};

impl Board {
    /// Format a move played from the current position, including the check
    /// or mate marker. The move is assumed to be legal.
    #[must_use]
    pub fn move_to_text(&self, mv: Move) -> String {
        let mut text = self.move_text_without_suffix(mv);
        let mut after = self.clone();
        after.placement.relocate(mv.from, mv.to);
        after.side_to_move = self.side_to_move.opponent();
        push_status_suffix(&mut text, after.status());
        text
    }

    pub(crate) fn move_text_without_suffix(&self, mv: Move) -> String {
        let mut text = String::new();
        let Some(piece) = self.piece_at(mv.from) else {
            return mv.to_string();
        };
        let is_capture = self.piece_at(mv.to).is_some();

        if piece.kind == PieceKind::Pawn {
            if is_capture {
                text.push(mv.from.file_char());
            }
        } else {
            text.push(piece.kind.letter());
            let (needs_file, needs_rank) = self.needs_disambiguation(mv);
            if needs_file {
                text.push(mv.from.file_char());
            }
            if needs_rank {
                text.push(mv.from.rank_char());
            }
        }

        if is_capture {
            text.push('x');
        }
        text.push_str(&mv.to.to_string());
        text
    }

    /// Determine if disambiguation is needed for a piece move.
    /// Returns (`needs_file`, `needs_rank`).
    fn needs_disambiguation(&self, mv: Move) -> (bool, bool) {
        let Some(piece) = self.piece_at(mv.from) else {
            return (false, false);
        };
        let rivals: Vec<_> = self
            .placement
            .squares_of(piece.color)
            .filter(|&(sq, other)| {
                sq != mv.from
                    && other.kind == piece.kind
                    && self.placement.legal_targets(sq).contains(&mv.to)
            })
            .map(|(sq, _)| sq)
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|sq| sq.file() == mv.from.file());
        let same_rank = rivals.iter().any(|sq| sq.rank() == mv.from.rank());

        match (same_file, same_rank) {
            (false, _) => (true, false),    // File disambiguates
            (true, false) => (false, true), // Rank disambiguates
            (true, true) => (true, true),   // Need both
        }
    }
}

pub(crate) fn push_status_suffix(text: &mut String, status: GameStatus) {
    match status {
        GameStatus::CheckMate { .. } => text.push('#'),
        GameStatus::Check => text.push('+'),
        GameStatus::Ongoing | GameStatus::Stalemate => {}
    }
}
