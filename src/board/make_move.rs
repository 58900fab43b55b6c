//! Move validation and commit.
//!
//! A move attempt either commits completely or leaves the board exactly as
//! it was. Checks run in a fixed order: occupied source, side to move,
//! pseudo-legal destination, then king safety on a scratch copy.

use super::error::MoveError;
use super::san::push_status_suffix;
use super::{Board, Color, GameStatus, Move, MoveOutcome, PieceKind, Square};

impl Board {
    /// Validate and play `from` -> `to` for the side to move.
    ///
    /// On success the returned outcome reports check, checkmate or stalemate
    /// of the opponent; the move is committed in every `Ok` case.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::{Board, Color, MoveOutcome};
    ///
    /// let mut board = Board::new();
    /// let outcome = board.attempt_move("e2".parse().unwrap(), "e4".parse().unwrap());
    /// assert_eq!(outcome, Ok(MoveOutcome::Played));
    /// assert_eq!(board.side_to_move(), Color::Black);
    /// ```
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if let Err(err) = self.validate_move(from, to) {
            log_trace!("rejected {}{}: {}", from, to, err);
            return Err(err);
        }
        Ok(self.commit(Move::new(from, to)))
    }

    /// Same as [`Board::attempt_move`] with coordinates in algebraic
    /// notation (`"e2"`, `"E2"`).
    pub fn attempt_move_str(&mut self, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        self.attempt_move(from, to)
    }

    /// Run every legality check without changing the board.
    pub fn validate_move(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;

        if piece.color != self.side_to_move {
            return Err(MoveError::NotYourTurn { color: piece.color });
        }

        if !self.placement.pseudo_legal_targets(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        if self.placement.leaves_king_in_check(from, to) {
            return Err(MoveError::SelfCheck { from, to });
        }

        Ok(())
    }

    fn commit(&mut self, mv: Move) -> MoveOutcome {
        let mover = self.side_to_move;
        let mut text = self.move_text_without_suffix(mv);

        let is_pawn_move = self
            .piece_at(mv.from)
            .is_some_and(|p| p.kind == PieceKind::Pawn);
        let captured = self.placement.relocate(mv.from, mv.to);
        if let Some(piece) = captured {
            self.captured[piece.color.index()].push(piece);
        }

        if is_pawn_move || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = mover.opponent();

        let status = self.status();
        push_status_suffix(&mut text, status);
        log_debug!("{} played {} ({})", mover, text, mv);
        self.history.push(text);

        match status {
            GameStatus::CheckMate { winner } => {
                log_debug!("checkmate, {} wins", winner);
                MoveOutcome::CheckMate { winner }
            }
            GameStatus::Stalemate => {
                log_debug!("stalemate, {} has no legal move", self.side_to_move);
                MoveOutcome::Draw
            }
            GameStatus::Check => MoveOutcome::Check,
            GameStatus::Ongoing => MoveOutcome::Played,
        }
    }
}
