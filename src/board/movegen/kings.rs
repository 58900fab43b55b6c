use super::super::attack_tables::KING_TARGETS;
use super::super::{Color, Placement, Square};

impl Placement {
    pub(crate) fn generate_king_targets(&self, from: Square, color: Color) -> Vec<Square> {
        KING_TARGETS[from.as_index()]
            .iter()
            .copied()
            .filter(|&to| self.get(to).map_or(true, |p| p.color != color))
            .collect()
    }

    /// True if any piece of `attacker` has `square` among its pseudo-legal
    /// destinations. Pawn pushes count, so this is only meaningful for
    /// occupied squares.
    pub(crate) fn is_targeted_by(&self, square: Square, attacker: Color) -> bool {
        self.squares_of(attacker)
            .any(|(from, _)| self.pseudo_legal_targets(from).contains(&square))
    }

    /// A side is in check when any opposing piece could move onto its king.
    /// A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_targeted_by(king_sq, color.opponent()),
            None => false,
        }
    }
}
