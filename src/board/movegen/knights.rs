use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Color, Placement, Square};

impl Placement {
    pub(crate) fn generate_knight_targets(&self, from: Square, color: Color) -> Vec<Square> {
        KNIGHT_TARGETS[from.as_index()]
            .iter()
            .copied()
            .filter(|&to| self.get(to).map_or(true, |p| p.color != color))
            .collect()
    }
}
