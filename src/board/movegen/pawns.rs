use super::super::{Color, Placement, Square};

impl Placement {
    /// Single and double pushes onto empty squares plus diagonal captures.
    /// Promotion and en passant are not generated.
    pub(crate) fn generate_pawn_targets(&self, from: Square, color: Color) -> Vec<Square> {
        let mut targets = Vec::new();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                targets.push(forward);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            targets.push(double);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(target) = from.offset(dir, df) {
                if self.get(target).is_some_and(|p| p.color != color) {
                    targets.push(target);
                }
            }
        }

        targets
    }
}
