use super::super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Color, Placement, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Placement {
    /// Walk each ray until the edge, stopping before a friendly piece and on
    /// the first enemy piece.
    pub(crate) fn generate_slider_targets(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> Vec<Square> {
        let mut targets = Vec::new();
        for &(dr, df) in slider.directions() {
            let mut current = from;
            while let Some(next) = current.offset(dr, df) {
                match self.get(next) {
                    None => targets.push(next),
                    Some(piece) => {
                        if piece.color != color {
                            targets.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        targets
    }
}
