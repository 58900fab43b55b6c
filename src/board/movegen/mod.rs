mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, Move, Placement, PieceKind, Square};

impl Placement {
    /// Destinations for the piece on `from` before filtering out moves that
    /// leave its own king in check. Empty when `from` is unoccupied.
    #[must_use]
    pub fn pseudo_legal_targets(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.get(from) else {
            return Vec::new();
        };
        let color = piece.color;
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_targets(from, color),
            PieceKind::Knight => self.generate_knight_targets(from, color),
            PieceKind::Bishop => self.generate_slider_targets(from, color, SliderType::Bishop),
            PieceKind::Rook => self.generate_slider_targets(from, color, SliderType::Rook),
            PieceKind::Queen => self.generate_slider_targets(from, color, SliderType::Queen),
            PieceKind::King => self.generate_king_targets(from, color),
        }
    }

    /// Try the move on a scratch copy and report whether the mover's king
    /// ends up in check.
    #[must_use]
    pub fn leaves_king_in_check(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.get(from) else {
            return false;
        };
        let mut scratch = *self;
        scratch.relocate(from, to);
        scratch.is_in_check(piece.color)
    }

    pub(crate) fn pseudo_legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.squares_of(color)
            .flat_map(|(from, _)| {
                self.pseudo_legal_targets(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    pub(crate) fn legal_targets(&self, from: Square) -> Vec<Square> {
        self.pseudo_legal_targets(from)
            .into_iter()
            .filter(|&to| !self.leaves_king_in_check(from, to))
            .collect()
    }

    pub(crate) fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.pseudo_legal_moves_for(color)
            .into_iter()
            .filter(|m| !self.leaves_king_in_check(m.from, m.to))
            .collect()
    }

    pub(crate) fn has_legal_move(&self, color: Color) -> bool {
        self.squares_of(color).any(|(from, _)| {
            self.pseudo_legal_targets(from)
                .into_iter()
                .any(|to| !self.leaves_king_in_check(from, to))
        })
    }

    fn perft(&self, color: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            let mut next = *self;
            next.relocate(m.from, m.to);
            nodes += next.perft(color.opponent(), depth - 1);
        }
        nodes
    }
}

impl Board {
    /// Pseudo-legal destinations of the piece on `from`.
    ///
    /// Sliding pieces follow their rays, knights and kings use fixed offsets
    /// and pawns push forward or capture diagonally. Moves that would leave
    /// the mover's king in check are still included.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> Vec<Square> {
        self.placement.pseudo_legal_targets(from)
    }

    /// Every pseudo-legal move of `color`, regardless of whose turn it is.
    #[must_use]
    pub fn all_pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        self.placement.pseudo_legal_moves_for(color)
    }

    /// Every legal move of `color`, regardless of whose turn it is.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.placement.legal_moves(color)
    }

    /// Legal destinations of the piece on `from`.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> Vec<Square> {
        self.placement.legal_targets(from)
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.placement.is_in_check(color)
    }

    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.placement.has_legal_move(color)
    }

    /// Side to move is in check and has no legal move.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        let color = self.side_to_move;
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Side to move is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        let color = self.side_to_move;
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Count leaf positions `depth` plies ahead of the current position.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        self.placement.perft(self.side_to_move, depth)
    }
}
