//! Square to piece mapping.

use super::{Color, Piece, PieceKind, Square};

/// Mapping from every square to the piece standing on it, if any.
///
/// One slot per square, so two pieces can never share a square. The type is
/// `Copy`: trying a move on a scratch copy never touches the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Placement {
    squares: [Option<Piece>; 64],
}

impl Default for Placement {
    fn default() -> Self {
        Placement::empty()
    }
}

impl Placement {
    #[must_use]
    pub const fn empty() -> Self {
        Placement {
            squares: [None; 64],
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.as_index()]
    }

    /// Put a piece on a square, returning whatever stood there before.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.as_index()].replace(piece)
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.as_index()].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Move whatever is on `from` to `to`, returning the piece that was on `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        match self.remove(from) {
            Some(piece) => self.set(to, piece),
            None => None,
        }
    }

    /// Occupied squares with their pieces, from a1 to h8.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares of one color, from a1 to h8.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, piece)| piece.color == color)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.squares_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.squares_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }
}
