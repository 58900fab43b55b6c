use once_cell::sync::Lazy;

use super::Square;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn targets_for(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| match Square::from_index(idx) {
        Some(from) => deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect(),
        None => Vec::new(),
    })
}

/// Knight destinations per square index, clipped to the board.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| targets_for(&KNIGHT_DELTAS));

/// King destinations per square index, clipped to the board.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| targets_for(&KING_DELTAS));

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_knight_targets_corner_and_center() {
        assert_eq!(KNIGHT_TARGETS[sq("a1").as_index()].len(), 2);
        assert_eq!(KNIGHT_TARGETS[sq("d4").as_index()].len(), 8);
        assert_eq!(KNIGHT_TARGETS[sq("b1").as_index()].len(), 3);
    }

    #[test]
    fn test_king_targets_corner_edge_center() {
        assert_eq!(KING_TARGETS[sq("h8").as_index()].len(), 3);
        assert_eq!(KING_TARGETS[sq("e1").as_index()].len(), 5);
        assert_eq!(KING_TARGETS[sq("e4").as_index()].len(), 8);
    }
}
