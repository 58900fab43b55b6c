//! Board module tests.
//!
//! - `attempt_move.rs` - move validation, commit bookkeeping and outcomes
//! - `edge_cases.rs` - per-piece generation and check detection positions
//! - `perft.rs` - move counts against known reference values
//! - `proptest.rs` - property-based tests over random playouts

mod attempt_move;

use crate::board::Square;

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}
