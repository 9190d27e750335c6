//! Static position evaluation.
//!
//! Two heuristics share the same cell categories:
//!
//! - [`evaluate`] sums the positional weight of every disc a side owns. It is
//!   used at the leaves of the minimax search.
//! - [`move_quality`] scores a single move by the discs it gained plus a
//!   bonus or penalty for the destination cell. It drives the one-ply
//!   greedy strategy.

use crate::board::{Board, Move, Side};
use crate::constants::{CORNER, CORNER_DIAGONAL, CORNER_EDGE, EDGE, INTERIOR, N, WEIGHTS};

/// Strategic category of a board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    Corner,
    /// Diagonal neighbour of a corner.
    CornerDiagonal,
    /// Edge cell orthogonally next to a corner.
    CornerEdge,
    Edge,
    Interior,
}

impl CellKind {
    pub fn of(x: usize, y: usize) -> CellKind {
        let last = N - 1;
        let on_edge = |v: usize| v == 0 || v == last;
        let next_to_edge = |v: usize| v == 1 || v == last - 1;

        if on_edge(x) && on_edge(y) {
            CellKind::Corner
        } else if next_to_edge(x) && next_to_edge(y) {
            CellKind::CornerDiagonal
        } else if (on_edge(x) && next_to_edge(y)) || (next_to_edge(x) && on_edge(y)) {
            CellKind::CornerEdge
        } else if on_edge(x) || on_edge(y) {
            CellKind::Edge
        } else {
            CellKind::Interior
        }
    }

    /// Weight used by the occupancy evaluator.
    pub fn weight(self) -> i32 {
        match self {
            CellKind::Corner => CORNER,
            CellKind::CornerDiagonal => CORNER_DIAGONAL,
            CellKind::CornerEdge => CORNER_EDGE,
            CellKind::Edge => EDGE,
            CellKind::Interior => INTERIOR,
        }
    }

    /// Bonus used by the move-quality evaluator. Interior moves are neutral.
    pub fn move_bonus(self) -> i32 {
        match self {
            CellKind::Interior => 0,
            kind => kind.weight(),
        }
    }
}

/// Positional weight of a single cell.
#[inline]
pub fn weight(x: usize, y: usize) -> i32 {
    WEIGHTS[y][x]
}

/// Sum of positional weights over every cell occupied by `side`.
pub fn evaluate(board: &Board, side: Side) -> f64 {
    let mut score = 0;
    for y in 0..N {
        for x in 0..N {
            if board.occupied_by(side, x, y) {
                score += weight(x, y);
            }
        }
    }
    score as f64
}

/// Score a move from the discs it gained and where it landed.
///
/// `delta` is the mover's piece count after the move minus before it.
pub fn move_quality(mv: Move, delta: i32) -> f64 {
    (delta + CellKind::of(mv.x(), mv.y()).move_bonus()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_categories() {
        for y in 0..N {
            for x in 0..N {
                assert_eq!(
                    weight(x, y),
                    CellKind::of(x, y).weight(),
                    "weight mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_category_counts() {
        let mut counts = [0; 5];
        for y in 0..N {
            for x in 0..N {
                let i = match CellKind::of(x, y) {
                    CellKind::Corner => 0,
                    CellKind::CornerDiagonal => 1,
                    CellKind::CornerEdge => 2,
                    CellKind::Edge => 3,
                    CellKind::Interior => 4,
                };
                counts[i] += 1;
            }
        }
        assert_eq!(counts, [4, 4, 8, 16, 32]);
    }

    #[test]
    fn test_weight_ordering() {
        assert!(CORNER > EDGE);
        assert!(EDGE > INTERIOR);
        assert!(INTERIOR > 0);
        assert!(CORNER_EDGE < 0);
        assert!(CORNER_DIAGONAL < CORNER_EDGE);
    }

    #[test]
    fn test_table_symmetry() {
        for y in 0..N {
            for x in 0..N {
                let w = weight(x, y);
                assert_eq!(w, weight(N - 1 - x, N - 1 - y));
                assert_eq!(w, weight(y, x));
                assert_eq!(w, weight(N - 1 - x, y));
            }
        }
    }

    #[test]
    fn test_evaluate_initial_position() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Side::Black), 2.0);
        assert_eq!(evaluate(&board, Side::White), 2.0);
        assert_eq!(evaluate(&Board::empty(), Side::Black), 0.0);
    }

    #[test]
    fn test_move_quality_categories() {
        let at = |x, y| Move::new(x, y).unwrap();
        assert_eq!(move_quality(at(0, 0), 2), 12.0);
        assert_eq!(move_quality(at(6, 6), 2), -8.0);
        assert_eq!(move_quality(at(0, 1), 2), -3.0);
        assert_eq!(move_quality(at(0, 4), 2), 7.0);
        assert_eq!(move_quality(at(3, 3), 2), 2.0);
    }
}
