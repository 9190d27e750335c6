//! Fixed-depth minimax search.
//!
//! The search walks every line to the requested depth with no pruning.
//! Values are always from the point of view of the searching side: nodes
//! where that side moves take the maximum over their children, nodes where
//! the opponent moves take the minimum. Leaves are scored with
//! [`evaluate`].
//!
//! A side with no legal move passes: the ply is consumed but the board is
//! unchanged. When neither side can move the position is scored as is.

use tracing::{debug, warn};

use crate::board::{Board, Move, Side};
use crate::eval::evaluate;
use crate::moves::legal_moves;

/// Node statistics collected during one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior and leaf nodes visited.
    pub nodes: u64,
    /// Nodes scored by the static evaluator.
    pub leaves: u64,
}

/// Minimax searcher for one side.
pub struct Minimax {
    perspective: Side,
    pub stats: SearchStats,
}

impl Minimax {
    /// Create a searcher that scores positions for `perspective`.
    pub fn new(perspective: Side) -> Self {
        Self {
            perspective,
            stats: SearchStats::default(),
        }
    }

    /// Value of `board` with `to_move` on turn and `depth` plies left.
    pub fn search(&mut self, board: &Board, to_move: Side, depth: u32, maximizing: bool) -> f64 {
        self.stats.nodes += 1;

        let moves = legal_moves(board, to_move);
        if depth == 0 || (moves.is_empty() && !board.has_moves(to_move.opponent())) {
            self.stats.leaves += 1;
            return evaluate(board, self.perspective);
        }

        if moves.is_empty() {
            return self.search(board, to_move.opponent(), depth - 1, !maximizing);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for mv in moves {
            let mut child = *board;
            if let Err(err) = child.apply(mv, to_move) {
                warn!(%mv, %err, "enumerated move rejected by board");
                continue;
            }
            let value = self.search(&child, to_move.opponent(), depth - 1, !maximizing);
            if maximizing {
                best = best.max(value);
            } else {
                best = best.min(value);
            }
        }
        best
    }

    /// Pick the candidate with the highest minimax value.
    ///
    /// Each candidate is played for the searching side, then the position is
    /// searched `depth` further plies with the opponent to move. `depth == 0`
    /// reduces to choosing the move with the best immediate evaluation. Ties
    /// keep the earliest candidate.
    ///
    /// Candidates that are not legal for the searching side are logged and
    /// skipped. Returns `None` when no candidate is legal, including an empty
    /// slice.
    pub fn select(&mut self, board: &Board, candidates: &[Move], depth: u32) -> Option<usize> {
        let side = self.perspective;
        let mut best: Option<(usize, f64)> = None;

        for (i, &mv) in candidates.iter().enumerate() {
            let mut child = *board;
            if let Err(err) = child.apply(mv, side) {
                warn!(%mv, %err, "skipping illegal candidate");
                continue;
            }
            let value = self.search(&child, side.opponent(), depth, false);
            debug!(%mv, value, "root candidate");
            match best {
                Some((_, v)) if value <= v => {}
                _ => best = Some((i, value)),
            }
        }

        best.map(|(i, _)| i)
    }
}
