//! Legal move enumeration.

use crate::board::{Board, Move, Side};
use crate::constants::BOARDSIZE;

/// All legal moves for `side`, in row-major order.
///
/// Returns an empty vector when `side` must pass; a pass is never encoded
/// as a move here.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    (0..BOARDSIZE)
        .map(Move::from_index)
        .filter(|&mv| board.is_legal(mv, side))
        .collect()
}
