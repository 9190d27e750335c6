//! Integration tests for othello-minimax
//!
//! Covers the search core through the public API: enumeration, evaluation,
//! minimax, root selection and the per-game player.

use std::time::Duration;

use othello_minimax::board::{Board, Move, Outcome, Side};
use othello_minimax::constants::N;
use othello_minimax::eval::evaluate;
use othello_minimax::moves::legal_moves;
use othello_minimax::player::{Agent, Player, PlayerConfig};
use othello_minimax::search::Minimax;

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn mv(x: usize, y: usize) -> Move {
    Move::new(x, y).unwrap()
}

/// Play `plies` random legal moves from the opening (passing when forced).
fn random_position(seed: u64, plies: usize) -> (Board, Side) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut board = Board::new();
    let mut side = Side::Black;
    for _ in 0..plies {
        if board.is_done() {
            break;
        }
        let moves = legal_moves(&board, side);
        if !moves.is_empty() {
            let m = moves[rng.usize(..moves.len())];
            board.apply(m, side).unwrap();
        }
        side = side.opponent();
    }
    (board, side)
}

/// Rotate the board by 180 degrees.
fn rotate(board: &Board) -> Board {
    let mut out = Board::empty();
    for y in 0..N {
        for x in 0..N {
            out.set(N - 1 - x, N - 1 - y, board.get(x, y));
        }
    }
    out
}

// =============================================================================
// Opening scenario
// =============================================================================

#[test]
fn test_opening_has_four_flanking_moves() {
    let moves = legal_moves(&Board::new(), Side::Black);
    let mut cells: Vec<(usize, usize)> = moves.iter().map(|m| (m.y(), m.x())).collect();
    cells.sort();
    assert_eq!(cells, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
}

#[test]
fn test_opening_selection_avoids_corner_diagonals() {
    let board = Board::new();
    let candidates = legal_moves(&board, Side::Black);
    let mut minimax = Minimax::new(Side::Black);
    let i = minimax.select(&board, &candidates, 1).unwrap();
    let chosen = candidates[i];
    for bad in [mv(1, 1), mv(6, 1), mv(1, 6), mv(6, 6)] {
        assert_ne!(chosen, bad);
    }
}

// =============================================================================
// Properties over random positions
// =============================================================================

#[test]
fn test_select_returns_valid_index() {
    for seed in 0..20 {
        let (board, side) = random_position(seed, 8 + seed as usize);
        let candidates = legal_moves(&board, side);
        if candidates.is_empty() {
            continue;
        }
        let mut minimax = Minimax::new(side);
        let i = minimax.select(&board, &candidates, 1).unwrap();
        assert!(i < candidates.len(), "seed {seed}: index {i} out of range");
    }
}

#[test]
fn test_depth_zero_is_greedy_on_evaluate() {
    for seed in 0..20 {
        let (board, side) = random_position(seed, 12);
        let candidates = legal_moves(&board, side);
        if candidates.is_empty() {
            continue;
        }

        let scores: Vec<f64> = candidates
            .iter()
            .map(|&m| {
                let mut b = board;
                b.apply(m, side).unwrap();
                evaluate(&b, side)
            })
            .collect();
        let best = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let expected = scores.iter().position(|&s| s == best).unwrap();

        let mut minimax = Minimax::new(side);
        assert_eq!(minimax.select(&board, &candidates, 0), Some(expected));
    }
}

/// Plain recursive minimax used to cross-check the engine.
fn reference_minimax(board: &Board, to_move: Side, depth: u32, maximizing: bool, me: Side) -> f64 {
    let moves = legal_moves(board, to_move);
    let replies = legal_moves(board, to_move.opponent());
    if depth == 0 || (moves.is_empty() && replies.is_empty()) {
        return evaluate(board, me);
    }
    if moves.is_empty() {
        return reference_minimax(board, to_move.opponent(), depth - 1, !maximizing, me);
    }
    let values = moves.iter().map(|&m| {
        let mut child = *board;
        child.apply(m, to_move).unwrap();
        reference_minimax(&child, to_move.opponent(), depth - 1, !maximizing, me)
    });
    if maximizing {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

#[test]
fn test_search_matches_reference_minimax() {
    for seed in 0..30 {
        let (board, side) = random_position(seed, 10 + (seed as usize * 7) % 45);
        for depth in 0..=3 {
            for maximizing in [true, false] {
                let me = if maximizing { side } else { side.opponent() };
                let mut minimax = Minimax::new(me);
                let value = minimax.search(&board, side, depth, maximizing);
                let expected = reference_minimax(&board, side, depth, maximizing, me);
                assert_eq!(
                    value, expected,
                    "seed {seed}, depth {depth}, maximizing {maximizing}"
                );
            }
        }
    }
}

#[test]
fn test_evaluate_invariant_under_rotation() {
    for seed in 0..20 {
        let (board, _) = random_position(seed, 30);
        let rotated = rotate(&board);
        for side in [Side::Black, Side::White] {
            assert_eq!(evaluate(&board, side), evaluate(&rotated, side));
        }
    }
}

#[test]
fn test_enumeration_is_idempotent() {
    for seed in 0..10 {
        let (board, side) = random_position(seed, 20);
        assert_eq!(legal_moves(&board, side), legal_moves(&board, side));
    }
}

#[test]
fn test_corner_never_worse_than_interior() {
    let mut base = Board::empty();
    base.set(3, 3, Some(Side::White));
    for (cx, cy) in [(0, 0), (7, 0), (0, 7), (7, 7)] {
        for (ix, iy) in [(2, 2), (4, 5), (5, 3)] {
            let mut corner = base;
            corner.set(cx, cy, Some(Side::Black));
            let mut interior = base;
            interior.set(ix, iy, Some(Side::Black));
            assert!(evaluate(&corner, Side::Black) >= evaluate(&interior, Side::Black));
        }
    }
}

// =============================================================================
// Pass and game-over scenarios
// =============================================================================

#[test]
fn test_player_passes_without_touching_board() {
    // Black cannot move; white's (2,0) captures black's only disc.
    let board: Board = "
        OX......
        ........
        ........
        ........
        ........
        ........
        ........
        ........"
        .parse()
        .unwrap();
    let mut white = Player::from_position(Side::White, board, PlayerConfig::default());
    let mut black = Player::from_position(Side::Black, board, PlayerConfig::default());

    // Black must pass first.
    assert_eq!(black.decide_move(None, Some(Duration::from_secs(5))).unwrap(), None);

    let reply = white.decide_move(None, None).unwrap();
    assert_eq!(reply, Some(mv(2, 0)));

    // The game is now over: black has no discs left.
    assert_eq!(white.outcome(), Outcome::Winner(Side::White));
    let after_white = *white.board();
    assert_eq!(black.decide_move(reply, None).unwrap(), None);
    assert_eq!(*black.board(), after_white);
}

#[test]
fn test_search_on_finished_game_returns_evaluation() {
    let board: Board = format!("{}{}", "X".repeat(33), "O".repeat(31)).parse().unwrap();
    assert!(board.is_done());
    for depth in [0, 1, 4] {
        let mut minimax = Minimax::new(Side::Black);
        let value = minimax.search(&board, Side::White, depth, false);
        assert_eq!(value, evaluate(&board, Side::Black));
        assert_eq!(minimax.stats.nodes, 1);
    }
}

#[test]
fn test_players_do_not_share_state() {
    let mut a = Player::new(Side::Black);
    let b = Player::new(Side::Black);
    a.decide_move(None, None).unwrap();
    assert_eq!(*b.board(), Board::new());
    assert_ne!(*a.board(), Board::new());
}
