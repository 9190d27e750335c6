//! Othello-Minimax: a fixed-depth minimax Othello player.
//!
//! The player searches a bounded game tree without pruning and scores the
//! leaves with a static positional weight table (corners good, cells next
//! to corners bad).
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, search defaults and weights
//! - [`board`] - Board state and Othello rules
//! - [`moves`] - Legal move enumeration
//! - [`eval`] - Static evaluation heuristics
//! - [`search`] - Minimax search and root move selection
//! - [`player`] - Per-game players and the [`player::Agent`] trait
//! - [`protocol`] - Line protocol for tournament wrappers
//! - [`arena`] - Self-play games and matches
//!
//! ## Example
//!
//! ```
//! use othello_minimax::board::{Move, Side};
//! use othello_minimax::player::{Agent, Player};
//!
//! // White answers black's opening move.
//! let mut player = Player::new(Side::White);
//! let reply = player.decide_move(Some(Move::new(3, 2).unwrap()), None).unwrap();
//! assert!(reply.is_some());
//! ```

pub mod arena;
pub mod board;
pub mod constants;
pub mod eval;
pub mod moves;
pub mod player;
pub mod protocol;
pub mod search;
