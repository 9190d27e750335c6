//! Move-deciding agents.
//!
//! A [`Player`] owns its own copy of the board for one game. Each turn it is
//! told the opponent's last move, replays it locally, and answers with its
//! own move (or `None` to pass). Nothing is shared between players, so any
//! number of games can run in one process.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, warn};

use crate::board::{Board, BoardError, Move, Outcome, Side};
use crate::constants::DEFAULT_DEPTH;
use crate::eval::move_quality;
use crate::moves::legal_moves;
use crate::search::Minimax;

/// Something that can take turns in a game.
pub trait Agent {
    fn side(&self) -> Side;

    /// Record `opponents_move` (`None` for a pass or the first turn) and
    /// return this agent's reply, or `None` to pass.
    ///
    /// `time_left` is the agent's remaining budget for the whole game,
    /// `None` meaning unlimited.
    fn decide_move(
        &mut self,
        opponents_move: Option<Move>,
        time_left: Option<Duration>,
    ) -> Result<Option<Move>, BoardError>;
}

/// How a [`Player`] ranks its candidate moves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Fixed-depth minimax over the positional evaluator.
    #[default]
    Minimax,
    /// One-ply move-quality heuristic.
    Greedy,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::Greedy => write!(f, "greedy"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "greedy" => Ok(Strategy::Greedy),
            _ => Err(format!("unknown strategy: {s}")),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Plies searched after each root move.
    pub depth: u32,
    pub strategy: Strategy,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            strategy: Strategy::default(),
        }
    }
}

/// A computer player for one game.
pub struct Player {
    board: Board,
    side: Side,
    config: PlayerConfig,
}

impl Player {
    pub fn new(side: Side) -> Self {
        Self::with_config(side, PlayerConfig::default())
    }

    pub fn with_config(side: Side, config: PlayerConfig) -> Self {
        Self::from_position(side, Board::new(), config)
    }

    /// Start from an arbitrary position instead of the opening.
    pub fn from_position(side: Side, board: Board, config: PlayerConfig) -> Self {
        Self {
            board,
            side,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Result of the game as seen on this player's board.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Index of the preferred candidate, or `None` if there are none.
    fn choose(&self, candidates: &[Move]) -> Option<usize> {
        match self.config.strategy {
            Strategy::Minimax => {
                let mut minimax = Minimax::new(self.side);
                let choice = minimax.select(&self.board, candidates, self.config.depth);
                debug!(
                    nodes = minimax.stats.nodes,
                    leaves = minimax.stats.leaves,
                    depth = self.config.depth,
                    "minimax search done"
                );
                choice
            }
            Strategy::Greedy => self.choose_greedy(candidates),
        }
    }

    fn choose_greedy(&self, candidates: &[Move]) -> Option<usize> {
        let before = self.board.count(self.side) as i32;
        let mut best: Option<(usize, f64)> = None;
        for (i, &mv) in candidates.iter().enumerate() {
            let mut child = self.board;
            if let Err(err) = child.apply(mv, self.side) {
                warn!(%mv, %err, "skipping illegal candidate");
                continue;
            }
            let delta = child.count(self.side) as i32 - before;
            let score = move_quality(mv, delta);
            match best {
                Some((_, s)) if score <= s => {}
                _ => best = Some((i, score)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl Agent for Player {
    fn side(&self) -> Side {
        self.side
    }

    fn decide_move(
        &mut self,
        opponents_move: Option<Move>,
        time_left: Option<Duration>,
    ) -> Result<Option<Move>, BoardError> {
        if let Some(mv) = opponents_move {
            self.board.apply(mv, self.side.opponent())?;
        }
        debug!(side = %self.side, ?time_left, "deciding move");

        let candidates = legal_moves(&self.board, self.side);
        if candidates.is_empty() {
            debug!(side = %self.side, "no legal move, passing");
            return Ok(None);
        }

        let Some(index) = self.choose(&candidates) else {
            return Ok(None);
        };
        let mv = candidates[index];
        self.board.apply(mv, self.side)?;
        Ok(Some(mv))
    }
}

/// Plays a uniformly random legal move.
pub struct RandomAgent {
    board: Board,
    side: Side,
    rng: fastrand::Rng,
}

impl RandomAgent {
    pub fn with_seed(side: Side, seed: u64) -> Self {
        Self {
            board: Board::new(),
            side,
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn side(&self) -> Side {
        self.side
    }

    fn decide_move(
        &mut self,
        opponents_move: Option<Move>,
        _time_left: Option<Duration>,
    ) -> Result<Option<Move>, BoardError> {
        if let Some(mv) = opponents_move {
            self.board.apply(mv, self.side.opponent())?;
        }
        let candidates = legal_moves(&self.board, self.side);
        if candidates.is_empty() {
            return Ok(None);
        }
        let mv = candidates[self.rng.usize(..candidates.len())];
        self.board.apply(mv, self.side)?;
        Ok(Some(mv))
    }
}
