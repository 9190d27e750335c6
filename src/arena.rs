//! Self-play arena.
//!
//! Referees complete games between two [`Agent`]s: it keeps the
//! authoritative board, forwards each move to the other side, charges every
//! `decide_move` call against the mover's clock and ends the game early when
//! an agent plays an illegal move, passes while it could move, or runs out
//! of time. Losing that way forfeits the game to the opponent.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::board::{Board, Move, Outcome, Side};
use crate::player::{Agent, Player, PlayerConfig, RandomAgent, Strategy};

/// Why a game stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// Neither side could move.
    Completed,
    IllegalMove(Side),
    IllegalPass(Side),
    Timeout(Side),
}

#[derive(Clone, Debug)]
pub struct GameRecord {
    pub outcome: Outcome,
    pub reason: EndReason,
    pub board: Board,
    /// Every turn in order, `None` for a pass.
    pub moves: Vec<Option<Move>>,
    /// Wall-clock time used by black and white.
    pub elapsed: [Duration; 2],
}

fn clock(side: Side) -> usize {
    match side {
        Side::Black => 0,
        Side::White => 1,
    }
}

/// Play one game to the end. `budget` is each side's total thinking time.
pub fn play_game(
    black: &mut dyn Agent,
    white: &mut dyn Agent,
    budget: Option<Duration>,
) -> GameRecord {
    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut elapsed = [Duration::ZERO; 2];
    let mut to_move = Side::Black;
    let mut last: Option<Move> = None;

    let reason = loop {
        if board.is_done() {
            break EndReason::Completed;
        }

        let agent: &mut dyn Agent = match to_move {
            Side::Black => &mut *black,
            Side::White => &mut *white,
        };
        let used = &mut elapsed[clock(to_move)];
        let time_left = budget.map(|b| b.saturating_sub(*used));

        let start = Instant::now();
        let reply = agent.decide_move(last, time_left);
        *used += start.elapsed();

        if budget.is_some_and(|b| *used > b) {
            warn!(side = %to_move, used = ?*used, "out of time");
            break EndReason::Timeout(to_move);
        }

        let reply = match reply {
            Ok(reply) => reply,
            Err(err) => {
                warn!(side = %to_move, %err, "agent rejected the game state");
                break EndReason::IllegalMove(to_move);
            }
        };
        match reply {
            Some(mv) => {
                if let Err(err) = board.apply(mv, to_move) {
                    warn!(side = %to_move, %err, "illegal move");
                    break EndReason::IllegalMove(to_move);
                }
            }
            None if board.has_moves(to_move) => {
                warn!(side = %to_move, "passed with legal moves available");
                break EndReason::IllegalPass(to_move);
            }
            None => {}
        }

        moves.push(reply);
        last = reply;
        to_move = to_move.opponent();
    };

    let outcome = match reason {
        EndReason::Completed => board.outcome(),
        EndReason::IllegalMove(side) | EndReason::IllegalPass(side) | EndReason::Timeout(side) => {
            Outcome::Winner(side.opponent())
        }
    };

    GameRecord {
        outcome,
        reason,
        board,
        moves,
        elapsed,
    }
}

/// Kinds of agent the arena can build.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AgentKind {
    Player(Strategy),
    Random,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Player(strategy) => write!(f, "{strategy}"),
            AgentKind::Random => write!(f, "random"),
        }
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("random") {
            return Ok(AgentKind::Random);
        }
        s.parse().map(AgentKind::Player)
    }
}

#[derive(Clone, Debug)]
pub struct MatchConfig {
    pub first: AgentKind,
    pub second: AgentKind,
    pub games: usize,
    pub depth: u32,
    pub budget: Option<Duration>,
    /// Seed for random agents, varied per game and per seat.
    pub seed: u64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} ={} -{}", self.first_wins, self.draws, self.second_wins)
    }
}

fn build_agent(kind: AgentKind, side: Side, depth: u32, seed: u64) -> Box<dyn Agent> {
    match kind {
        AgentKind::Player(strategy) => {
            Box::new(Player::with_config(side, PlayerConfig { depth, strategy }))
        }
        AgentKind::Random => Box::new(RandomAgent::with_seed(side, seed)),
    }
}

/// Play `config.games` games, swapping colours after every game.
pub fn run_match(config: &MatchConfig) -> MatchSummary {
    let mut summary = MatchSummary::default();

    for game in 0..config.games {
        let seed = config.seed.wrapping_add(game as u64).wrapping_mul(2);
        let first_side = if game % 2 == 0 { Side::Black } else { Side::White };
        let mut first = build_agent(config.first, first_side, config.depth, seed);
        let mut second = build_agent(config.second, first_side.opponent(), config.depth, seed + 1);

        let record = if first_side == Side::Black {
            play_game(first.as_mut(), second.as_mut(), config.budget)
        } else {
            play_game(second.as_mut(), first.as_mut(), config.budget)
        };

        match record.outcome {
            Outcome::Winner(side) if side == first_side => summary.first_wins += 1,
            Outcome::Winner(_) => summary.second_wins += 1,
            _ => summary.draws += 1,
        }
        info!(
            game,
            first = %config.first,
            first_side = %first_side,
            outcome = ?record.outcome,
            reason = ?record.reason,
            black = record.board.count(Side::Black),
            white = record.board.count(Side::White),
            "game finished"
        );
    }
    summary
}
