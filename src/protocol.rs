//! Line protocol spoken with tournament wrappers.
//!
//! The wrapper starts the engine for one side and waits for `Init done`.
//! After that each turn is one line in and one line out:
//!
//! - in: `x y ms_left`, the opponent's move, `-1 -1` if the opponent passed
//!   (or on the very first turn), and the time left for this engine in
//!   milliseconds (`-1` for no limit);
//! - out: `x y`, or `-1 -1` to pass.
//!
//! Blank lines and lines starting with `#` are ignored.
//!
//! ## Example
//!
//! ```
//! use othello_minimax::board::Side;
//! use othello_minimax::player::PlayerConfig;
//! use othello_minimax::protocol::WrapperSession;
//!
//! let mut session = WrapperSession::new(Side::Black, PlayerConfig::default());
//! let mut out = Vec::new();
//! session.run("-1 -1 -1\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("Init done\n"));
//! ```

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::board::{Move, Outcome, Side};
use crate::player::{Agent, Player, PlayerConfig};

/// Sent once the player is constructed.
pub const READY: &str = "Init done";

/// Coordinate pair used for a pass in both directions.
const PASS: &str = "-1 -1";

/// One game's worth of protocol state.
pub struct WrapperSession {
    player: Player,
}

impl WrapperSession {
    pub fn new(side: Side, config: PlayerConfig) -> Self {
        Self {
            player: Player::with_config(side, config),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Serve turns from `input` until it closes or the game ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{READY}")?;
        output.flush()?;

        for line in input.lines() {
            let line = line.context("reading wrapper input")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let reply = self.execute(line)?;
            writeln!(output, "{reply}")?;
            output.flush()?;

            let outcome = self.player.outcome();
            if outcome != Outcome::InProgress {
                info!(side = %self.player.side(), ?outcome, "game over");
                break;
            }
        }
        Ok(())
    }

    /// Handle one turn line and return the reply line.
    fn execute(&mut self, line: &str) -> Result<String> {
        let (opponents_move, time_left) = parse_turn(line)?;
        debug!(?opponents_move, ?time_left, "turn");
        let reply = self
            .player
            .decide_move(opponents_move, time_left)
            .with_context(|| format!("applying opponent move from '{line}'"))?;
        Ok(format_move(reply))
    }
}

/// Parse `x y ms_left`.
pub fn parse_turn(line: &str) -> Result<(Option<Move>, Option<Duration>)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        bail!("expected 'x y ms_left', got '{line}'");
    }
    let mut nums = [0i64; 3];
    for (n, field) in nums.iter_mut().zip(&fields) {
        *n = field
            .parse()
            .with_context(|| format!("invalid number '{field}'"))?;
    }
    let [x, y, ms] = nums;

    let mv = match (x, y) {
        (-1, -1) => None,
        (x, y) if x < 0 || y < 0 => bail!("negative coordinate in '{line}'"),
        (x, y) => Some(Move::new(x as usize, y as usize)?),
    };
    let time_left = match ms {
        -1 => None,
        ms if ms < 0 => bail!("invalid time left in '{line}'"),
        ms => Some(Duration::from_millis(ms as u64)),
    };
    Ok((mv, time_left))
}

pub fn format_move(mv: Option<Move>) -> String {
    match mv {
        Some(mv) => mv.to_string(),
        None => PASS.to_string(),
    }
}
