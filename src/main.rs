//! Othello-Minimax: a fixed-depth minimax Othello player.
//!
//! ## Usage
//!
//! - `othello-minimax wrapper black` - Play one game over stdin/stdout
//! - `othello-minimax match minimax random` - Self-play match
//! - `othello-minimax demo` - Show a short game (default)
//!
//! Diagnostics go to stderr; use `-v`/`-vv` or `RUST_LOG` to see them.

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use othello_minimax::arena::{AgentKind, MatchConfig, play_game, run_match};
use othello_minimax::board::Side;
use othello_minimax::constants::{DEFAULT_DEPTH, DEFAULT_TIME_MS};
use othello_minimax::player::{Player, PlayerConfig, Strategy};
use othello_minimax::protocol::{WrapperSession, format_move};

/// Othello-Minimax: a fixed-depth minimax Othello player
#[derive(Parser)]
#[command(name = "othello-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game through the tournament wrapper protocol
    Wrapper {
        /// Side to play (black or white)
        side: Side,
        /// Plies searched after each candidate move
        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
        /// Move ranking strategy (minimax or greedy)
        #[arg(short, long, default_value_t = Strategy::Minimax)]
        strategy: Strategy,
    },
    /// Play a self-play match between two agents (minimax, greedy or random)
    Match {
        first: AgentKind,
        second: AgentKind,
        #[arg(short, long, default_value_t = 10)]
        games: usize,
        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
        /// Thinking time per side per game in milliseconds (0 for unlimited)
        #[arg(short, long, default_value_t = DEFAULT_TIME_MS)]
        time_ms: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Watch the engine play itself
    Demo,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Wrapper {
            side,
            depth,
            strategy,
        }) => {
            let mut session = WrapperSession::new(side, PlayerConfig { depth, strategy });
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Some(Commands::Match {
            first,
            second,
            games,
            depth,
            time_ms,
            seed,
        }) => {
            let config = MatchConfig {
                first,
                second,
                games,
                depth,
                budget: (time_ms > 0).then(|| Duration::from_millis(time_ms)),
                seed,
            };
            let summary = run_match(&config);
            println!("{first} vs {second} over {games} games: {summary}");
        }
        Some(Commands::Demo) | None => run_demo(),
    }
    Ok(())
}

fn run_demo() {
    println!("Othello-Minimax: fixed-depth minimax player\n");

    let mut black = Player::new(Side::Black);
    let mut white = Player::with_config(
        Side::White,
        PlayerConfig {
            depth: DEFAULT_DEPTH,
            strategy: Strategy::Greedy,
        },
    );
    println!("Black: minimax depth {DEFAULT_DEPTH}, White: greedy\n");

    let record = play_game(&mut black, &mut white, None);
    let moves: Vec<String> = record.moves.iter().map(|&mv| format_move(mv)).collect();
    println!("Moves: {}", moves.join(", "));
    println!("\n{}", record.board);
    println!(
        "Black {} - White {}: {:?} ({:?})",
        record.board.count(Side::Black),
        record.board.count(Side::White),
        record.outcome,
        record.reason
    );
    println!(
        "Time used: black {:?}, white {:?}",
        record.elapsed[0], record.elapsed[1]
    );
}
