//! Headless SOS runner (default binary).
//!
//! Plays computer-vs-computer games, optionally recording them, and replays
//! recorded logs with a fixed delay between moves. Rendering is plain text.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sos_game::ai::SearchPlayer;
use sos_game::autoplay::play_out;
use sos_game::config::{clamp_size, GameConfig};
use sos_game::core::GameState;
use sos_game::engine::{GameEngine, ReplayEngine};
use sos_game::playback::play_paced;
use sos_game::types::{Mode, Outcome, Player};

/// SOS - place S and O, complete S-O-S lines
#[derive(Parser, Debug)]
#[command(name = "sos")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Let two automated players play one game
    Autoplay {
        /// Board size (3-20)
        #[arg(long)]
        size: Option<usize>,

        /// Game mode: simple or general
        #[arg(long, value_parser = parse_mode)]
        mode: Option<Mode>,

        /// Search depth in plies
        #[arg(long)]
        ply: Option<u8>,

        /// Record the game to this file
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// Replay a recorded game
    Replay {
        /// Log file to replay
        path: PathBuf,

        /// Delay between moves in milliseconds (0 = no delay)
        #[arg(long)]
        tick_ms: Option<u64>,
    },
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_str(s).ok_or_else(|| format!("unknown mode '{s}' (expected simple or general)"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::from_env();

    match cli.command {
        Command::Autoplay {
            size,
            mode,
            ply,
            record,
        } => {
            if let Some(size) = size {
                config.size = clamp_size(size);
            }
            if let Some(mode) = mode {
                config.mode = mode;
            }
            if let Some(ply) = ply {
                config.search.max_ply = ply.max(1);
            }
            if record.is_some() {
                config.log_path = record;
            }
            autoplay(&config)
        }
        Command::Replay { path, tick_ms } => {
            let tick = Duration::from_millis(tick_ms.unwrap_or(config.replay_tick_ms));
            replay(path, tick).await
        }
    }
}

fn autoplay(config: &GameConfig) -> Result<()> {
    let mut engine = GameEngine::new(config.size, config.mode).context("create game")?;
    if let Some(path) = &config.log_path {
        engine
            .start_recording(path)
            .with_context(|| format!("start recording to {}", path.display()))?;
    }

    info!(
        size = config.size,
        mode = config.mode.as_str(),
        ply = config.search.max_ply,
        "autoplay started"
    );
    let blue = SearchPlayer::new(Player::Blue, config.search);
    let red = SearchPlayer::new(Player::Red, config.search);
    let outcome = play_out(&mut engine, &blue, &red).context("automated move rejected")?;

    if let Some(e) = engine.take_warning() {
        warn!(error = %e, "game was not fully recorded");
    }
    print_state(engine.state());
    print_outcome(outcome, engine.state());
    Ok(())
}

async fn replay(path: PathBuf, tick: Duration) -> Result<()> {
    let mut replay =
        ReplayEngine::load(&path).with_context(|| format!("load {}", path.display()))?;
    info!(path = %path.display(), moves = replay.len(), "replay started");

    let outcome = play_paced(&mut replay, tick, |r, _| {
        println!("move {}/{}", r.cursor(), r.len());
        print_state(r.state());
    })
    .await
    .context("replay failed")?;

    print_outcome(outcome, replay.state());
    Ok(())
}

fn print_state(state: &GameState) {
    print!("{}", state.board());
    println!(
        "Blue {} - Red {} ({} lines, {} to move)",
        state.score(Player::Blue),
        state.score(Player::Red),
        state.lines().len(),
        state.current_player().as_str()
    );
    println!();
}

fn print_outcome(outcome: Outcome, state: &GameState) {
    match outcome {
        Outcome::Winner(player) => println!("{} wins", player.as_str()),
        Outcome::Draw => println!("Draw"),
        Outcome::Continue => println!("Unfinished after {} moves", state.history().len()),
    }
}
