//! hq: terminal shell for the dungeon crawler
//!
//! Reads one command per line from stdin and prints the board after each.

mod input;
mod transcript;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use hq_core::{GameConfig, MoveOutcome, Session, TileEvent, TurnResult};
use input::{HELP, ShellCommand, parse_board, parse_line};
use transcript::{Transcript, combat_lines};

/// Roll, move and fight your way across a generated dungeon
#[derive(Parser, Debug)]
#[command(name = "hq")]
#[command(author, version, about = "Mini Hero Quest - roll the die and explore!", long_about = None)]
struct Args {
    /// Seed for a reproducible game
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Board width (overrides the config file)
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Board height (overrides the config file)
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// Play on a hand-drawn board instead of a generated one
    #[arg(short = 'b', long = "board")]
    board: Option<PathBuf>,

    /// JSON game configuration
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Write every encounter's round log to this file
    #[arg(short = 't', long = "transcript")]
    transcript: Option<PathBuf>,

    /// Delay between combat log lines, in milliseconds
    #[arg(long = "pace-ms", default_value_t = 0)]
    pace_ms: u64,

    /// Print JSON snapshots instead of the board
    #[arg(long = "json")]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(&args)?;
    let mut session = match &args.board {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading board {}", path.display()))?;
            let grid = parse_board(&text).with_context(|| format!("in {}", path.display()))?;
            Session::from_grid(config, grid, args.seed).context("starting game")?
        }
        None => Session::new_game(config, args.seed).context("starting game")?,
    };
    debug!(seed = session.seed(), "game ready");

    let mut transcript = Transcript::open(args.transcript.as_deref())?;
    let pace = Duration::from_millis(args.pace_ms);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    render(&mut out, &session, args.json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!(%err, "ignoring input");
                eprintln!("{}", err);
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            ShellCommand::Show => {}
            ShellCommand::Game(command) => {
                let result = session.tick(command)?;
                if let TurnResult::Moved(MoveOutcome::Moved {
                    event: Some(TileEvent::Encounter(_)),
                    ..
                }) = result
                    && let Some(combat) = session.state().last_combat()
                {
                    let lines = combat_lines(combat);
                    transcript.write(&lines)?;
                    if !args.json {
                        replay(&mut out, &lines, pace)?;
                    }
                }
            }
        }

        render(&mut out, &session, args.json)?;
    }

    Ok(())
}

/// Config file (if any) with command-line overrides applied
fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    Ok(config)
}

fn replay(out: &mut impl Write, lines: &[String], pace: Duration) -> Result<()> {
    for line in lines {
        if !pace.is_zero() {
            out.flush()?;
            thread::sleep(pace);
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn render(out: &mut impl Write, session: &Session, json: bool) -> Result<()> {
    let state = session.state();
    if json {
        writeln!(out, "{}", serde_json::to_string(&state.snapshot())?)?;
    } else {
        for row in state.render_with_hero() {
            writeln!(out, "{}", row)?;
        }
        writeln!(out, "{}", state.message())?;
        writeln!(
            out,
            "HP: {}  Move: {}",
            state.hero().hit_points,
            state.move_points()
        )?;
    }
    out.flush()?;
    Ok(())
}
