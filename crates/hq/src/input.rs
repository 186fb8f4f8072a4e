//! Line-oriented command parsing

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use hq_core::dungeon::Grid;
use hq_core::{Command, Direction};

pub const HELP: &str = "commands: roll, up|down|left|right (u|d|l|r), reset, show, quit";

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Game(Command),
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let word = line.trim().to_ascii_lowercase();
    let command = match word.as_str() {
        "" => return Ok(None),
        "roll" => ShellCommand::Game(Command::Roll),
        "reset" => ShellCommand::Game(Command::Reset),
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "q" | "exit" => ShellCommand::Quit,
        other => match Direction::from_str(other) {
            Ok(direction) => ShellCommand::Game(Command::Move(direction)),
            Err(_) => bail!("unknown command '{}' ({})", other, HELP),
        },
    };
    Ok(Some(command))
}

/// Board file contents, one row per line; blank lines are skipped
pub fn parse_board(text: &str) -> Result<Grid> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|row| !row.is_empty())
        .collect();
    Grid::from_rows(&rows).context("parsing board")
}
