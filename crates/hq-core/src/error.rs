//! Error types
//!
//! Only configuration problems are errors. Blocked moves and out-of-turn
//! commands are ordinary outcomes, reported through `MoveOutcome` and
//! `TurnResult`.

use thiserror::Error;

use crate::session::SessionId;

/// Board cannot be generated with the requested parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("board {width}x{height} is too small, need at least {min_width}x{min_height}")]
    GridTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },

    #[error("board {width}x{height} exceeds the maximum dimension {max}")]
    GridTooLarge { width: usize, height: usize, max: usize },

    #[error("no free floor left to place a tile")]
    NoFreeFloor,
}

/// Board text could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("board has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile symbol '{symbol}' at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: usize, y: usize },
}

/// Invalid game configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{role} needs at least one attack die")]
    NoAttackDice { role: &'static str },

    #[error("{role} rolls {dice} dice, at most {max} allowed")]
    TooManyDice {
        role: &'static str,
        dice: u32,
        max: u32,
    },

    #[error("{role} needs positive hit points, got {hit_points}")]
    NoHitPoints { role: &'static str, hit_points: i32 },

    #[error("trap damage cannot be negative, got {0}")]
    NegativeTrapDamage(i32),

    #[error("dice need at least one side")]
    NoDiceSides,

    #[error("dice need at least one hit face")]
    NoHitFaces,

    #[error(transparent)]
    Board(#[from] GenerationError),
}

/// Failure to start or look up a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("board generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("board has no start tile")]
    StartNotFound,

    #[error("board has {found} start tiles, expected exactly one")]
    StartNotUnique { found: usize },

    #[error("unknown session {0}")]
    UnknownSession(SessionId),
}
