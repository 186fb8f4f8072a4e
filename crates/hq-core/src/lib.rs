//! hq-core: Core game logic for a small dice-driven dungeon crawler
//!
//! This crate contains all game logic with no I/O dependencies: board
//! generation, dice combat and the exploration state machine. Randomness is
//! injected through [`RandomSource`] so every game can be replayed from a
//! seed or a scripted sequence. Diagnostics are emitted as `tracing` events;
//! installing a subscriber is left to the shell.

pub mod action;
pub mod combat;
pub mod config;
pub mod dice;
pub mod dungeon;
pub mod error;
pub mod session;

mod consts;
mod gameloop;
mod rng;

pub use action::{Command, Direction};
pub use config::{CombatantStats, GameConfig};
pub use consts::*;
pub use dice::{DiceEngine, Face};
pub use error::{ConfigError, GameError, GenerationError, GridError};
pub use gameloop::{
    ExplorationState, MSG_DIED, MSG_KILLED_BY_MONSTER, MSG_MONSTER, MSG_MONSTER_DEFEATED,
    MSG_PRESS_ROLL, MSG_TRAP, MSG_TREASURE, MoveOutcome, Phase, Snapshot, TileEvent,
};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use session::{Session, SessionId, Sessions, TurnResult};
