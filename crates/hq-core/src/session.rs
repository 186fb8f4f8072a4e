//! Game sessions
//!
//! A `Session` owns one game together with the random stream that drives
//! it. `Sessions` keeps any number of them apart, keyed by `SessionId`, so
//! independent players never share mutable state.

use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::action::{Command, Direction};
use crate::config::GameConfig;
use crate::dungeon::Grid;
use crate::error::GameError;
use crate::gameloop::{ExplorationState, MoveOutcome};
use crate::rng::GameRng;

/// Handle for a session in a `Sessions` registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a session tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnResult {
    /// Movement die rolled for this many points
    Rolled(u32),
    /// Roll refused because the hero is moving or dead
    RollIgnored,
    /// Movement attempt and what came of it
    Moved(MoveOutcome),
    /// New board, full hit points
    Reset,
}

/// One game plus its random stream
#[derive(Debug, Clone)]
pub struct Session {
    state: ExplorationState,
    rng: GameRng,
}

impl Session {
    /// Validate `config` and start a game; a missing seed draws one from entropy
    pub fn new_game(config: GameConfig, seed: Option<u64>) -> Result<Self, GameError> {
        let mut rng = Self::stream(seed);
        let state = ExplorationState::new(config, &mut rng)?;
        info!(seed = rng.seed(), "session created");
        Ok(Self { state, rng })
    }

    /// Play on a hand-built board; reset brings the same board back
    pub fn from_grid(config: GameConfig, grid: Grid, seed: Option<u64>) -> Result<Self, GameError> {
        let rng = Self::stream(seed);
        let state = ExplorationState::from_grid(config, grid)?;
        info!(seed = rng.seed(), "session created on fixed board");
        Ok(Self { state, rng })
    }

    fn stream(seed: Option<u64>) -> GameRng {
        match seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }

    /// Get reference to game state
    pub fn state(&self) -> &ExplorationState {
        &self.state
    }

    /// Seed the session's random stream started from
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn roll_movement(&mut self) -> bool {
        self.state.roll_movement(&mut self.rng)
    }

    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        self.state.attempt_move(direction, &mut self.rng)
    }

    /// Start over on a new board; the random stream continues
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.state.reset(&mut self.rng)
    }

    /// Apply one command
    pub fn tick(&mut self, command: Command) -> Result<TurnResult, GameError> {
        let result = match command {
            Command::Roll => {
                if self.roll_movement() {
                    TurnResult::Rolled(self.state.move_points())
                } else {
                    TurnResult::RollIgnored
                }
            }
            Command::Move(direction) => TurnResult::Moved(self.attempt_move(direction)),
            Command::Reset => {
                self.reset()?;
                TurnResult::Reset
            }
        };
        Ok(result)
    }
}

/// Registry of independent sessions
#[derive(Debug, Default)]
pub struct Sessions {
    sessions: HashMap<SessionId, Session>,
    next_id: u64,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a game and return its handle
    pub fn create(&mut self, config: GameConfig, seed: Option<u64>) -> Result<SessionId, GameError> {
        let session = Session::new_game(config, seed)?;
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(id, session);
        Ok(id)
    }

    pub fn get(&self, id: SessionId) -> Result<&Session, GameError> {
        self.sessions.get(&id).ok_or(GameError::UnknownSession(id))
    }

    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut Session, GameError> {
        self.sessions.get_mut(&id).ok_or(GameError::UnknownSession(id))
    }

    /// Apply a command to one session
    pub fn tick(&mut self, id: SessionId, command: Command) -> Result<TurnResult, GameError> {
        self.get_mut(id)?.tick(command)
    }

    /// Drop a session, handing it back to the caller
    pub fn remove(&mut self, id: SessionId) -> Result<Session, GameError> {
        self.sessions.remove(&id).ok_or(GameError::UnknownSession(id))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = SessionId> + '_ {
        self.sessions.keys().copied()
    }
}
