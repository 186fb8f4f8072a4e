//! Exploration state machine
//!
//! One game: a board, a hero standing on it, and the move points left from
//! the last roll. Every input is a method call that either advances the
//! state or leaves it untouched; nothing here performs I/O.

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info};

use crate::action::Direction;
use crate::combat::{Combat, CombatOutcome, Combatant};
use crate::config::GameConfig;
use crate::consts::{HERO_SYM, MOVE_DIE_SIDES};
use crate::dungeon::{Grid, Position, Tile, generate};
use crate::error::GameError;
use crate::rng::RandomSource;

pub const MSG_PRESS_ROLL: &str = "Press ROLL to move";
pub const MSG_TRAP: &str = "You stepped on a trap!";
pub const MSG_MONSTER: &str = "A monster appears!";
pub const MSG_MONSTER_DEFEATED: &str = "Monster defeated!";
pub const MSG_KILLED_BY_MONSTER: &str = "The monster killed you!";
pub const MSG_TREASURE: &str = "You found the treasure!";
pub const MSG_DIED: &str = "You died!";

/// Where the game stands between inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Phase {
    /// Running with no move points
    AwaitingRoll,
    /// Running with move points left
    Moving,
    /// Hero is dead; only a reset helps
    GameOver,
}

/// What a one-shot tile did when the hero stepped on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileEvent {
    Trap { damage: i32 },
    Encounter(CombatOutcome),
    Treasure,
}

/// Result of a movement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Not in the `Moving` phase
    NotMoving,
    /// Wall or off the board; nothing changed
    Blocked,
    /// Hero stepped to `to`, possibly triggering a tile
    Moved {
        to: Position,
        event: Option<TileEvent>,
    },
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Read-only copy of everything a shell needs to draw the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    /// Board rows without the hero overlay
    pub rows: Vec<String>,
    pub hero: Position,
    pub hit_points: i32,
    pub move_points: u32,
    pub message: String,
    pub running: bool,
    pub phase: Phase,
    pub last_combat: Option<Combat>,
}

/// A single game in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationState {
    config: GameConfig,
    /// Hand-built board to restore on reset; generated games have none
    fixed_board: Option<Grid>,
    grid: Grid,
    hero: Combatant,
    move_points: u32,
    message: String,
    running: bool,
    last_combat: Option<Combat>,
}

impl ExplorationState {
    /// Start a game on a freshly generated board
    pub fn new(config: GameConfig, rng: &mut impl RandomSource) -> Result<Self, GameError> {
        config.validate()?;
        let grid = generate(config.width, config.height, rng)?;
        Self::place_hero(config, grid, None)
    }

    /// Start a game on a hand-built board; the hero is placed on its single
    /// Start tile and `reset` brings the same board back
    pub fn from_grid(config: GameConfig, grid: Grid) -> Result<Self, GameError> {
        config.validate_rules()?;
        let fixed_board = Some(grid.clone());
        Self::place_hero(config, grid, fixed_board)
    }

    fn place_hero(
        config: GameConfig,
        mut grid: Grid,
        fixed_board: Option<Grid>,
    ) -> Result<Self, GameError> {
        let start = match grid.positions_of(Tile::Start).as_slice() {
            [] => return Err(GameError::StartNotFound),
            [start] => *start,
            starts => return Err(GameError::StartNotUnique { found: starts.len() }),
        };
        grid.set(start, Tile::Floor);

        let hero = Combatant::hero(start, &config.hero);
        info!(
            width = grid.width(),
            height = grid.height(),
            %start,
            "game started"
        );

        Ok(Self {
            config,
            fixed_board,
            grid,
            hero,
            move_points: 0,
            message: MSG_PRESS_ROLL.to_string(),
            running: true,
            last_combat: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn hero(&self) -> &Combatant {
        &self.hero
    }

    pub fn hero_position(&self) -> Position {
        self.hero.position
    }

    pub fn move_points(&self) -> u32 {
        self.move_points
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Round log of the most recent encounter
    pub fn last_combat(&self) -> Option<&Combat> {
        self.last_combat.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if !self.running {
            Phase::GameOver
        } else if self.move_points == 0 {
            Phase::AwaitingRoll
        } else {
            Phase::Moving
        }
    }

    /// Roll the movement die. Returns false outside `AwaitingRoll`.
    pub fn roll_movement(&mut self, rng: &mut impl RandomSource) -> bool {
        if self.phase() != Phase::AwaitingRoll {
            return false;
        }
        self.move_points = rng.rnd(MOVE_DIE_SIDES);
        self.message = format!("Move {} steps", self.move_points);
        debug!(move_points = self.move_points, "movement rolled");
        true
    }

    /// Try to step one cell; `rng` drives any combat the step starts
    pub fn attempt_move(
        &mut self,
        direction: Direction,
        rng: &mut impl RandomSource,
    ) -> MoveOutcome {
        if self.phase() != Phase::Moving {
            return MoveOutcome::NotMoving;
        }

        let Some(to) = self.grid.offset(self.hero.position, direction) else {
            return MoveOutcome::Blocked;
        };
        let tile = match self.grid.get(to) {
            Some(tile) if tile.is_walkable() => tile,
            _ => return MoveOutcome::Blocked,
        };

        self.hero.position = to;
        self.move_points -= 1;
        debug!(%direction, %to, %tile, move_points = self.move_points, "hero moved");

        let event = tile.is_one_shot().then(|| self.fire(tile, to, rng));

        if !self.hero.is_alive() {
            self.message = MSG_DIED.to_string();
            self.running = false;
            self.move_points = 0;
            info!(hit_points = self.hero.hit_points, %to, "game over");
        }

        MoveOutcome::Moved { to, event }
    }

    /// Apply a one-shot tile the hero just stepped on
    fn fire(&mut self, tile: Tile, at: Position, rng: &mut impl RandomSource) -> TileEvent {
        match tile {
            Tile::Trap => self.spring_trap(at),
            Tile::Monster => self.encounter(at, rng),
            // Treasure
            _ => {
                self.grid.set(at, Tile::Floor);
                self.message = MSG_TREASURE.to_string();
                info!(%at, "treasure found");
                TileEvent::Treasure
            }
        }
    }

    fn spring_trap(&mut self, at: Position) -> TileEvent {
        let damage = self.config.trap_damage;
        self.hero.take_damage(damage);
        self.grid.set(at, Tile::Floor);
        self.message = MSG_TRAP.to_string();
        debug!(%at, damage, hit_points = self.hero.hit_points, "trap sprung");
        TileEvent::Trap { damage }
    }

    fn encounter(&mut self, at: Position, rng: &mut impl RandomSource) -> TileEvent {
        info!(%at, "monster encountered");
        self.message = MSG_MONSTER.to_string();

        let mut monster = Combatant::monster(at, &self.config.monster);
        let combat = self
            .config
            .resolver()
            .resolve(&mut self.hero, &mut monster, rng);
        let outcome = combat.outcome;

        if combat.hero_won() {
            self.grid.set(at, Tile::Floor);
            self.message = MSG_MONSTER_DEFEATED.to_string();
        } else {
            self.message = MSG_KILLED_BY_MONSTER.to_string();
        }
        info!(%outcome, rounds = combat.rounds.len(), "encounter over");

        self.last_combat = Some(combat);
        TileEvent::Encounter(outcome)
    }

    /// Throw the current game away and start over: a fresh board for
    /// generated games, the original layout for hand-built ones
    pub fn reset(&mut self, rng: &mut impl RandomSource) -> Result<(), GameError> {
        let config = self.config.clone();
        *self = match self.fixed_board.clone() {
            Some(board) => Self::from_grid(config, board)?,
            None => Self::new(config, rng)?,
        };
        info!("game reset");
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            rows: self.grid.rows(),
            hero: self.hero.position,
            hit_points: self.hero.hit_points,
            move_points: self.move_points,
            message: self.message.clone(),
            running: self.running,
            phase: self.phase(),
            last_combat: self.last_combat.clone(),
        }
    }

    /// Board rows with the hero drawn on top
    pub fn render_with_hero(&self) -> Vec<String> {
        let hero = self.hero.position;
        self.grid
            .rows()
            .into_iter()
            .enumerate()
            .map(|(y, row)| {
                if y != hero.y {
                    return row;
                }
                row.chars()
                    .enumerate()
                    .map(|(x, c)| if x == hero.x { HERO_SYM } else { c })
                    .collect()
            })
            .collect()
    }
}
