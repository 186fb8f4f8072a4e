//! Combat participants

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::config::CombatantStats;
use crate::dungeon::Position;

/// Which side a combatant fights on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Role {
    Hero,
    Monster,
}

impl Role {
    /// The hero always opens an encounter
    pub const fn strikes_first(&self) -> bool {
        matches!(self, Role::Hero)
    }
}

/// Anything that rolls attack and defense pools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub role: Role,
    pub position: Position,
    pub attack_dice: u32,
    pub defense_dice: u32,
    pub hit_points: i32,
}

impl Combatant {
    pub fn new(role: Role, position: Position, stats: &CombatantStats) -> Self {
        Self {
            role,
            position,
            attack_dice: stats.attack_dice,
            defense_dice: stats.defense_dice,
            hit_points: stats.hit_points,
        }
    }

    pub fn hero(position: Position, stats: &CombatantStats) -> Self {
        Self::new(Role::Hero, position, stats)
    }

    pub fn monster(position: Position, stats: &CombatantStats) -> Self {
        Self::new(Role::Monster, position, stats)
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Subtract damage; negative amounts are ignored so hit points never rise
    pub fn take_damage(&mut self, amount: i32) {
        self.hit_points -= amount.max(0);
    }
}
