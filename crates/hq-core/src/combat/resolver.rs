//! Dice combat resolution
//!
//! Combat is a sequence of one-sided rounds. The attacker rolls its attack
//! pool, the defender its defense pool, and hits beyond the defender's
//! blocks become damage. Sides alternate until one drops to zero hit points;
//! the killing round gets no reply.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::dice::{DiceEngine, Face, count_blocks, count_hits};
use crate::dungeon::Position;
use crate::rng::RandomSource;

use super::{Combatant, Role};

/// How excess hits turn into damage
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamagePolicy {
    /// Every hit beyond the blocks deals one point
    #[default]
    FullExcess,
    /// Any excess deals exactly one point
    ClampToOne,
}

impl DamagePolicy {
    pub fn damage(&self, hits: u32, blocks: u32) -> i32 {
        let excess = hits.saturating_sub(blocks) as i32;
        match self {
            DamagePolicy::FullExcess => excess,
            DamagePolicy::ClampToOne => excess.min(1),
        }
    }
}

/// How an encounter ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum CombatOutcome {
    HeroWins,
    HeroDefeated,
}

/// One attack in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRound {
    pub attacker: Role,
    pub attack_faces: Vec<Face>,
    pub defense_faces: Vec<Face>,
    pub damage: i32,
    /// Defender's hit points after the damage, not clamped at zero
    pub defender_hit_points: i32,
}

impl CombatRound {
    pub fn defender(&self) -> Role {
        match self.attacker {
            Role::Hero => Role::Monster,
            Role::Monster => Role::Hero,
        }
    }

    pub fn hits(&self) -> u32 {
        count_hits(&self.attack_faces)
    }

    pub fn blocks(&self) -> u32 {
        count_blocks(&self.defense_faces)
    }
}

/// A fully resolved encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combat {
    /// Where the monster stood
    pub location: Position,
    pub outcome: CombatOutcome,
    pub rounds: Vec<CombatRound>,
}

impl Combat {
    pub fn hero_won(&self) -> bool {
        self.outcome == CombatOutcome::HeroWins
    }
}

/// Runs encounters with a given die and damage rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatResolver {
    pub dice: DiceEngine,
    pub policy: DamagePolicy,
}

impl CombatResolver {
    pub fn new(dice: DiceEngine, policy: DamagePolicy) -> Self {
        Self { dice, policy }
    }

    /// Fight to the death, mutating both sides' hit points.
    ///
    /// Terminates with probability one as long as at least one side has
    /// attack dice the other cannot always block.
    pub fn resolve(
        &self,
        hero: &mut Combatant,
        monster: &mut Combatant,
        rng: &mut impl RandomSource,
    ) -> Combat {
        let mut rounds = Vec::new();
        let mut hero_turn = hero.role.strikes_first();

        while hero.is_alive() && monster.is_alive() {
            let (attacker, defender) = if hero_turn {
                (&mut *hero, &mut *monster)
            } else {
                (&mut *monster, &mut *hero)
            };
            rounds.push(self.exchange(attacker, defender, rng));
            hero_turn = !hero_turn;
        }

        let outcome = if hero.is_alive() {
            CombatOutcome::HeroWins
        } else {
            CombatOutcome::HeroDefeated
        };
        debug!(%outcome, rounds = rounds.len(), "combat resolved");

        Combat {
            location: monster.position,
            outcome,
            rounds,
        }
    }

    /// A single attack from `attacker` against `defender`
    pub fn exchange(
        &self,
        attacker: &Combatant,
        defender: &mut Combatant,
        rng: &mut impl RandomSource,
    ) -> CombatRound {
        let attack_faces = self.dice.roll_pool(rng, attacker.attack_dice);
        let defense_faces = self.dice.roll_pool(rng, defender.defense_dice);
        let damage = self
            .policy
            .damage(count_hits(&attack_faces), count_blocks(&defense_faces));
        defender.take_damage(damage);

        debug!(
            attacker = %attacker.role,
            damage,
            defender_hp = defender.hit_points,
            "combat round"
        );

        CombatRound {
            attacker: attacker.role,
            attack_faces,
            defense_faces,
            damage,
            defender_hit_points: defender.hit_points,
        }
    }
}
