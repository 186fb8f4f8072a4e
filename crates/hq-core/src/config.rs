//! Game configuration
//!
//! Everything a shell may tune before starting a game. Missing fields in a
//! serialized config fall back to the tabletop game's values.

use serde::{Deserialize, Serialize};

use crate::combat::{CombatResolver, DamagePolicy};
use crate::consts::{
    DEFAULT_ATTACK_DICE, DEFAULT_DEFENSE_DICE, DEFAULT_HEIGHT, DEFAULT_HIT_POINTS,
    DEFAULT_TRAP_DAMAGE, DEFAULT_WIDTH, MAX_DICE_POOL,
};
use crate::dice::DiceEngine;
use crate::dungeon::check_dimensions;
use crate::error::ConfigError;

/// Starting combat numbers for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatantStats {
    pub attack_dice: u32,
    pub defense_dice: u32,
    pub hit_points: i32,
}

impl Default for CombatantStats {
    fn default() -> Self {
        Self {
            attack_dice: DEFAULT_ATTACK_DICE,
            defense_dice: DEFAULT_DEFENSE_DICE,
            hit_points: DEFAULT_HIT_POINTS,
        }
    }
}

impl CombatantStats {
    fn validate(&self, role: &'static str) -> Result<(), ConfigError> {
        if self.attack_dice == 0 {
            return Err(ConfigError::NoAttackDice { role });
        }
        for dice in [self.attack_dice, self.defense_dice] {
            if dice > MAX_DICE_POOL {
                return Err(ConfigError::TooManyDice {
                    role,
                    dice,
                    max: MAX_DICE_POOL,
                });
            }
        }
        if self.hit_points <= 0 {
            return Err(ConfigError::NoHitPoints {
                role,
                hit_points: self.hit_points,
            });
        }
        Ok(())
    }
}

/// Game setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub hero: CombatantStats,
    pub monster: CombatantStats,
    pub trap_damage: i32,
    pub damage_policy: DamagePolicy,
    pub dice_sides: u32,
    pub hit_faces: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            hero: CombatantStats::default(),
            monster: CombatantStats::default(),
            trap_damage: DEFAULT_TRAP_DAMAGE,
            damage_policy: DamagePolicy::default(),
            dice_sides: DiceEngine::STANDARD.sides(),
            hit_faces: DiceEngine::STANDARD.hit_faces(),
        }
    }
}

impl GameConfig {
    /// Default setup on a board of the given size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Fail fast on anything that would make generation or combat unsound
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.width, self.height)?;
        self.validate_rules()
    }

    /// Validate everything except the board size, for hand-built boards
    pub fn validate_rules(&self) -> Result<(), ConfigError> {
        self.hero.validate("hero")?;
        self.monster.validate("monster")?;
        if self.trap_damage < 0 {
            return Err(ConfigError::NegativeTrapDamage(self.trap_damage));
        }
        if self.dice_sides == 0 {
            return Err(ConfigError::NoDiceSides);
        }
        if self.hit_faces == 0 {
            return Err(ConfigError::NoHitFaces);
        }
        Ok(())
    }

    pub fn dice(&self) -> DiceEngine {
        DiceEngine::new(self.dice_sides, self.hit_faces)
    }

    pub fn resolver(&self) -> CombatResolver {
        CombatResolver::new(self.dice(), self.damage_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.dice(), DiceEngine::STANDARD);
        assert_eq!(config.hero.hit_points, 3);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = GameConfig::with_size(8, 8);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Board(GenerationError::GridTooSmall { .. }))
        ));

        config = GameConfig::default();
        config.monster.attack_dice = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NoAttackDice { role: "monster" })
        );

        config = GameConfig::default();
        config.hero.hit_points = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoHitPoints { role: "hero", .. })));

        config = GameConfig::default();
        config.trap_damage = -1;
        assert_eq!(config.validate(), Err(ConfigError::NegativeTrapDamage(-1)));

        config = GameConfig::default();
        config.hero.defense_dice = MAX_DICE_POOL + 1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyDice {
                role: "hero",
                dice: 65,
                max: 64,
            })
        );

        config = GameConfig::default();
        config.hit_faces = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoHitFaces));
    }

    #[test]
    fn test_huge_pool_in_json_is_rejected() {
        let config: GameConfig =
            serde_json::from_str(r#"{"monster": {"attack_dice": 4000000000}}"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyDice { role: "monster", dice: 4_000_000_000, .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"width": 20, "damage_policy": "clamp_to_one", "hero": {"hit_points": 5}}"#)
                .unwrap();
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 12);
        assert_eq!(config.damage_policy, DamagePolicy::ClampToOne);
        assert_eq!(config.hero.hit_points, 5);
        assert_eq!(config.hero.attack_dice, 2);
        assert_eq!(config.monster, CombatantStats::default());
    }
}
