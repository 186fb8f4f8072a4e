//! Core game constants
//!
//! Board geometry and starting stats of the tabletop game.

/// Default board dimensions
pub const DEFAULT_WIDTH: usize = 12;
pub const DEFAULT_HEIGHT: usize = 12;

/// Smallest board that fits the four-room layout
pub const MIN_WIDTH: usize = 12;
pub const MIN_HEIGHT: usize = 12;

/// Largest board accepted by the generator
pub const MAX_DIMENSION: usize = 256;

/// Fixed room interior size
pub const ROOM_WIDTH: usize = 4;
pub const ROOM_HEIGHT: usize = 5;

/// Distance of the room anchors from the top/left edges
pub const ANCHOR_MARGIN: usize = 2;

/// Distance of the room anchors from the bottom/right edges
pub const ANCHOR_FAR_MARGIN: usize = 5;

/// Maximum jitter applied to each anchor coordinate (inclusive)
pub const ANCHOR_JITTER: u32 = 1;

/// Sides of the movement die
pub const MOVE_DIE_SIDES: u32 = 6;

/// Starting combat stats, shared by hero and monster
pub const DEFAULT_ATTACK_DICE: u32 = 2;
pub const DEFAULT_DEFENSE_DICE: u32 = 2;
pub const DEFAULT_HIT_POINTS: i32 = 3;

/// Largest attack or defense pool a combatant may roll
pub const MAX_DICE_POOL: u32 = 64;

/// Damage dealt by a trap tile
pub const DEFAULT_TRAP_DAMAGE: i32 = 1;

/// Hero overlay symbol used in text renderings
pub const HERO_SYM: char = '@';
