//! Combat system
//!
//! Hero-versus-monster dice combat. Resolution is instantaneous; the round
//! log is returned so a shell can replay it at whatever pace it likes.

mod combatant;
mod resolver;

pub use combatant::{Combatant, Role};
pub use resolver::{Combat, CombatOutcome, CombatResolver, CombatRound, DamagePolicy};
