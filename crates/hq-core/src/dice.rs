//! Combat dice
//!
//! A combat die has hit faces (swords) and block faces (shields). The
//! standard die is six-sided with three of each.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::RandomSource;

/// Outcome of rolling one combat die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Face {
    /// Sword face, counts toward damage
    Hit,
    /// Shield face, cancels one hit
    Block,
}

/// Rolls dice pools.
///
/// Faces are numbered `0..sides`; the first `hit_faces` of them are hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceEngine {
    sides: u32,
    hit_faces: u32,
}

impl DiceEngine {
    /// Six-sided die with three hit faces
    pub const STANDARD: DiceEngine = DiceEngine {
        sides: 6,
        hit_faces: 3,
    };

    /// Create a die. `hit_faces` is capped at `sides`; a zero-sided die
    /// becomes the standard one.
    pub fn new(sides: u32, hit_faces: u32) -> Self {
        if sides == 0 {
            return Self::STANDARD;
        }
        Self {
            sides,
            hit_faces: hit_faces.min(sides),
        }
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn hit_faces(&self) -> u32 {
        self.hit_faces
    }

    /// Roll a single die
    pub fn roll_one(&self, rng: &mut impl RandomSource) -> Face {
        if rng.rn2(self.sides) < self.hit_faces {
            Face::Hit
        } else {
            Face::Block
        }
    }

    /// Roll `n` dice
    pub fn roll_pool(&self, rng: &mut impl RandomSource, n: u32) -> Vec<Face> {
        (0..n).map(|_| self.roll_one(rng)).collect()
    }
}

impl Default for DiceEngine {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Number of hit faces in a pool
pub fn count_hits(pool: &[Face]) -> u32 {
    pool.iter().filter(|f| **f == Face::Hit).count() as u32
}

/// Number of block faces in a pool
pub fn count_blocks(pool: &[Face]) -> u32 {
    pool.iter().filter(|f| **f == Face::Block).count() as u32
}
