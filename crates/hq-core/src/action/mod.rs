//! Player action system
//!
//! The three inputs a shell can send to a game.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Roll the movement die
    Roll,
    /// Step one cell
    Move(Direction),
    /// Throw the game away and start over on a new board
    Reset,
}

/// Orthogonal step direction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "up", serialize = "u", serialize = "north")]
    Up,
    #[strum(to_string = "down", serialize = "d", serialize = "south")]
    Down,
    #[strum(to_string = "left", serialize = "l", serialize = "west")]
    Left,
    #[strum(to_string = "right", serialize = "r", serialize = "east")]
    Right,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction
    pub const fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
