//! Board tile types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Contents of one board cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Tile {
    #[default]
    Wall,
    Floor,
    Start,
    Trap,
    Monster,
    Treasure,
}

impl Tile {
    /// Anything but a wall can be stepped on
    pub const fn is_walkable(&self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Trap, monster and treasure react when stepped on; cleared ones become floor
    pub const fn is_one_shot(&self) -> bool {
        matches!(self, Tile::Trap | Tile::Monster | Tile::Treasure)
    }

    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Start => 'S',
            Tile::Trap => 'T',
            Tile::Monster => 'M',
            Tile::Treasure => 'X',
        }
    }

    /// Inverse of [`Tile::symbol`]
    pub const fn from_symbol(c: char) -> Option<Tile> {
        match c {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Floor),
            'S' => Some(Tile::Start),
            'T' => Some(Tile::Trap),
            'M' => Some(Tile::Monster),
            'X' => Some(Tile::Treasure),
            _ => None,
        }
    }
}
