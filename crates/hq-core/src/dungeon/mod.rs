//! Dungeon system
//!
//! Contains the tile board, room and corridor carving, and generation.

mod corridor;
mod generation;
mod grid;
mod room;
mod tile;

pub use corridor::{CorridorWalk, dig_corridor};
pub use generation::{check_dimensions, generate};
pub use grid::{Grid, Position};
pub use room::Room;
pub use tile::Tile;
