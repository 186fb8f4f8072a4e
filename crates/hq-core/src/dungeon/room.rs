//! Rooms used while carving a board

use super::{Grid, Position, Tile};

/// Rectangular room interior. Only lives during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// X coordinate of room interior (left edge)
    pub x: usize,
    /// Y coordinate of room interior (top edge)
    pub y: usize,
    /// Width of room interior
    pub width: usize,
    /// Height of room interior
    pub height: usize,
}

impl Room {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get room center
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Turn the interior into floor, clipped to the board
    pub fn dig(&self, grid: &mut Grid) {
        for y in self.y..self.y + self.height {
            for x in self.x..self.x + self.width {
                grid.set(Position::new(x, y), Tile::Floor);
            }
        }
    }

    /// Turn the one-cell ring around the interior into floor, clipped to
    /// the board.
    pub fn surround_with_corridor(&self, grid: &mut Grid) {
        let left = self.x as i64 - 1;
        let top = self.y as i64 - 1;
        let right = (self.x + self.width) as i64;
        let bottom = (self.y + self.height) as i64;

        for x in left..=right {
            for y in [top, bottom] {
                carve(grid, x, y);
            }
        }
        for y in top..=bottom {
            for x in [left, right] {
                carve(grid, x, y);
            }
        }
    }
}

fn carve(grid: &mut Grid, x: i64, y: i64) {
    if grid.in_bounds(x, y) {
        grid.set(Position::new(x as usize, y as usize), Tile::Floor);
    }
}
