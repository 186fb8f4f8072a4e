//! Rectangular tile board

use std::collections::VecDeque;
use std::fmt;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::action::Direction;
use crate::error::GridError;

use super::Tile;

/// Board coordinates, `x` to the right and `y` downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance
    pub fn distance(&self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed-size board stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create a board with every cell set to `fill`
    pub fn new(width: usize, height: usize, fill: Tile) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Parse a board from rows of tile symbols
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.chars().count(),
                });
            }
            for (x, c) in row.chars().enumerate() {
                let tile = Tile::from_symbol(c).ok_or(GridError::UnknownSymbol { symbol: c, x, y })?;
                cells.push(tile);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if signed coordinates fall on the board
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < self.width && pos.y < self.height {
            Some(pos.y * self.width + pos.x)
        } else {
            None
        }
    }

    /// Tile at `pos`, `None` off the board
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the tile at `pos`. Off-board writes are ignored and
    /// reported as `false`.
    pub fn set(&mut self, pos: Position, tile: Tile) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Cell one step from `pos` in `direction`, if on the board
    pub fn offset(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let nx = pos.x as i64 + dx as i64;
        let ny = pos.y as i64 + dy as i64;
        if self.in_bounds(nx, ny) {
            Some(Position::new(nx as usize, ny as usize))
        } else {
            None
        }
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    /// Positions holding `tile`, row-major
    pub fn positions_of(&self, tile: Tile) -> Vec<Position> {
        self.positions().filter(|p| self.get(*p) == Some(tile)).collect()
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|t| **t == tile).count()
    }

    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|t| t.is_walkable()).count()
    }

    /// Flood fill over walkable tiles with 4-directional steps
    pub fn reachable_from(&self, start: Position) -> HashSet<Position> {
        let mut seen = HashSet::new();
        if !self.get(start).is_some_and(|t| t.is_walkable()) {
            return seen;
        }

        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(pos) = queue.pop_front() {
            for direction in Direction::iter() {
                if let Some(next) = self.offset(pos, direction)
                    && self.get(next).is_some_and(|t| t.is_walkable())
                    && seen.insert(next)
                {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Every walkable tile can reach every other one.
    ///
    /// Flood fills from the Start tile, or from the first walkable tile when
    /// the start has already been taken off the board.
    pub fn is_connected(&self) -> bool {
        let origin = self
            .positions_of(Tile::Start)
            .first()
            .copied()
            .or_else(|| self.positions().find(|p| self.get(*p).is_some_and(|t| t.is_walkable())));

        match origin {
            Some(origin) => self.reachable_from(origin).len() == self.walkable_count(),
            None => true,
        }
    }

    /// One string of tile symbols per row
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(Tile::symbol).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
