//! Corridor digging
//!
//! Corridors are random monotone walks between two points. Each step moves
//! one cell along a single axis toward the target, so a walk always takes
//! exactly the Manhattan distance in steps and leaves a 4-connected trail.

use crate::rng::RandomSource;

use super::{Grid, Position, Tile};

/// Stateful walk from `current` to `target`
///
/// The axis to advance is drawn with weight equal to the distance left on
/// that axis, which bends the path without ever stalling. Once one axis is
/// aligned only the other one moves.
#[derive(Debug)]
pub struct CorridorWalk<'a, R: RandomSource> {
    current: Position,
    target: Position,
    rng: &'a mut R,
}

impl<'a, R: RandomSource> CorridorWalk<'a, R> {
    pub fn new(from: Position, to: Position, rng: &'a mut R) -> Self {
        Self {
            current: from,
            target: to,
            rng,
        }
    }
}

fn toward(from: usize, to: usize) -> usize {
    if to > from { from + 1 } else { from - 1 }
}

impl<R: RandomSource> Iterator for CorridorWalk<'_, R> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let dx = self.current.x.abs_diff(self.target.x);
        let dy = self.current.y.abs_diff(self.target.y);

        let advance_x = match (dx, dy) {
            (0, 0) => return None,
            (_, 0) => true,
            (0, _) => false,
            _ => (self.rng.rn2((dx + dy) as u32) as usize) < dx,
        };

        if advance_x {
            self.current.x = toward(self.current.x, self.target.x);
        } else {
            self.current.y = toward(self.current.y, self.target.y);
        }
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.current.distance(self.target);
        (left, Some(left))
    }
}

impl<R: RandomSource> ExactSizeIterator for CorridorWalk<'_, R> {}

/// Dig a corridor between two points, returning the number of cells visited
pub fn dig_corridor(grid: &mut Grid, from: Position, to: Position, rng: &mut impl RandomSource) -> usize {
    grid.set(from, Tile::Floor);
    let mut steps = 0;
    for pos in CorridorWalk::new(from, to, rng) {
        grid.set(pos, Tile::Floor);
        steps += 1;
    }
    steps
}
