//! Board generation
//!
//! Four fixed-size rooms sit near the corners, each wrapped in a corridor
//! ring and chained to the next by a random walk. The outer edge is opened
//! into a walkable loop, then the start, treasure, monster and trap tiles
//! are dropped in.

use tracing::debug;

use crate::consts::{
    ANCHOR_FAR_MARGIN, ANCHOR_JITTER, ANCHOR_MARGIN, MAX_DIMENSION, MIN_HEIGHT, MIN_WIDTH,
    ROOM_HEIGHT, ROOM_WIDTH,
};
use crate::error::GenerationError;
use crate::rng::RandomSource;

use super::corridor::dig_corridor;
use super::room::Room;
use super::{Grid, Position, Tile};

/// Generate a board of the requested size
pub fn generate(width: usize, height: usize, rng: &mut impl RandomSource) -> Result<Grid, GenerationError> {
    check_dimensions(width, height)?;

    let mut grid = Grid::new(width, height, Tile::Wall);

    let rooms: [Room; 4] = base_anchors(width, height).map(|anchor| place_room(anchor, width, height, rng));

    for room in &rooms {
        room.dig(&mut grid);
        room.surround_with_corridor(&mut grid);
        debug!(x = room.x, y = room.y, "carved room");
    }

    for pair in rooms.windows(2) {
        let (from, to) = (pair[0].center(), pair[1].center());
        let steps = dig_corridor(&mut grid, from, to, rng);
        debug!(%from, %to, steps, "dug corridor");
    }

    open_border(&mut grid);

    grid.set(rooms[0].center(), Tile::Start);
    grid.set(rooms[3].center(), Tile::Treasure);

    place_hazards(&mut grid, rng)?;

    Ok(grid)
}

/// Reject boards that cannot hold the room layout
pub fn check_dimensions(width: usize, height: usize) -> Result<(), GenerationError> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(GenerationError::GridTooSmall {
            width,
            height,
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
        });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(GenerationError::GridTooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// Room origins before jitter: top-left, top-right, bottom-left, bottom-right
fn base_anchors(width: usize, height: usize) -> [Position; 4] {
    let near = ANCHOR_MARGIN;
    let far_x = width - ANCHOR_FAR_MARGIN;
    let far_y = height - ANCHOR_FAR_MARGIN;
    [
        Position::new(near, near),
        Position::new(far_x, near),
        Position::new(near, far_y),
        Position::new(far_x, far_y),
    ]
}

/// Jitter an anchor and keep the room on the board
fn place_room(anchor: Position, width: usize, height: usize, rng: &mut impl RandomSource) -> Room {
    let jx = rng.rn2(ANCHOR_JITTER + 1) as usize;
    let jy = rng.rn2(ANCHOR_JITTER + 1) as usize;
    let x = (anchor.x + jx).min(width - ROOM_WIDTH);
    let y = (anchor.y + jy).min(height - ROOM_HEIGHT);
    Room::new(x, y, ROOM_WIDTH, ROOM_HEIGHT)
}

/// Make every edge cell floor
fn open_border(grid: &mut Grid) {
    let (w, h) = (grid.width(), grid.height());
    for x in 0..w {
        grid.set(Position::new(x, 0), Tile::Floor);
        grid.set(Position::new(x, h - 1), Tile::Floor);
    }
    for y in 0..h {
        grid.set(Position::new(0, y), Tile::Floor);
        grid.set(Position::new(w - 1, y), Tile::Floor);
    }
}

/// Put the monster then the trap on two distinct floor cells
fn place_hazards(grid: &mut Grid, rng: &mut impl RandomSource) -> Result<(), GenerationError> {
    let mut free = grid.positions_of(Tile::Floor);

    for tile in [Tile::Monster, Tile::Trap] {
        let pos = *rng.choose(&free).ok_or(GenerationError::NoFreeFloor)?;
        free.retain(|p| *p != pos);
        grid.set(pos, tile);
        debug!(%pos, %tile, "placed hazard");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GameRng, ScriptedRng};

    #[test]
    fn test_generation() {
        let mut rng = GameRng::new(12345);
        let grid = generate(12, 12, &mut rng).unwrap();

        assert_eq!(grid.width(), 12);
        assert_eq!(grid.height(), 12);
        for tile in [Tile::Start, Tile::Treasure, Tile::Monster, Tile::Trap] {
            assert_eq!(grid.count(tile), 1, "expected exactly one {}", tile);
        }
        assert!(grid.is_connected());
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = generate(16, 14, &mut GameRng::new(77)).unwrap();
        let b = generate(16, 14, &mut GameRng::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_border_is_walkable() {
        let grid = generate(20, 13, &mut GameRng::new(8)).unwrap();
        for x in 0..20 {
            assert!(grid.get(Position::new(x, 0)).unwrap().is_walkable());
            assert!(grid.get(Position::new(x, 12)).unwrap().is_walkable());
        }
        for y in 0..13 {
            assert!(grid.get(Position::new(0, y)).unwrap().is_walkable());
            assert!(grid.get(Position::new(19, y)).unwrap().is_walkable());
        }
    }

    #[test]
    fn test_start_and_treasure_at_room_centers() {
        // All zeros: no jitter, x-axis first on every corridor, first free cells
        let mut rng = ScriptedRng::new(vec![0]);
        let grid = generate(12, 12, &mut rng).unwrap();

        assert_eq!(grid.positions_of(Tile::Start), vec![Position::new(4, 4)]);
        assert_eq!(grid.positions_of(Tile::Treasure), vec![Position::new(9, 9)]);
        // Free list is row-major, so the first two picks land on the top edge
        assert_eq!(grid.get(Position::new(0, 0)), Some(Tile::Monster));
        assert_eq!(grid.get(Position::new(1, 0)), Some(Tile::Trap));
    }

    #[test]
    fn test_jitter_is_clamped_to_board() {
        // Always jitter by one; bottom rooms would overflow a 12 row board
        let mut rng = ScriptedRng::new(vec![1]);
        let grid = generate(12, 12, &mut rng).unwrap();
        assert_eq!(grid.positions_of(Tile::Treasure), vec![Position::new(10, 9)]);
        assert!(grid.is_connected());
    }

    #[test]
    fn test_too_small() {
        let mut rng = GameRng::new(1);
        assert!(matches!(
            generate(11, 12, &mut rng),
            Err(GenerationError::GridTooSmall { width: 11, .. })
        ));
        assert!(matches!(
            generate(12, 4, &mut rng),
            Err(GenerationError::GridTooSmall { height: 4, .. })
        ));
        assert!(matches!(
            generate(12, 1000, &mut rng),
            Err(GenerationError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_hazards_need_two_floor_cells() {
        let mut rng = ScriptedRng::new(vec![1]);
        let mut grid = Grid::from_rows(&["#..#"]).unwrap();
        place_hazards(&mut grid, &mut rng).unwrap();
        assert_eq!(grid.rows(), vec!["#TM#"]);

        let mut grid = Grid::from_rows(&["#.##"]).unwrap();
        assert_eq!(
            place_hazards(&mut grid, &mut rng),
            Err(GenerationError::NoFreeFloor)
        );
    }
}
