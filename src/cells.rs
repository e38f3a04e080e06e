use std::convert::From;

use crate::random::RandomSource;

/// A cell position on the grid. `y` grows towards the north border.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Creates a new `Coordinate` offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable (no negative components).
    /// Whether the result is inside any particular grid is for the grid to decide.
    pub fn offset(self, dir: CompassPrimary) -> Option<Coordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => y.checked_add(1).map(|y| Coordinate::new(x, y)),
            CompassPrimary::South => y.checked_sub(1).map(|y| Coordinate::new(x, y)),
            CompassPrimary::East => x.checked_add(1).map(|x| Coordinate::new(x, y)),
            CompassPrimary::West => x.checked_sub(1).map(|x| Coordinate::new(x, y)),
        }
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from(x_y_pair: (u32, u32)) -> Coordinate {
        Coordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellState {
    Wall,
    Path,
}

impl Default for CellState {
    fn default() -> CellState {
        CellState::Wall
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::South,
                                          CompassPrimary::East,
                                          CompassPrimary::West];

    /// Uniformly random cardinal direction.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> CompassPrimary {
        // Draw order is East, West, North, South; changing it changes every seeded maze.
        const DIRS_COUNT: usize = 4;
        const DIRS: [CompassPrimary; DIRS_COUNT] = [CompassPrimary::East,
                                                    CompassPrimary::West,
                                                    CompassPrimary::North,
                                                    CompassPrimary::South];
        DIRS[rng.range(0, DIRS_COUNT)]
    }

    /// Unit step `(dx, dy)` of this direction.
    #[inline]
    pub fn delta(self) -> (i64, i64) {
        match self {
            CompassPrimary::North => (0, 1),
            CompassPrimary::South => (0, -1),
            CompassPrimary::East => (1, 0),
            CompassPrimary::West => (-1, 0),
        }
    }
}
