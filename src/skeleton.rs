//! Skeleton carving: the guaranteed connected core of every maze.
//!
//! The grid centre is joined to one exit on each border by a biased random walk. Every carved
//! cell is cardinally adjacent to the previous one and each walk starts from the already open
//! centre, so the centre and the exits end up in one connected component.

use log::{trace, warn};
use smallvec::SmallVec;

use crate::cells::{CompassPrimary, Coordinate};
use crate::config::WalkFallback;
use crate::grid::GridMap;
use crate::random::RandomSource;

/// Chance that a walk step heads straight for the target rather than in a random direction.
pub const GREEDY_STEP_PROBABILITY: f64 = 0.7;

/// The landmarks carved by `carve_skeleton`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Skeleton {
    pub center: Coordinate,
    /// Exits in North, South, East, West order.
    pub exits: [Coordinate; 4],
    /// Walks that ran out of steps before reaching their exit.
    pub exhausted_walks: SmallVec<[CompassPrimary; 4]>,
}

impl Skeleton {
    pub fn exit(&self, side: CompassPrimary) -> Coordinate {
        match side {
            CompassPrimary::North => self.exits[0],
            CompassPrimary::South => self.exits[1],
            CompassPrimary::East => self.exits[2],
            CompassPrimary::West => self.exits[3],
        }
    }
}

type Position = (i64, i64);

/// Carve the centre, four border exits and the walks joining them.
///
/// The grid must not be empty.
pub fn carve_skeleton<R>(grid: &mut GridMap, rng: &mut R, fallback: WalkFallback) -> Skeleton
    where R: RandomSource + ?Sized
{
    let (width, height) = (grid.width(), grid.height());
    let center = Coordinate::new((width / 2) as u32, (height / 2) as u32);
    grid.carve(center);

    let north = Coordinate::new(random_exit_offset(rng, width), (height - 1) as u32);
    let south = Coordinate::new(random_exit_offset(rng, width), 0);
    let east = Coordinate::new((width - 1) as u32, random_exit_offset(rng, height));
    let west = Coordinate::new(0, random_exit_offset(rng, height));
    let exits = [north, south, east, west];
    for exit in &exits {
        grid.carve(*exit);
    }

    let mut exhausted_walks = SmallVec::new();
    for (side, exit) in CompassPrimary::ALL.iter().zip(exits.iter()) {
        let stopped_at = biased_walk(grid, rng, center, *exit);
        if stopped_at != position(*exit) {
            warn!("skeleton walk to the {:?} exit {:?} ran out of steps at {:?}",
                  side, exit, stopped_at);
            exhausted_walks.push(*side);
            if fallback == WalkFallback::RouteDirect {
                route_orthogonally(grid, stopped_at, position(*exit));
            }
        }
    }

    Skeleton {
        center,
        exits,
        exhausted_walks,
    }
}

/// Offset along a border of length `extent`, never a corner.
fn random_exit_offset<R: RandomSource + ?Sized>(rng: &mut R, extent: usize) -> u32 {
    if extent >= 3 {
        rng.range(1, extent - 1) as u32
    } else {
        // Too short to have an interior: use the middle of the side.
        (extent / 2) as u32
    }
}

/// Keep a walk off the border, `[1, extent - 2]`, when the extent has an interior.
fn clamp_interior(v: i64, extent: usize) -> i64 {
    let extent = extent as i64;
    if extent >= 3 {
        v.max(1).min(extent - 2)
    } else {
        v.max(0).min(extent - 1)
    }
}

#[inline]
fn position(coord: Coordinate) -> Position {
    (coord.x as i64, coord.y as i64)
}

#[inline]
fn carve_at(grid: &mut GridMap, (x, y): Position) {
    grid.carve(Coordinate::new(x as u32, y as u32));
}

/// Walk from `from` towards `to` for at most `grid.size()` steps, carving every cell stepped
/// on. Returns where the walk stopped, which is `to` unless the step cap ran out first.
fn biased_walk<R>(grid: &mut GridMap, rng: &mut R, from: Coordinate, to: Coordinate) -> Position
    where R: RandomSource + ?Sized
{
    let (width, height) = (grid.width(), grid.height());
    let target = position(to);
    let mut current = position(from);

    for _ in 0..grid.size() {
        if current == target {
            break;
        }

        let (dx, dy) = (target.0 - current.0, target.1 - current.1);
        let mut next = current;
        if rng.unit() < GREEDY_STEP_PROBABILITY {
            if dx.abs() > dy.abs() {
                next.0 += dx.signum();
            } else {
                next.1 += dy.signum();
            }
        } else {
            let (step_x, step_y) = CompassPrimary::random(rng).delta();
            next.0 += step_x;
            next.1 += step_y;
        }

        // Only the final step may land on the border.
        if next != target {
            next = (clamp_interior(next.0, width), clamp_interior(next.1, height));
        }

        carve_at(grid, next);
        current = next;
    }

    trace!("walk {:?} -> {:?} stopped at {:?}", from, to, current);
    current
}

/// Straight two leg route between two cells: the leg along the axis where the target is off
/// the border goes first, so only the last step touches the border.
fn route_orthogonally(grid: &mut GridMap, from: Position, to: Position) {
    let target_on_south_or_north_border = to.1 == 0 || to.1 == grid.height() as i64 - 1;
    let mut current = from;

    let step_x = |grid: &mut GridMap, current: &mut Position| {
        while current.0 != to.0 {
            current.0 += (to.0 - current.0).signum();
            carve_at(grid, *current);
        }
    };
    if target_on_south_or_north_border {
        step_x(grid, &mut current);
    }
    while current.1 != to.1 {
        current.1 += (to.1 - current.1).signum();
        carve_at(grid, current);
    }
    step_x(grid, &mut current);
}
