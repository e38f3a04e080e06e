//! Density growth: widen the skeleton into a maze of the requested openness.
//!
//! A randomised growing tree. Wall cells bordering the open region form a frontier; a random
//! frontier cell is opened unless that would break the width constraint, and its wall
//! neighbours join the frontier. Every opened cell touches an already open cell, so the open
//! region stays a single connected component.

use bit_set::BitSet;
use log::debug;

use crate::cells::Coordinate;
use crate::config::density_target;
use crate::grid::GridMap;
use crate::random::RandomSource;
use crate::width_limiter::would_exceed_width;

/// What a fill did.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct FillReport {
    /// Desired Path cell count.
    pub target: usize,
    /// Cells opened by the fill.
    pub carved: usize,
    /// Candidates thrown away by the width constraint.
    pub rejected: usize,
    /// The frontier ran dry before the target was met.
    pub exhausted: bool,
}

/// Candidate wall cells. Each coordinate is queued at most once per fill, so a candidate
/// rejected by the width constraint is never looked at again.
#[derive(Debug)]
struct Frontier {
    candidates: Vec<Coordinate>,
    queued: BitSet,
}

impl Frontier {
    fn new(grid: &GridMap) -> Frontier {
        let mut frontier = Frontier {
            candidates: Vec::new(),
            queued: BitSet::with_capacity(grid.size()),
        };
        for open in grid.path_coordinates() {
            frontier.offer_neighbours(grid, open);
        }
        frontier
    }

    fn offer_neighbours(&mut self, grid: &GridMap, coord: Coordinate) {
        for neighbour in grid.neighbours(coord).iter().cloned() {
            if !grid.is_wall(neighbour) {
                continue;
            }
            if let Some(index) = grid.row_major_index(neighbour) {
                if self.queued.insert(index) {
                    self.candidates.push(neighbour);
                }
            }
        }
    }

    /// Remove a uniformly chosen candidate. Order is not preserved.
    fn take_random<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Coordinate> {
        if self.candidates.is_empty() {
            None
        } else {
            let pick = rng.range(0, self.candidates.len());
            Some(self.candidates.swap_remove(pick))
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Grow the open region of `grid` until it holds `round(size * (1 - wall_density))` Path cells
/// or no candidate is left.
pub fn fill<R>(grid: &mut GridMap, wall_density: f64, max_path_width: usize, rng: &mut R) -> FillReport
    where R: RandomSource + ?Sized
{
    let target = density_target(grid.width(), grid.height(), wall_density);
    let mut frontier = Frontier::new(grid);
    let mut carved = 0;
    let mut rejected = 0;

    while !frontier.is_empty() && grid.path_count() < target {
        let candidate = match frontier.take_random(rng) {
            Some(c) => c,
            None => break,
        };

        if would_exceed_width(grid, candidate, max_path_width) {
            rejected += 1;
            continue;
        }

        grid.carve(candidate);
        carved += 1;
        frontier.offer_neighbours(grid, candidate);
    }

    let report = FillReport {
        target,
        carved,
        rejected,
        exhausted: grid.path_count() < target,
    };
    debug!("density fill: {:?}, {} of {} cells open", report, grid.path_count(), grid.size());
    report
}
