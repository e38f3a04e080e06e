//! The corridor width constraint.
//!
//! Carving a cell is rejected when it would complete an axis aligned square of Path cells with
//! side `max_width + 1`, so no solid open block ever grows past `max_width * max_width`.

use itertools::Itertools;

use crate::cells::Coordinate;
use crate::grid::GridMap;

/// Would carving `candidate` complete a `(max_width + 1)` square of Path cells?
///
/// `candidate` is treated as if it were already Path. Cells outside the grid count as not Path,
/// so a square hanging over the grid edge can never be completed.
pub fn would_exceed_width(grid: &GridMap, candidate: Coordinate, max_width: usize) -> bool {

    let side = max_width.saturating_add(1);
    if side > grid.width() || side > grid.height() {
        return false;
    }

    let n = max_width as i64;
    let (cx, cy) = (candidate.x as i64, candidate.y as i64);

    // Every square containing the candidate has its lower left corner in this range.
    (cx - n..=cx)
        .cartesian_product(cy - n..=cy)
        .any(|(x, y)| is_square_completed_by(grid, (x, y), side as i64, candidate))
}

fn is_square_completed_by(grid: &GridMap,
                          origin: (i64, i64),
                          side: i64,
                          candidate: Coordinate)
                          -> bool {
    let (ox, oy) = origin;
    if ox < 0 || oy < 0 || ox + side > grid.width() as i64 || oy + side > grid.height() as i64 {
        return false;
    }

    (ox..ox + side)
        .cartesian_product(oy..oy + side)
        .map(|(x, y)| Coordinate::new(x as u32, y as u32))
        .filter(|cell| *cell != candidate)
        .all(|cell| grid.is_path(cell))
}
