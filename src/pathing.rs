use smallvec::SmallVec;

use crate::cells::Coordinate;
use crate::grid::GridMap;
use crate::utils;
use crate::utils::FnvHashMap;


/// Step counts from one Path cell to every Path cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: Coordinate,
    distances: FnvHashMap<Coordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill outwards from `start_coordinate` through 4-adjacent Path cells.
    /// Returns None unless the start is a Path cell of the grid.
    pub fn new(grid: &GridMap, start_coordinate: Coordinate) -> Option<Distances> {

        if !grid.is_path(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(grid.path_count());
        distances.insert(start_coordinate, 0);

        // Every step costs one, so the first time a cell is reached is the shortest distance to it
        // and the distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {

                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for neighbour in grid.neighbours(*cell_coord).iter().cloned() {
                    if grid.is_path(neighbour) && !distances.contains_key(&neighbour) {
                        distances.insert(neighbour, distance_to_cell + 1);
                        new_frontier.push(neighbour);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Coordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// Number of Path cells reachable from the start, the start included.
    #[inline(always)]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: Coordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    pub fn furthest_points_on_grid(&self) -> SmallVec<[Coordinate; 8]> {
        let mut furthest = SmallVec::<[Coordinate; 8]>::new();
        let furthest_distance = self.max();

        for (coord, distance) in self.distances.iter() {
            if *distance == furthest_distance {
                furthest.push(*coord);
            }
        }
        furthest.sort();
        furthest
    }
}

/// Do all Path cells form one 4-connected region? A grid without Path cells trivially does.
pub fn is_single_component(grid: &GridMap) -> bool {
    match grid.path_coordinates().next() {
        Some(first) => Distances::new(grid, first)
            .map_or(false, |distances| distances.reachable_count() == grid.path_count()),
        None => true,
    }
}

/// Cells from the distances' start to `end_point`, both included.
/// Returns None if `end_point` cannot be reached.
pub fn shortest_path(grid: &GridMap,
                     distances_from_start: &Distances,
                     end_point: Coordinate)
                     -> Option<Vec<Coordinate>> {

    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;
    let mut path = vec![end_point];
    let mut current_coord = end_point;

    while current_coord != distances_from_start.start() {

        // Any open neighbour one step closer to the start will do.
        let closer = grid.neighbours(current_coord)
            .iter()
            .cloned()
            .find(|neighbour| {
                distances_from_start.distance_from_start_to(*neighbour) == Some(current_distance - 1)
            })?;

        current_coord = closer;
        current_distance -= 1;
        path.push(current_coord);
    }

    path.reverse();
    Some(path)
}


#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};
    use std::u32;

    use super::*;
    use crate::units::{Height, Width};

    static OUT_OF_GRID_COORDINATE: Coordinate = Coordinate {
        x: u32::MAX,
        y: u32::MAX,
    };

    fn grid_with_paths(w: usize, h: usize, paths: &[(u32, u32)]) -> GridMap {
        let mut g = GridMap::new(Width(w), Height(h));
        for &xy in paths {
            g.carve(Coordinate::from(xy));
        }
        g
    }

    fn gc(x: u32, y: u32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn distances_construction_requires_an_open_start_coordinate() {
        let g = grid_with_paths(3, 3, &[(1, 1)]);
        assert!(Distances::new(&g, OUT_OF_GRID_COORDINATE).is_none());
        assert!(Distances::new(&g, gc(0, 0)).is_none());
        assert!(Distances::new(&g, gc(1, 1)).is_some());
    }

    #[test]
    fn start() {
        let g = grid_with_paths(3, 3, &[(1, 1)]);
        let distances = Distances::new(&g, gc(1, 1)).unwrap();
        assert_eq!(distances.start(), gc(1, 1));
        assert_eq!(distances.max(), 0);
        assert_eq!(distances.reachable_count(), 1);
    }

    #[test]
    fn walls_block_the_flood() {
        // Two open cells separated by a wall.
        let g = grid_with_paths(3, 1, &[(0, 0), (2, 0)]);
        let distances = Distances::new(&g, gc(0, 0)).unwrap();
        assert_eq!(distances.distance_from_start_to(gc(2, 0)), None);
        assert_eq!(distances.distance_from_start_to(gc(1, 0)), None);
        assert_eq!(distances.distance_from_start_to(OUT_OF_GRID_COORDINATE), None);
        assert!(!is_single_component(&g));
    }

    #[test]
    fn distances_on_open_grid() {
        let g = grid_with_paths(2, 2, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let distances = Distances::new(&g, gc(0, 0)).unwrap();

        assert_eq!(distances.distance_from_start_to(gc(0, 0)), Some(0));
        assert_eq!(distances.distance_from_start_to(gc(1, 0)), Some(1));
        assert_eq!(distances.distance_from_start_to(gc(0, 1)), Some(1));
        assert_eq!(distances.distance_from_start_to(gc(1, 1)), Some(2));
        assert_eq!(distances.max(), 2);
        assert_eq!(&*distances.furthest_points_on_grid(), &[gc(1, 1)]);
        assert!(is_single_component(&g));
    }

    #[test]
    fn shortest_path_follows_the_corridor() {
        // An L shaped corridor: (0,0) -> (2,0) -> (2,2)
        let g = grid_with_paths(3, 3, &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
        let distances = Distances::new(&g, gc(0, 0)).unwrap();
        let path = shortest_path(&g, &distances, gc(2, 2)).unwrap();
        assert_eq!(path, vec![gc(0, 0), gc(1, 0), gc(2, 0), gc(2, 1), gc(2, 2)]);

        assert_eq!(shortest_path(&g, &distances, gc(0, 0)).unwrap(), vec![gc(0, 0)]);
        assert_eq!(shortest_path(&g, &distances, gc(1, 1)), None);
    }

    #[test]
    fn empty_grid_is_one_component() {
        let g = grid_with_paths(4, 4, &[]);
        assert!(is_single_component(&g));
    }

    #[test]
    fn quickcheck_straight_corridor_distances() {

        fn p(length: u8) -> TestResult {
            if length == 0 {
                return TestResult::discard();
            }
            let cells: Vec<(u32, u32)> = (0..length as u32).map(|x| (x, 0)).collect();
            let g = grid_with_paths(length as usize, 1, &cells);
            let distances = Distances::new(&g, gc(0, 0)).unwrap();
            TestResult::from_bool(distances.max() == length as u32 - 1 &&
                                  distances.reachable_count() == length as usize)
        }
        quickcheck(p as fn(u8) -> TestResult)
    }
}
