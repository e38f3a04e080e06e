use itertools::Itertools;
use std::fmt;

use crate::cells::Coordinate;
use crate::grid::GridMap;
use crate::pathing::Distances;
use crate::utils::{self, FnvHashSet};

/// Text for the body of an open cell when a maze is printed with an overlay.
/// Bodies are three characters wide.
pub trait GridDisplay {
    fn render_cell_body(&self, coord: Coordinate) -> String;
}

impl GridDisplay for Distances {
    fn render_cell_body(&self, coord: Coordinate) -> String {
        if let Some(d) = self.distance_from_start_to(coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Coordinate>,
}
impl PathDisplay {
    pub fn new(path: &[Coordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: Coordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: Vec<Coordinate>,
    end_coordinates: Vec<Coordinate>,
}
impl StartEndPointsDisplay {
    pub fn new(starts: &[Coordinate], ends: &[Coordinate]) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts.to_vec(),
            end_coordinates: ends.to_vec(),
        }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: Coordinate) -> String {
        if self.start_coordinates.contains(&coord) {
            String::from(" S ")
        } else if self.end_coordinates.contains(&coord) {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

const WALL: char = '#';
const PATH: char = '.';
const WALL_BODY: &str = "###";

/// Rows are printed north first, so `y = height - 1` is the top line.
fn rows_north_first(grid: &GridMap) -> impl Iterator<Item = u32> {
    (0..grid.height() as u32).rev()
}

/// One character per cell: `#` for Wall, `.` for Path.
impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in rows_north_first(self) {
            let row = (0..self.width() as u32)
                .map(|x| if self.is_path(Coordinate::new(x, y)) { PATH } else { WALL })
                .join("");
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// A maze printed with an overlay filling its open cells.
pub struct Overlay<'a> {
    grid: &'a GridMap,
    display: &'a dyn GridDisplay,
}

impl<'a> Overlay<'a> {
    pub fn new(grid: &'a GridMap, display: &'a dyn GridDisplay) -> Overlay<'a> {
        Overlay { grid, display }
    }
}

impl<'a> fmt::Display for Overlay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in rows_north_first(self.grid) {
            let row = (0..self.grid.width() as u32)
                .map(|x| {
                    let coord = Coordinate::new(x, y);
                    if self.grid.is_path(coord) {
                        self.display.render_cell_body(coord)
                    } else {
                        String::from(WALL_BODY)
                    }
                })
                .join("");
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
