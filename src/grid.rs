use bit_set::BitSet;
use error_chain::bail;
use smallvec::SmallVec;
use std::fmt;

use crate::cells::{CellState, CompassPrimary, Coordinate};
use crate::errors::*;
use crate::units::{Height, Width};

pub type CoordinateSmallVec = SmallVec<[Coordinate; 4]>;

/// Where a grid is in its one-way generation lifecycle.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd, Hash)]
pub enum GenerationPhase {
    Empty,
    SkeletonCarved,
    DensityFilled,
    Ready,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellAccessError {
    OutOfBounds(Coordinate),
}

/// An axis aligned block of cells, `x..x+width` by `y..y+height`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Region {
        Region { x, y, width, height }
    }
}

/// The maze playfield: a width * height block of cells that are either Wall or Path.
///
/// Only the Path cells are stored, as bits in row major order (`index = y * width + x`).
#[derive(Clone, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    paths: BitSet,
    phase: GenerationPhase,
}

impl fmt::Debug for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GridMap :: width: {}, height: {}, paths: {}, phase: {:?}",
               self.width, self.height, self.path_count(), self.phase)
    }
}

impl GridMap {
    /// An all Wall grid in the `Empty` phase.
    pub fn new(width: Width, height: Height) -> GridMap {
        let (Width(w), Height(h)) = (width, height);
        GridMap {
            width: w,
            height: h,
            paths: BitSet::with_capacity(w * h),
            phase: GenerationPhase::Empty,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// Number of Path cells.
    #[inline]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        (coord.x as usize) < self.width && (coord.y as usize) < self.height
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0..grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn row_major_index(&self, coord: Coordinate) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// The state of a cell, or None for a coordinate outside the grid.
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Option<CellState> {
        self.row_major_index(coord).map(|index| if self.paths.contains(index) {
            CellState::Path
        } else {
            CellState::Wall
        })
    }

    /// Is the cell a Path cell? Cells outside the grid are not.
    #[inline]
    pub fn is_path(&self, coord: Coordinate) -> bool {
        self.get(coord) == Some(CellState::Path)
    }

    #[inline]
    pub fn is_wall(&self, coord: Coordinate) -> bool {
        self.get(coord) == Some(CellState::Wall)
    }

    /// Cells to the North, South, East or West of a cell that are inside the grid.
    pub fn neighbours(&self, coord: Coordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| coord.offset(*dir))
            .filter(|neighbour| self.in_bounds(*neighbour))
            .collect()
    }

    /// Every coordinate, row by row from `y = 0`.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> {
        let width = self.width;
        (0..self.size()).map(move |index| {
            Coordinate::new((index % width) as u32, (index / width) as u32)
        })
    }

    /// The Path coordinates in row major order.
    pub fn path_coordinates<'a>(&'a self) -> impl Iterator<Item = Coordinate> + 'a {
        let width = self.width;
        self.paths
            .iter()
            .map(move |index| Coordinate::new((index % width) as u32, (index / width) as u32))
    }

    /// Converts every cell of `region` that lies inside the grid to Path, returning how many
    /// Wall cells changed.
    ///
    /// This is the only edit allowed once generation has finished. The width constraint is not
    /// re-checked: whoever carves the region owns the consequences.
    pub fn carve_region(&mut self, region: Region) -> Result<usize> {
        if self.phase != GenerationPhase::Ready {
            bail!(ErrorKind::GridNotReady(self.phase));
        }

        let x_end = (region.x as usize).saturating_add(region.width as usize).min(self.width);
        let y_end = (region.y as usize).saturating_add(region.height as usize).min(self.height);
        let mut carved = 0;
        for y in (region.y as usize)..y_end {
            for x in (region.x as usize)..x_end {
                if self.carve(Coordinate::new(x as u32, y as u32)) {
                    carved += 1;
                }
            }
        }
        Ok(carved)
    }

    pub(crate) fn set(&mut self, coord: Coordinate, state: CellState) -> ::std::result::Result<(), CellAccessError> {
        let index = self.row_major_index(coord).ok_or(CellAccessError::OutOfBounds(coord))?;
        match state {
            CellState::Path => self.paths.insert(index),
            CellState::Wall => self.paths.remove(index),
        };
        Ok(())
    }

    /// Turn a Wall cell into Path. Returns true if the cell changed; coordinates outside the
    /// grid are ignored.
    pub(crate) fn carve(&mut self, coord: Coordinate) -> bool {
        let was_wall = self.is_wall(coord);
        was_wall && self.set(coord, CellState::Path).is_ok()
    }

    pub(crate) fn advance_phase(&mut self, next: GenerationPhase) {
        debug_assert!(next > self.phase, "generation phases only move forward");
        self.phase = next;
    }
}
