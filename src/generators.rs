//! Maze generation: validate a config, carve the skeleton, grow it to density.
//!
//! ```
//! use density_mazes::{config::MazeConfig, generators};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let grid = generators::generate(&MazeConfig::default(), &mut rng).unwrap();
//! assert_eq!(grid.size(), 21 * 21);
//! ```

use log::debug;

use crate::config::MazeConfig;
use crate::density::{self, FillReport};
use crate::errors::*;
use crate::grid::{GenerationPhase, GridMap};
use crate::random::RandomSource;
use crate::skeleton::{self, Skeleton};
use crate::units::{Height, Width};

/// A finished maze and how it was made.
#[derive(Debug, Clone)]
pub struct Maze {
    pub grid: GridMap,
    pub skeleton: Skeleton,
    pub fill: FillReport,
}

impl Maze {
    pub fn into_grid(self) -> GridMap {
        self.grid
    }
}

/// A validated config, ready to produce any number of independent mazes.
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    config: MazeConfig,
}

impl MazeGenerator {
    /// Fails fast, before any grid exists, if a config field is out of range.
    pub fn new(config: MazeConfig) -> Result<MazeGenerator> {
        config.validate()?;
        Ok(MazeGenerator { config })
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Build one maze. The same config and random stream always give the same maze.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Maze {
        let config = &self.config;
        let mut grid = GridMap::new(Width(config.width), Height(config.height));

        let skeleton = skeleton::carve_skeleton(&mut grid, rng, config.walk_fallback);
        grid.advance_phase(GenerationPhase::SkeletonCarved);
        debug!("skeleton carved: {} cells, centre {:?}, exits {:?}",
               grid.path_count(), skeleton.center, skeleton.exits);

        let fill = density::fill(&mut grid, config.wall_density, config.max_path_width, rng);
        grid.advance_phase(GenerationPhase::DensityFilled);

        grid.advance_phase(GenerationPhase::Ready);
        debug!("maze ready: {:?}", grid);

        Maze { grid, skeleton, fill }
    }
}

/// Validate `config` and build one maze grid from it.
pub fn generate<R: RandomSource + ?Sized>(config: &MazeConfig, rng: &mut R) -> Result<GridMap> {
    let generator = MazeGenerator::new(*config)?;
    Ok(generator.generate(rng).into_grid())
}

#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};
    use rand::{rngs::StdRng, SeedableRng};
    use std::cmp;

    use super::*;
    use crate::cells::{CellState, Coordinate};
    use crate::config::WalkFallback;
    use crate::grid::Region;
    use crate::pathing;

    fn maze(config: MazeConfig, seed: u64) -> Maze {
        let mut rng = StdRng::seed_from_u64(seed);
        MazeGenerator::new(config).expect("valid config").generate(&mut rng)
    }

    /// Path cells the skeleton alone opens, replayed from the same seed.
    fn skeleton_only(config: MazeConfig, seed: u64) -> GridMap {
        let mut grid = GridMap::new(Width(config.width), Height(config.height));
        let mut rng = StdRng::seed_from_u64(seed);
        skeleton::carve_skeleton(&mut grid, &mut rng, config.walk_fallback);
        grid
    }

    /// Every fully open `side` x `side` block, by lower left corner.
    fn open_blocks(grid: &GridMap, side: usize) -> Vec<Coordinate> {
        let mut blocks = vec![];
        if side > grid.width() || side > grid.height() {
            return blocks;
        }
        for x in 0..=(grid.width() - side) as u32 {
            for y in 0..=(grid.height() - side) as u32 {
                let side = side as u32;
                let all_open = (x..x + side)
                    .all(|bx| (y..y + side).all(|by| grid.is_path(Coordinate::new(bx, by))));
                if all_open {
                    blocks.push(Coordinate::new(x, y));
                }
            }
        }
        blocks
    }

    /// Only the unconstrained skeleton walks can leave an over wide open block behind.
    fn over_wide_blocks_are_skeleton_only(grid: &GridMap, skeleton: &GridMap, max_path_width: usize) -> bool {
        let side = max_path_width + 1;
        open_blocks(grid, side).iter().all(|corner| {
            (corner.x..corner.x + side as u32).all(|bx| {
                (corner.y..corner.y + side as u32).all(|by| skeleton.is_path(Coordinate::new(bx, by)))
            })
        })
    }

    #[test]
    fn grid_has_every_cell_defined() {
        let m = maze(MazeConfig::new(13, 9, 0.5, 2), 1);
        assert_eq!(m.grid.width(), 13);
        assert_eq!(m.grid.height(), 9);
        assert_eq!(m.grid.iter().count(), 117);
        assert!(m.grid.iter().all(|c| m.grid.get(c).is_some()));
        assert_eq!(m.grid.phase(), GenerationPhase::Ready);
    }

    #[test]
    fn scenario_skeleton_only_small_grid() {
        let config = MazeConfig::new(5, 5, 1.0, 1);
        for seed in 0..10 {
            let m = maze(config, seed);
            assert_eq!(m.fill.carved, 0);
            assert_eq!(m.grid.path_coordinates().collect::<Vec<_>>(),
                       skeleton_only(config, seed).path_coordinates().collect::<Vec<_>>());
            assert!(m.grid.is_path(Coordinate::new(2, 2)));
            for exit in &m.skeleton.exits {
                assert!(m.grid.is_path(*exit));
            }
            assert!(pathing::is_single_component(&m.grid));
        }
    }

    #[test]
    fn scenario_fully_open() {
        let m = maze(MazeConfig::new(21, 21, 0.0, 21), 2);
        assert_eq!(m.grid.path_count(), 441);
        assert!(m.grid.iter().all(|c| m.grid.get(c) == Some(CellState::Path)));
        assert!(!m.fill.exhausted);
    }

    #[test]
    fn scenario_narrow_corridors() {
        let config = MazeConfig::new(21, 21, 0.6, 1);
        for seed in 0..10 {
            let m = maze(config, seed);
            let skeleton = skeleton_only(config, seed);

            assert_eq!(m.fill.target, 176);
            assert!(m.grid.path_count() <= cmp::max(176, skeleton.path_count()));
            assert!(over_wide_blocks_are_skeleton_only(&m.grid, &skeleton, 1));

            let distances = pathing::Distances::new(&m.grid, Coordinate::new(10, 10)).unwrap();
            assert_eq!(distances.reachable_count(), m.grid.path_count());
        }
    }

    #[test]
    fn scenario_zero_width_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(&MazeConfig::new(0, 21, 0.6, 1), &mut rng).unwrap_err();
        match *err.kind() {
            ErrorKind::InvalidConfig(field, _) => assert_eq!(field, "width"),
            ref other => panic!("unexpected error {:?}", other),
        }
        assert!(MazeGenerator::new(MazeConfig::new(21, 21, 0.6, 0)).is_err());
    }

    #[test]
    fn same_seed_same_maze() {
        let config = MazeConfig::new(31, 17, 0.45, 2);
        let a = maze(config, 1234);
        let b = maze(config, 1234);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.skeleton, b.skeleton);
        assert_eq!(a.fill, b.fill);
    }

    #[test]
    fn level_selector_does_not_change_the_maze() {
        let mut themed = MazeConfig::new(15, 15, 0.5, 1);
        themed.level = 7;
        assert_eq!(maze(themed, 9).grid, maze(MazeConfig::new(15, 15, 0.5, 1), 9).grid);
    }

    #[test]
    fn generated_grid_accepts_one_region_carve() {
        let mut grid = maze(MazeConfig::default(), 5).into_grid();
        let before = grid.path_count();
        let carved = grid.carve_region(Region::new(2, 2, 3, 3)).unwrap();
        assert_eq!(grid.path_count(), before + carved);
        assert!((2..5).all(|x| (2..5).all(|y| grid.is_path(Coordinate::new(x, y)))));
    }

    #[test]
    fn strict_walks_still_open_centre_and_exits() {
        let mut config = MazeConfig::new(9, 9, 0.7, 1);
        config.walk_fallback = WalkFallback::Stop;
        for seed in 0..10 {
            let m = maze(config, seed);
            assert!(m.grid.is_path(m.skeleton.center));
            for exit in &m.skeleton.exits {
                assert!(m.grid.is_path(*exit));
            }
        }
    }

    #[test]
    fn quickcheck_generated_mazes_hold_their_invariants() {

        fn p(seed: u64, w: u8, h: u8, density: u8, max_width: u8) -> TestResult {
            let config = MazeConfig::new(5 + (w % 27) as usize,
                                         5 + (h % 27) as usize,
                                         density as f64 / 255.0,
                                         1 + (max_width % 4) as usize);
            let m = maze(config, seed);
            let skeleton = skeleton_only(config, seed);
            let target = config.path_target();

            let connected = pathing::is_single_component(&m.grid);
            let landmarks_open = m.grid.is_path(m.skeleton.center) &&
                                 m.skeleton.exits.iter().all(|exit| m.grid.is_path(*exit));
            let within_target = m.grid.path_count() <= cmp::max(target, skeleton.path_count());
            let met_target_unless_exhausted = m.fill.exhausted || m.grid.path_count() >= target;
            let keeps_width = over_wide_blocks_are_skeleton_only(&m.grid, &skeleton, config.max_path_width);
            let skeleton_kept = skeleton.path_coordinates().all(|c| m.grid.is_path(c));

            TestResult::from_bool(connected && landmarks_open && within_target &&
                                  met_target_unless_exhausted && keeps_width && skeleton_kept)
        }
        quickcheck(p as fn(u64, u8, u8, u8, u8) -> TestResult)
    }
}
