use error_chain::bail;

use crate::errors::*;

/// What to do when a skeleton walk uses up its step budget before reaching its exit.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WalkFallback {
    /// Finish the walk with a straight two leg route, keeping the exit connected.
    RouteDirect,
    /// Leave the walk where it stopped. The exit may end up disconnected from the centre.
    Stop,
}

impl Default for WalkFallback {
    fn default() -> WalkFallback {
        WalkFallback::RouteDirect
    }
}

/// Designer facing knobs for one maze.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct MazeConfig {
    /// Odd sizes give a unique centre cell.
    pub width: usize,
    pub height: usize,
    /// 0.0 = all path, 1.0 = nothing beyond the skeleton.
    pub wall_density: f64,
    /// Widest solid open block allowed, `max_path_width * max_path_width`.
    pub max_path_width: usize,
    /// Level or theme selector for the layers built on top of the grid. Generation ignores it.
    pub level: usize,
    pub walk_fallback: WalkFallback,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            width: 21,
            height: 21,
            wall_density: 0.6,
            max_path_width: 1,
            level: 0,
            walk_fallback: WalkFallback::default(),
        }
    }
}

impl MazeConfig {
    pub fn new(width: usize, height: usize, wall_density: f64, max_path_width: usize) -> MazeConfig {
        MazeConfig {
            width,
            height,
            wall_density,
            max_path_width,
            ..MazeConfig::default()
        }
    }

    /// Check every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            bail!(ErrorKind::InvalidConfig("width", "must be greater than zero".into()));
        }
        if self.height == 0 {
            bail!(ErrorKind::InvalidConfig("height", "must be greater than zero".into()));
        }
        if self.width.checked_mul(self.height).map_or(true, |size| size > u32::max_value() as usize) {
            bail!(ErrorKind::InvalidConfig("width", format!("{} x {} cells is too many", self.width, self.height)));
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            bail!(ErrorKind::InvalidConfig("wall_density",
                                           format!("{} is outside [0, 1]", self.wall_density)));
        }
        if self.max_path_width < 1 {
            bail!(ErrorKind::InvalidConfig("max_path_width", "must be at least 1".into()));
        }
        Ok(())
    }

    /// Number of Path cells the density fill aims for: `round(width * height * (1 - wall_density))`.
    pub fn path_target(&self) -> usize {
        density_target(self.width, self.height, self.wall_density)
    }
}

pub fn density_target(width: usize, height: usize, wall_density: f64) -> usize {
    ((width * height) as f64 * (1.0 - wall_density)).round() as usize
}
