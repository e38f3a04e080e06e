//! **density_mazes** generates grid mazes for route drawing games: a guaranteed connected
//! skeleton from the centre to all four borders, grown to a tunable wall density without ever
//! opening corridors wider than allowed.

pub mod cells;
pub mod config;
pub mod density;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod pathing;
pub mod random;
pub mod skeleton;
pub mod units;
pub mod width_limiter;
mod utils;
