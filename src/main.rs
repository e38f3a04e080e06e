use docopt::Docopt;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_derive::Deserialize;
use density_mazes::{
    cells::CompassPrimary,
    config::{MazeConfig, WalkFallback},
    generators::{Maze, MazeGenerator},
    grid_displays::{Overlay, PathDisplay, StartEndPointsDisplay},
    pathing,
};

const USAGE: &str = "Maze Driver

Usage:
    maze_driver -h | --help
    maze_driver [--width=<w> --height=<h> --wall-density=<d> --max-path-width=<n> --level=<l> --seed=<s> --strict-walk] [--show-distances|--show-path|--mark-landmarks]

Options:
    -h --help               Show this screen.
    --width=<w>             The grid width in a w*h grid, odd for a unique centre [default: 21].
    --height=<h>            The grid height in a w*h grid, odd for a unique centre [default: 21].
    --wall-density=<d>      0.0 opens every cell it can, 1.0 keeps only the skeleton [default: 0.6].
    --max-path-width=<n>    Widest solid open block allowed is n*n [default: 1].
    --level=<l>             Level/theme selector passed through for the layers above the maze [default: 0].
    --seed=<s>              Random seed. A fresh seed is picked and logged if not given.
    --strict-walk           Leave a skeleton walk unfinished when it runs out of steps instead of routing it straight to its exit.
    --show-distances        Show the step count from the centre to every open cell.
    --show-path             Show the path from the centre to the open cell furthest from it.
    --mark-landmarks        Mark the centre with 'S' and the four border exits with 'E'.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_width: usize,
    flag_height: usize,
    flag_wall_density: f64,
    flag_max_path_width: usize,
    flag_level: usize,
    flag_seed: Option<u64>,
    flag_strict_walk: bool,
    flag_show_distances: bool,
    flag_show_path: bool,
    flag_mark_landmarks: bool,
}

// The driver chains the library errors with its own command line failures.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(density_mazes::errors::Error, density_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let config = MazeConfig {
        width: args.flag_width,
        height: args.flag_height,
        wall_density: args.flag_wall_density,
        max_path_width: args.flag_max_path_width,
        level: args.flag_level,
        walk_fallback: if args.flag_strict_walk {
            WalkFallback::Stop
        } else {
            WalkFallback::RouteDirect
        },
    };
    let generator = MazeGenerator::new(config)
        .chain_err(|| "Refusing to generate a maze from the given options")?;

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Generating level {} maze {}x{} with seed {}", config.level, config.width, config.height, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let maze = generator.generate(&mut rng);

    info!("{} of {} cells open (target {}), {} candidates rejected for width",
          maze.grid.path_count(), maze.grid.size(), maze.fill.target, maze.fill.rejected);
    if maze.fill.exhausted {
        info!("Growth ran out of candidates before reaching the density target");
    }

    print_maze(&maze, &args)
}

fn print_maze(maze: &Maze, args: &MazeArgs) -> Result<()> {

    let grid = &maze.grid;
    let center = maze.skeleton.center;

    if args.flag_show_distances || args.flag_show_path {

        let distances = pathing::Distances::new(grid, center)
            .ok_or("The maze centre is not open, cannot measure distances from it.")?;

        if args.flag_show_distances {
            println!("{}", Overlay::new(grid, &distances));
        } else {
            let furthest = distances.furthest_points_on_grid()[0];
            let path = pathing::shortest_path(grid, &distances, furthest)
                .ok_or("No route from the centre to its furthest point.")?;
            info!("Longest route from the centre is {} steps to {:?}", path.len() - 1, furthest);
            println!("{}", Overlay::new(grid, &PathDisplay::new(&path)));
        }

    } else if args.flag_mark_landmarks {

        let exits = CompassPrimary::ALL
            .iter()
            .map(|side| maze.skeleton.exit(*side))
            .collect::<Vec<_>>();
        println!("{}", Overlay::new(grid, &StartEndPointsDisplay::new(&[center], &exits)));

    } else {
        println!("{}", grid);
    }

    Ok(())
}
