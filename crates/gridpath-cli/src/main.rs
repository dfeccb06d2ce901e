//! gridpath - build, solve and compare weighted grid mazes.
//!
//! - `gridpath new` - write a fresh grid, optionally with a random maze
//! - `gridpath solve` - run one algorithm and draw the result
//! - `gridpath compare` - run all algorithms on the same grid
//! - `gridpath edges` - list the traversable adjacencies

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use gridpath_core::Grid;
use gridpath_paths::{Algorithm, Pathfinder};

mod render;

#[derive(Parser)]
#[command(name = "gridpath")]
#[command(about = "Weighted grid pathfinding with BFS, Dijkstra and A*", version)]
struct Cli {
    /// Verbose output (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a grid and print or save its text form
    New {
        #[arg(long, default_value_t = 20)]
        rows: usize,

        #[arg(long, default_value_t = 20)]
        cols: usize,

        /// Scatter random obstacles
        #[arg(long)]
        maze: bool,

        /// Seed for a reproducible maze
        #[arg(long, requires = "maze")]
        seed: Option<u64>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Solve a grid file with one algorithm
    Solve {
        file: PathBuf,

        /// bfs, dijkstra or astar
        #[arg(short, long, default_value = "astar")]
        algorithm: Algorithm,

        /// Allow diagonal moves
        #[arg(long)]
        diagonals: bool,

        /// Print only the summary line
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run every algorithm on a grid file
    Compare {
        file: PathBuf,

        #[arg(long)]
        diagonals: bool,
    },

    /// List the edges of a grid file
    Edges {
        file: PathBuf,

        #[arg(long)]
        diagonals: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::New {
            rows,
            cols,
            maze,
            seed,
            out,
        } => new_grid(rows, cols, maze, seed, out.as_deref()),
        Commands::Solve {
            file,
            algorithm,
            diagonals,
            quiet,
        } => solve(&file, algorithm, diagonals, quiet),
        Commands::Compare { file, diagonals } => compare(&file, diagonals),
        Commands::Edges { file, diagonals } => {
            let grid = read_grid(&file, diagonals)?;
            print!("{}", render::edge_list(&gridpath_paths::edges(&grid)));
            Ok(())
        }
    }
}

fn read_grid(path: &Path, diagonals: bool) -> Result<Grid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut grid: Grid = text
        .parse()
        .with_context(|| format!("{} is not a valid grid", path.display()))?;
    grid.set_allow_diagonals(diagonals);
    log::debug!(
        "loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

fn new_grid(
    rows: usize,
    cols: usize,
    maze: bool,
    seed: Option<u64>,
    out: Option<&Path>,
) -> Result<()> {
    let mut grid = Grid::new(rows, cols).context("cannot create grid")?;
    if maze {
        let added = match seed {
            Some(seed) => grid.generate_random_maze_with(&mut StdRng::seed_from_u64(seed)),
            None => grid.generate_random_maze(),
        };
        log::info!("maze: {added} obstacles");
    }

    let text = grid.serialize();
    match out {
        Some(path) => fs::write(path, text + "\n")
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn solve(path: &Path, algorithm: Algorithm, diagonals: bool, quiet: bool) -> Result<()> {
    let mut grid = read_grid(path, diagonals)?;
    let result = algorithm.solve(&grid);
    if !quiet {
        result.mark(&mut grid);
        print!("{}", render::grid(&grid));
    }
    println!("{}", render::summary(&result));
    Ok(())
}

fn compare(path: &Path, diagonals: bool) -> Result<()> {
    let grid = read_grid(path, diagonals)?;
    let mut pf = Pathfinder::for_grid(&grid);
    let results: Vec<_> = Algorithm::ALL
        .into_iter()
        .map(|alg| alg.solve_with(&mut pf, &grid))
        .collect();

    if let [_, dijkstra, astar] = results.as_slice() {
        if dijkstra.total_cost != astar.total_cost {
            log::warn!(
                "dijkstra and astar disagree on cost ({} vs {})",
                dijkstra.total_cost,
                astar.total_cost
            );
        }
    }
    print!("{}", render::comparison(&results));
    Ok(())
}
