//! One-shot entry points that search a [`Grid`] from its source to its
//! destination.

use gridpath_core::Grid;

use crate::Pathfinder;
use crate::result::{Algorithm, PathResult};

/// Breadth-first search from the grid's source to its destination.
pub fn bfs(grid: &Grid) -> PathResult {
    Algorithm::Bfs.solve(grid)
}

/// Dijkstra search from the grid's source to its destination.
pub fn dijkstra(grid: &Grid) -> PathResult {
    Algorithm::Dijkstra.solve(grid)
}

/// A* search from the grid's source to its destination.
pub fn astar(grid: &Grid) -> PathResult {
    Algorithm::AStar.solve(grid)
}

impl Algorithm {
    /// Run this algorithm on `grid` with a fresh [`Pathfinder`].
    pub fn solve(self, grid: &Grid) -> PathResult {
        self.solve_with(&mut Pathfinder::for_grid(grid), grid)
    }

    /// Run this algorithm on `grid`, reusing `pf`'s buffers.
    pub fn solve_with(self, pf: &mut Pathfinder, grid: &Grid) -> PathResult {
        let (from, to) = (grid.source(), grid.destination());
        log::debug!(
            "{self}: solving {}x{} grid {from} -> {to}, diagonals {}",
            grid.rows(),
            grid.cols(),
            grid.allow_diagonals()
        );
        match self {
            Algorithm::Bfs => pf.bfs(grid, from, to),
            Algorithm::Dijkstra => pf.dijkstra(grid, from, to),
            Algorithm::AStar => pf.astar(grid, from, to),
        }
    }
}
