//! Pathfinding algorithms over [`gridpath_core::Grid`].
//!
//! Three searches share one cost model (orthogonal step 10, diagonal step 14,
//! multiplied by the weight of the entered cell):
//!
//! - **BFS** fewest-steps search ([`bfs`], [`Pathfinder::bfs`])
//! - **Dijkstra** cheapest-route search ([`dijkstra`], [`Pathfinder::dijkstra`])
//! - **A\*** heuristic cheapest-route search ([`astar`], [`Pathfinder::astar`])
//!
//! Each returns a [`PathResult`] with the expansion order, the path, its cost
//! and the elapsed time. The free functions search from the grid's source to
//! its destination; [`Pathfinder`] reuses its buffers across searches and
//! accepts any endpoints.
//!
//! ```
//! use gridpath_core::{Grid, Point};
//!
//! let mut grid = Grid::new(6, 6)?;
//! grid.set_obstacle(Point::new(2, 2))?;
//! let result = gridpath_paths::astar(&grid);
//! assert!(result.is_found());
//! assert_eq!(result.total_cost, gridpath_paths::dijkstra(&grid).total_cost);
//! # Ok::<(), gridpath_core::GridError>(())
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | area size, neighbor expansion |
//! | [`WeightedPather`] : [`Pather`] | BFS (cost report), Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`Grid`](gridpath_core::Grid) implements all three.

mod astar;
mod bfs;
pub mod cost;
mod dijkstra;
mod distance;
mod edges;
mod pathfinder;
mod result;
mod solve;
mod traits;

pub use cost::{DIAGONAL_COST, ORTHOGONAL_COST, heuristic, path_cost};
pub use distance::{manhattan, octile};
pub use edges::{Edge, edges};
pub use pathfinder::Pathfinder;
pub use result::{Algorithm, PathResult, UnknownAlgorithm};
pub use solve::{astar, bfs, dijkstra};
pub use traits::{AstarPather, Pather, WeightedPather};
