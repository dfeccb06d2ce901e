//! **gridpath-core**: the grid model for weighted grid pathfinding.
//!
//! This crate owns the data a search runs over: a rectangular [`Grid`] of
//! [`CellKind`] terrain with per-cell traversal weights, exactly one source
//! and one destination, a diagonal-movement flag, and a canonical text
//! encoding used for saving and reloading grids.
//!
//! ```
//! use gridpath_core::{CellKind, Grid, Point};
//!
//! let mut grid = Grid::new(5, 5)?;
//! grid.set_obstacle(Point::new(2, 2))?;
//! grid.set_weight(Point::new(1, 3), 4)?;
//!
//! let text = grid.serialize();
//! let copy: Grid = text.parse()?;
//! assert_eq!(copy.kind(Point::new(2, 2))?, CellKind::Obstacle);
//! # Ok::<(), gridpath_core::GridError>(())
//! ```

pub mod cell;
mod codec;
pub mod error;
pub mod geom;
pub mod grid;
mod mapgen;

pub use cell::{CellKind, Mark};
pub use error::{GridError, ParseError, Result};
pub use geom::{Point, PointIter};
pub use grid::{DEFAULT_WEIGHT, Grid};
pub use mapgen::MAZE_DENSITY;
