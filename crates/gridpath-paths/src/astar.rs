use gridpath_core::Point;

use crate::Pathfinder;
use crate::result::{Algorithm, PathResult};
use crate::traits::AstarPather;

impl Pathfinder {
    /// Compute the cheapest path from `from` to `to` using A*.
    ///
    /// Frontier priority is `g + h` with `h` from
    /// [`AstarPather::estimate`]. Ties prefer the cell with the smaller
    /// estimate, then the lower row-major index.
    pub fn astar<P: AstarPather>(&mut self, pather: &P, from: Point, to: Point) -> PathResult {
        self.best_first(pather, from, to, Algorithm::AStar, |p| pather.estimate(p, to))
    }
}
