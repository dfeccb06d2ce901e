use gridpath_core::Point;

use crate::Pathfinder;
use crate::result::{Algorithm, PathResult};
use crate::traits::WeightedPather;

impl Pathfinder {
    /// Uniform-cost search from `from` to `to`.
    ///
    /// Settles cells in order of increasing cost and stops as soon as `to`
    /// is settled. `visited` lists cells in settling order.
    pub fn dijkstra<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> PathResult {
        self.best_first(pather, from, to, Algorithm::Dijkstra, |_| 0)
    }
}
