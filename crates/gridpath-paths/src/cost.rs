//! The shared cost model and the [`Grid`] pather implementation.
//!
//! An orthogonal step costs [`ORTHOGONAL_COST`] and, with diagonals enabled,
//! a diagonal step costs [`DIAGONAL_COST`]. Either is multiplied by the
//! weight of the cell being entered. Obstacles are never entered.

use gridpath_core::{Grid, Point};

use crate::distance::{manhattan, octile};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Base cost of an orthogonal step.
pub const ORTHOGONAL_COST: u64 = 10;

/// Base cost of a diagonal step (10·√2, rounded).
pub const DIAGONAL_COST: u64 = 14;

/// Base cost of stepping from `from` to the adjacent `to`, before weighting.
#[inline]
pub fn base_step_cost(from: Point, to: Point) -> u64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Admissible estimate between two cells under the given movement model.
#[inline]
pub fn heuristic(from: Point, to: Point, allow_diagonals: bool) -> u64 {
    if allow_diagonals {
        octile(from, to)
    } else {
        ORTHOGONAL_COST * manhattan(from, to)
    }
}

/// Sum of entering costs along `path`, excluding the first node.
///
/// Returns 0 for paths shorter than two nodes.
pub fn path_cost(grid: &Grid, path: &[Point]) -> u64 {
    path.windows(2).map(|w| grid.cost(w[0], w[1])).sum()
}

impl Pather for Grid {
    fn size(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_passable(n) {
                buf.push(n);
            }
        }
        if self.allow_diagonals() {
            for n in p.diagonals() {
                if self.is_passable(n) {
                    buf.push(n);
                }
            }
        }
    }
}

impl WeightedPather for Grid {
    fn cost(&self, from: Point, to: Point) -> u64 {
        let weight = self.weight(to).unwrap_or(1);
        base_step_cost(from, to) * u64::from(weight)
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Point, to: Point) -> u64 {
        heuristic(from, to, self.allow_diagonals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_neighbors_skip_obstacles_and_edges() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_obstacle(Point::new(0, 1)).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0)]);
    }

    #[test]
    fn diagonal_neighbors_follow_flag() {
        let mut g = Grid::new(3, 3).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 4);

        g.set_allow_diagonals(true);
        buf.clear();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 8);

        g.set_obstacle(Point::new(0, 2)).unwrap();
        buf.clear();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 7);
        assert!(!buf.contains(&Point::new(0, 2)));
    }

    #[test]
    fn entering_cost_uses_target_weight() {
        let mut g = Grid::new(4, 4).unwrap();
        g.set_weight(Point::new(0, 1), 3).unwrap();
        assert_eq!(g.cost(Point::new(0, 0), Point::new(0, 1)), 30);
        assert_eq!(g.cost(Point::new(0, 1), Point::new(0, 0)), 10);
        assert_eq!(g.cost(Point::new(1, 0), Point::new(0, 1)), 42);
    }

    #[test]
    fn heuristic_by_movement_model() {
        let a = Point::new(0, 0);
        let b = Point::new(2, 5);
        assert_eq!(heuristic(a, b, false), 70);
        assert_eq!(heuristic(a, b, true), 2 * 14 + 3 * 10);
    }

    #[test]
    fn path_cost_excludes_source() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_weight(Point::new(0, 0), 50).unwrap();
        g.set_weight(Point::new(0, 2), 2).unwrap();
        let path = [Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)];
        assert_eq!(path_cost(&g, &path), 10 + 20);
        assert_eq!(path_cost(&g, &path[..1]), 0);
        assert_eq!(path_cost(&g, &[]), 0);
    }
}
