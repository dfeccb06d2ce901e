//! Adjacency listing of a grid viewed as an undirected graph.

use gridpath_core::{Grid, Point};

use crate::cost::base_step_cost;

/// An undirected traversable adjacency between two non-obstacle cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub a: Point,
    pub b: Point,
    /// Unweighted step cost (10 or 14).
    pub base_cost: u64,
}

/// List every edge of the grid graph once, in row-major order of `a`.
///
/// Each cell contributes its right and down neighbours and, with diagonals
/// enabled, its down-right and down-left neighbours.
pub fn edges(grid: &Grid) -> Vec<Edge> {
    let mut out = Vec::new();
    for (a, kind) in grid.iter() {
        if !kind.is_passable() {
            continue;
        }
        let forward = [a.shift(0, 1), a.shift(1, 0)];
        let diagonal = [a.shift(1, 1), a.shift(1, -1)];
        let diag_count = if grid.allow_diagonals() { 2 } else { 0 };
        for b in forward.into_iter().chain(diagonal.into_iter().take(diag_count)) {
            if grid.is_passable(b) {
                out.push(Edge {
                    a,
                    b,
                    base_cost: base_step_cost(a, b),
                });
            }
        }
    }
    out
}
