//! Plain-text views of grids and search results.

use std::fmt::Write as _;

use gridpath_core::{CellKind, Grid, Mark};
use gridpath_paths::{Edge, PathResult};

/// Draw the grid one character per cell.
///
/// Markers and obstacles use their codec characters. Path cells show `*`,
/// other expanded cells `+`. Unmarked empty cells show their weight when it
/// is above 1 (`~` past 9).
pub fn grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() + grid.rows());
    for (p, kind) in grid.iter() {
        let ch = match (kind, grid.mark(p).unwrap_or_default()) {
            (CellKind::Empty, Mark::Path) => '*',
            (CellKind::Empty, Mark::Visited) => '+',
            (CellKind::Empty, Mark::None) => match grid.weight(p).unwrap_or(1) {
                1 => '.',
                w @ 2..=9 => char::from_digit(w, 10).unwrap_or('~'),
                _ => '~',
            },
            (kind, _) => kind.to_char(),
        };
        out.push(ch);
        if p.col as usize + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}

/// One-line summary of a result.
pub fn summary(r: &PathResult) -> String {
    if r.is_found() {
        format!(
            "{}: found, {} steps, cost {}, {} visited, {:?}",
            r.algorithm,
            r.steps(),
            r.total_cost,
            r.visited.len(),
            r.elapsed
        )
    } else {
        format!(
            "{}: no path, {} visited, {:?}",
            r.algorithm,
            r.visited.len(),
            r.elapsed
        )
    }
}

/// Side-by-side table of several results.
pub fn comparison(results: &[PathResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>8} {:>6} {:>8} {:>12}",
        "algorithm", "visited", "steps", "cost", "elapsed"
    );
    for r in results {
        let (steps, cost) = if r.is_found() {
            (r.steps().to_string(), r.total_cost.to_string())
        } else {
            ("-".to_string(), "-".to_string())
        };
        let _ = writeln!(
            out,
            "{:<10} {:>8} {:>6} {:>8} {:>12}",
            r.algorithm.name(),
            r.visited.len(),
            steps,
            cost,
            format!("{:?}", r.elapsed)
        );
    }
    out
}

pub fn edge_list(edges: &[Edge]) -> String {
    let mut out = String::new();
    for e in edges {
        let _ = writeln!(out, "{} {} {}", e.a, e.b, e.base_cost);
    }
    out
}
