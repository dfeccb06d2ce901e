use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use gridpath_core::{Grid, Point};
use thiserror::Error;

/// The three search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Breadth-first search: fewest steps, weights ignored.
    Bfs,
    /// Uniform-cost search: cheapest route.
    Dijkstra,
    /// Heuristic-guided uniform-cost search: cheapest route, fewer expansions.
    AStar,
}

impl Algorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?} (expected bfs, dijkstra or astar)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Outcome of a single search.
///
/// An empty `path` means the destination was unreachable; that is a normal
/// result, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub algorithm: Algorithm,
    /// Cells in the order they were expanded.
    pub visited: Vec<Point>,
    /// Source to destination inclusive, or empty.
    pub path: Vec<Point>,
    /// Sum of entering costs along `path`, source excluded.
    pub total_cost: u64,
    /// Wall-clock search time. Informational only.
    pub elapsed: Duration,
}

impl PathResult {
    pub(crate) fn empty(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            visited: Vec::new(),
            path: Vec::new(),
            total_cost: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path (0 when not found).
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Paint the visited cells and the path onto the grid's display overlay,
    /// replacing any previous marks.
    pub fn mark(&self, grid: &mut Grid) {
        grid.clear_path();
        grid.mark_visited(&self.visited);
        grid.mark_path(&self.path);
    }
}
