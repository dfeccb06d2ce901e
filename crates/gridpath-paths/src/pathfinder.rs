use std::collections::{BinaryHeap, VecDeque};
use std::time::Instant;

use gridpath_core::{Grid, Point};

use crate::result::{Algorithm, PathResult};
use crate::traits::{Pather, WeightedPather};

// ---------------------------------------------------------------------------
// Internal node for searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: u64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Frontier entry, ordered for a min-first `BinaryHeap`.
///
/// Lower `f` wins; ties go to the lower heuristic (closer to the goal), then
/// to the lower flat index, so the pop order is fully determined by the grid.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: u64,
    pub(crate) h: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Reusable search engine for a `rows × cols` area.
///
/// `Pathfinder` owns the node array, the frontier containers and a scratch
/// neighbor buffer so that repeated searches allocate nothing after warm-up.
/// Each search bumps a generation counter instead of clearing the nodes, so
/// nothing from one search is visible to the next.
pub struct Pathfinder {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) nbuf: Vec<Point>,
}

impl Pathfinder {
    /// Create a pathfinder for a `rows × cols` area.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            nodes: vec![Node::default(); rows * cols],
            generation: 0,
            queue: VecDeque::new(),
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Create a pathfinder sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    /// Change the searched area.
    ///
    /// If the new area fits within the existing node capacity nothing is
    /// reallocated; stale nodes are ignored through the generation counter.
    pub fn set_size(&mut self, rows: usize, cols: usize) {
        let len = rows * cols;
        self.rows = rows;
        self.cols = cols;
        if len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
    }

    /// Dimensions of the searched area as `(rows, cols)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Resize to the pather's area, so a reused pathfinder always covers
    /// the whole grid being searched.
    pub(crate) fn fit<P: Pather>(&mut self, pather: &P) {
        let (rows, cols) = pather.size();
        if (rows, cols) != self.size() {
            log::debug!("pathfinder resized to {rows}x{cols}");
            self.set_size(rows, cols);
        }
    }

    /// Start a new search generation, lazily invalidating every node.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: nodes from 2^32 searches ago would look current.
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.row as usize >= self.rows || p.col as usize >= self.cols {
            return None;
        }
        Some(p.row as usize * self.cols + p.col as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Walk parent links back from `goal` and return the source-first path.
    pub(crate) fn reconstruct(&self, goal: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    /// Label-setting best-first search shared by Dijkstra and A*.
    ///
    /// `estimate` must be consistent; with the zero estimate this is plain
    /// Dijkstra. Each cell is settled at most once and `visited` lists cells
    /// in settling order.
    pub(crate) fn best_first<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        algorithm: Algorithm,
        estimate: impl Fn(Point) -> u64,
    ) -> PathResult {
        let started = Instant::now();
        let mut result = PathResult::empty(algorithm);
        self.fit(pather);
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            log::debug!("{algorithm}: endpoint outside {}x{} area", self.rows, self.cols);
            return result;
        };

        let cur_gen = self.next_generation();
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = false;
        }
        let h0 = estimate(from);
        self.open.clear();
        self.open.push(NodeRef {
            idx: start_idx,
            f: h0,
            h: h0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(current) = self.open.pop() {
            let ci = current.idx;
            // Stale entry: the cell was already settled through a cheaper key.
            if self.nodes[ci].closed {
                continue;
            }
            self.nodes[ci].closed = true;
            let current_g = self.nodes[ci].g;
            let cp = self.point(ci);
            result.visited.push(cp);

            if ci == goal_idx {
                found = true;
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + pather.cost(cp, np);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                n.g = tentative;
                n.parent = ci;
                let h = estimate(np);
                log::trace!("{algorithm}: push {np} g={tentative} f={}", tentative + h);
                self.open.push(NodeRef {
                    idx: ni,
                    f: tentative + h,
                    h,
                });
            }
        }

        self.nbuf = nbuf;
        self.open.clear();

        if found {
            result.path = self.reconstruct(goal_idx);
            result.total_cost = self.nodes[goal_idx].g;
        }
        result.elapsed = started.elapsed();
        log_outcome(&result);
        result
    }
}

/// Debug summary of a finished search.
pub(crate) fn log_outcome(result: &PathResult) {
    if result.is_found() {
        log::debug!(
            "{}: {} visited, {} steps, cost {} in {:?}",
            result.algorithm,
            result.visited.len(),
            result.steps(),
            result.total_cost,
            result.elapsed
        );
    } else {
        log::debug!(
            "{}: destination unreachable after {} visited",
            result.algorithm,
            result.visited.len()
        );
    }
}
