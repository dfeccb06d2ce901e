use std::time::Instant;

use gridpath_core::Point;

use crate::Pathfinder;
use crate::pathfinder::{NO_PARENT, log_outcome};
use crate::result::{Algorithm, PathResult};
use crate::traits::WeightedPather;

impl Pathfinder {
    /// Breadth-first search from `from` to `to`.
    ///
    /// Finds a path with the fewest steps, ignoring weights. Every cell is
    /// enqueued at most once and `visited` lists cells in dequeue order.
    /// The reported cost is the weighted cost of the path found, which need
    /// not be the cheapest.
    pub fn bfs<P: WeightedPather>(&mut self, pather: &P, from: Point, to: Point) -> PathResult {
        let started = Instant::now();
        let mut result = PathResult::empty(Algorithm::Bfs);
        self.fit(pather);
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            log::debug!("bfs: endpoint outside {}x{} area", self.rows, self.cols);
            return result;
        };

        let cur_gen = self.next_generation();
        {
            let node = &mut self.nodes[start_idx];
            node.generation = cur_gen;
            node.parent = NO_PARENT;
        }
        self.queue.clear();
        self.queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.queue.pop_front() {
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
                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    continue;
                }
                n.generation = cur_gen;
                n.parent = ci;
                log::trace!("bfs: enqueue {np}");
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        self.queue.clear();

        if found {
            result.path = self.reconstruct(goal_idx);
            result.total_cost = result
                .path
                .windows(2)
                .map(|w| pather.cost(w[0], w[1]))
                .sum();
        }
        result.elapsed = started.elapsed();
        log_outcome(&result);
        result
    }
}
