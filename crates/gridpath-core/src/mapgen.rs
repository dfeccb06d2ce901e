//! Random obstacle scattering.

use rand::{Rng, RngExt};

use crate::cell::CellKind;
use crate::grid::Grid;

/// Probability that an empty cell becomes an obstacle.
pub const MAZE_DENSITY: f64 = 0.3;

impl Grid {
    /// Scatter obstacles using the thread-local RNG.
    ///
    /// Each currently empty cell independently becomes an obstacle with
    /// probability [`MAZE_DENSITY`]. Markers, weights and existing obstacles
    /// are left as they are. Returns the number of obstacles added.
    pub fn generate_random_maze(&mut self) -> usize {
        self.generate_random_maze_with(&mut rand::rng())
    }

    /// Like [`generate_random_maze`](Self::generate_random_maze) but with a
    /// caller-provided generator, for reproducible layouts.
    pub fn generate_random_maze_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut added = 0;
        for p in self.points() {
            if self.kind(p) != Ok(CellKind::Empty) {
                continue;
            }
            if rng.random_bool(MAZE_DENSITY) && self.set_obstacle(p).is_ok() {
                added += 1;
            }
        }
        log::debug!(
            "random maze: {added} obstacles added to {}x{} grid",
            self.rows(),
            self.cols()
        );
        added
    }
}
