//! The [`Grid`] type: terrain, weights and source/destination markers.
//!
//! A `Grid` exclusively owns three flat row-major layers of equal length:
//! terrain ([`CellKind`]), traversal weights and the display [`Mark`]
//! overlay. Exactly one cell is the source and exactly one is the
//! destination at all times; every mutator preserves that.

use crate::cell::{CellKind, Mark};
use crate::error::{GridError, Result};
use crate::geom::{Point, PointIter};

/// Weight given to every cell of a fresh grid.
pub const DEFAULT_WEIGHT: u32 = 1;

/// A rectangular weighted grid with a source and a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
    weights: Vec<u32>,
    marks: Vec<Mark>,
    source: Point,
    destination: Point,
    allow_diagonals: bool,
}

impl Grid {
    /// Create a `rows × cols` grid with every cell empty and weight 1.
    ///
    /// The source goes to (1, 1) and the destination to
    /// (rows - 2, cols - 2). When those coincide or fall outside a very
    /// small grid, the opposite corners are used instead.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let (source, destination) =
            default_markers(rows, cols).ok_or(GridError::InvalidDimensions { rows, cols })?;
        let len = rows * cols;
        let mut grid = Self {
            rows,
            cols,
            cells: vec![CellKind::Empty; len],
            weights: vec![DEFAULT_WEIGHT; len],
            marks: vec![Mark::None; len],
            source,
            destination,
            allow_diagonals: false,
        };
        let si = grid.flat(source);
        let di = grid.flat(destination);
        grid.cells[si] = CellKind::Source;
        grid.cells[di] = CellKind::Destination;
        Ok(grid)
    }

    /// Assemble a grid from already validated layers. Used by the decoder.
    pub(crate) fn from_parts(
        rows: usize,
        cols: usize,
        cells: Vec<CellKind>,
        weights: Vec<u32>,
        source: Point,
        destination: Point,
    ) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        debug_assert_eq!(weights.len(), rows * cols);
        Self {
            rows,
            cols,
            marks: vec![Mark::None; cells.len()],
            cells,
            weights,
            source,
            destination,
            allow_diagonals: false,
        }
    }

    // -----------------------------------------------------------------------
    // Dimensions and coordinates
    // -----------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid holds at least its two markers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.cols
    }

    /// Row-major flat index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| self.flat(p))
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    #[inline]
    fn flat(&self, p: Point) -> usize {
        p.row as usize * self.cols + p.col as usize
    }

    fn checked(&self, p: Point) -> Result<usize> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            rows: self.rows,
            cols: self.cols,
        })
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Terrain kind at `p`.
    pub fn kind(&self, p: Point) -> Result<CellKind> {
        self.checked(p).map(|i| self.cells[i])
    }

    /// Traversal weight at `p`. Meaningless (but readable) on obstacles.
    pub fn weight(&self, p: Point) -> Result<u32> {
        self.checked(p).map(|i| self.weights[i])
    }

    /// Display mark at `p`.
    pub fn mark(&self, p: Point) -> Result<Mark> {
        self.checked(p).map(|i| self.marks[i])
    }

    /// Whether a search may step onto `p`. `false` outside the grid.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i].is_passable())
    }

    /// Current source coordinates.
    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    /// Current destination coordinates.
    #[inline]
    pub fn destination(&self) -> Point {
        self.destination
    }

    #[inline]
    pub fn allow_diagonals(&self) -> bool {
        self.allow_diagonals
    }

    #[inline]
    pub fn set_allow_diagonals(&mut self, allow: bool) {
        self.allow_diagonals = allow;
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, CellKind)> + '_ {
        PointIter::new(self.rows, self.cols).zip(self.cells.iter().copied())
    }

    /// Row-major iterator over every point of the grid.
    pub fn points(&self) -> PointIter {
        PointIter::new(self.rows, self.cols)
    }

    /// Count the cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    pub(crate) fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    pub(crate) fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Whether both grids have the same dimensions, terrain, weights and
    /// markers. Marks and the diagonal flag are ignored, so this compares
    /// exactly what the text encoding captures.
    pub fn same_layout(&self, other: &Grid) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.source == other.source
            && self.destination == other.destination
            && self.cells == other.cells
            && self.weights == other.weights
    }

    // -----------------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------------

    /// Turn an empty cell into an obstacle. Any other kind is left alone so
    /// that painting walls never erases a marker.
    pub fn set_obstacle(&mut self, p: Point) -> Result<()> {
        let i = self.checked(p)?;
        if self.cells[i] == CellKind::Empty {
            self.cells[i] = CellKind::Obstacle;
        }
        Ok(())
    }

    /// Clear `p` to an empty cell of weight 1.
    ///
    /// On the source or destination only the weight is reset; markers move
    /// through [`set_source`](Self::set_source) and
    /// [`set_destination`](Self::set_destination) only.
    pub fn set_empty(&mut self, p: Point) -> Result<()> {
        let i = self.checked(p)?;
        if !self.cells[i].is_marker() {
            self.cells[i] = CellKind::Empty;
        }
        self.weights[i] = DEFAULT_WEIGHT;
        Ok(())
    }

    /// Set the traversal weight of `p`. A weighted obstacle becomes empty.
    pub fn set_weight(&mut self, p: Point, weight: u32) -> Result<()> {
        if weight < 1 {
            return Err(GridError::InvalidWeight(weight));
        }
        let i = self.checked(p)?;
        if self.cells[i] == CellKind::Obstacle {
            self.cells[i] = CellKind::Empty;
        }
        self.weights[i] = weight;
        Ok(())
    }

    /// Move the source to `p`, clearing the previous source cell.
    pub fn set_source(&mut self, p: Point) -> Result<()> {
        let i = self.checked(p)?;
        if p == self.destination {
            return Err(GridError::InvalidPlacement {
                pos: p,
                reason: "cell is the destination",
            });
        }
        if p == self.source {
            return Ok(());
        }
        let old = self.flat(self.source);
        self.cells[old] = CellKind::Empty;
        self.plant(i, CellKind::Source);
        self.source = p;
        Ok(())
    }

    /// Move the destination to `p`, clearing the previous destination cell.
    pub fn set_destination(&mut self, p: Point) -> Result<()> {
        let i = self.checked(p)?;
        if p == self.source {
            return Err(GridError::InvalidPlacement {
                pos: p,
                reason: "cell is the source",
            });
        }
        if p == self.destination {
            return Ok(());
        }
        let old = self.flat(self.destination);
        self.cells[old] = CellKind::Empty;
        self.plant(i, CellKind::Destination);
        self.destination = p;
        Ok(())
    }

    fn plant(&mut self, i: usize, marker: CellKind) {
        // Obstacle weights are undefined, so a replaced wall starts fresh.
        if self.cells[i] == CellKind::Obstacle {
            self.weights[i] = DEFAULT_WEIGHT;
        }
        self.cells[i] = marker;
    }

    /// Reset every [`Mark`] to [`Mark::None`]. Terrain and weights are
    /// untouched.
    pub fn clear_path(&mut self) {
        self.marks.fill(Mark::None);
    }

    /// Mark the given cells as visited. Out-of-range points are skipped.
    pub fn mark_visited(&mut self, pts: &[Point]) {
        self.paint(pts, Mark::Visited);
    }

    /// Mark the given cells as part of a path. Out-of-range points are
    /// skipped.
    pub fn mark_path(&mut self, pts: &[Point]) {
        self.paint(pts, Mark::Path);
    }

    fn paint(&mut self, pts: &[Point], mark: Mark) {
        for &p in pts {
            if let Some(i) = self.index(p) {
                self.marks[i] = mark;
            }
        }
    }

    /// Restore the default layout at the current dimensions. The diagonal
    /// flag is kept.
    pub fn reset(&mut self) {
        let allow = self.allow_diagonals;
        if let Ok(fresh) = Grid::new(self.rows, self.cols) {
            *self = fresh;
        }
        self.allow_diagonals = allow;
    }

    /// Build a new grid of the given size.
    ///
    /// When the size is unchanged the new grid is reloaded from a snapshot
    /// of `self`, so nothing is lost; otherwise it starts from the default
    /// layout. The diagonal flag carries over in both cases.
    pub fn resized(&self, rows: usize, cols: usize) -> Result<Grid> {
        let mut grid = Grid::new(rows, cols)?;
        if rows == self.rows && cols == self.cols {
            grid.load(&self.serialize())?;
        } else {
            log::debug!(
                "resize {}x{} -> {rows}x{cols} discards the previous layout",
                self.rows,
                self.cols
            );
        }
        grid.allow_diagonals = self.allow_diagonals;
        Ok(grid)
    }
}

/// Default marker placement for a `rows × cols` grid, or `None` if the grid
/// cannot hold two distinct markers.
fn default_markers(rows: usize, cols: usize) -> Option<(Point, Point)> {
    let len = rows.checked_mul(cols)?;
    if len < 2 || rows > i32::MAX as usize || cols > i32::MAX as usize {
        return None;
    }
    let (r, c) = (rows as i32, cols as i32);
    let source = Point::new(1, 1);
    let destination = Point::new(r - 2, c - 2);
    let fits = |p: Point| p.row >= 0 && p.col >= 0 && p.row < r && p.col < c;
    if fits(source) && fits(destination) && source != destination {
        Some((source, destination))
    } else {
        Some((Point::ZERO, Point::new(r - 1, c - 1)))
    }
}
