use gridpath_core::Point;

/// A searchable area of `rows × cols` cells.
///
/// The searches size their node arrays from [`size`](Pather::size) before
/// every run, so a [`Pathfinder`](crate::Pathfinder) can be reused across
/// areas of different dimensions.
pub trait Pather {
    /// Area dimensions as `(rows, cols)`. Every point produced by
    /// [`neighbors`](Pather::neighbors) must lie inside it.
    fn size(&self) -> (usize, usize);

    /// Push the cells one legal move away from `p` onto `buf`, which the
    /// caller has cleared. For a [`Grid`](gridpath_core::Grid) these are
    /// the passable orthogonal neighbours, then the passable diagonal ones
    /// when diagonals are enabled.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A [`Pather`] whose moves have a price.
pub trait WeightedPather: Pather {
    /// Price of stepping from `from` into the adjacent `to`. On a grid this
    /// is the step base (10 orthogonal, 14 diagonal) times the weight of
    /// `to`, so it is never zero.
    fn cost(&self, from: Point, to: Point) -> u64;
}

/// A [`WeightedPather`] with a lower bound on the remaining price, for A*.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the cheapest price from `from` to `to`. It must also
    /// drop by no more than the price of any single move, which the
    /// manhattan and octile bounds of the grid satisfy since every weight
    /// is at least 1.
    fn estimate(&self, from: Point, to: Point) -> u64;
}
