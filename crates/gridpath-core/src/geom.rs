//! Geometry primitives: [`Point`] and row-major iteration over a grid area.
//!
//! Coordinates are `(row, col)` with rows growing downward. Components are
//! signed so that neighbor offsets may step outside the grid and be rejected
//! by a bounds check instead of wrapping.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell coordinate. Ordering is row-major: by `row`, then by `col`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours (up, down, left, right).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        ORTHOGONAL_OFFSETS.map(|d| self + d)
    }

    /// The four diagonal neighbours (up-left, up-right, down-left, down-right).
    #[inline]
    pub fn diagonals(self) -> [Point; 4] {
        DIAGONAL_OFFSETS.map(|d| self + d)
    }

    /// Whether `other` is one diagonal step away.
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        let d = self - other;
        d.row.abs() == 1 && d.col.abs() == 1
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_orthogonal_to(self, other: Point) -> bool {
        let d = self - other;
        d.row.abs() + d.col.abs() == 1
    }
}

const ORTHOGONAL_OFFSETS: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

const DIAGONAL_OFFSETS: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, -1),
    Point::new(1, 1),
];

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// PointIter
// ---------------------------------------------------------------------------

/// Row-major iterator over every point of a `rows × cols` area.
#[derive(Clone, Debug)]
pub struct PointIter {
    rows: i32,
    cols: i32,
    cur: Point,
}

impl PointIter {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows as i32,
            cols: cols as i32,
            cur: Point::ZERO,
        }
    }
}

impl Iterator for PointIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.row >= self.rows || self.cols <= 0 {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cols <= 0 || self.cur.row >= self.rows {
            return (0, Some(0));
        }
        let remaining_in_row = (self.cols - self.cur.col) as usize;
        let remaining_rows = (self.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * self.cols as usize;
        (total, Some(total))
    }
}

impl ExactSizeIterator for PointIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn point_ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 5), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 5), Point::new(1, 0)]);
    }

    #[test]
    fn adjacency_predicates() {
        let p = Point::new(2, 2);
        assert!(p.is_orthogonal_to(Point::new(2, 3)));
        assert!(!p.is_orthogonal_to(Point::new(3, 3)));
        assert!(p.is_diagonal_to(Point::new(3, 3)));
        assert!(!p.is_diagonal_to(Point::new(2, 4)));
        for n in p.neighbors_4() {
            assert!(p.is_orthogonal_to(n));
        }
        for n in p.diagonals() {
            assert!(p.is_diagonal_to(n));
        }
    }

    #[test]
    fn neighbour_order_is_stable() {
        let p = Point::new(2, 2);
        assert_eq!(
            p.neighbors_4(),
            [Point::new(1, 2), Point::new(3, 2), Point::new(2, 1), Point::new(2, 3)]
        );
        assert_eq!(
            p.diagonals(),
            [Point::new(1, 1), Point::new(1, 3), Point::new(3, 1), Point::new(3, 3)]
        );
    }

    #[test]
    fn display_uses_row_col() {
        assert_eq!(Point::new(3, 7).to_string(), "(3, 7)");
    }

    #[test]
    fn point_iter_row_major() {
        let pts: Vec<_> = PointIter::new(2, 3).collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[2], Point::new(0, 2));
        assert_eq!(pts[3], Point::new(1, 0));
        assert_eq!(pts[5], Point::new(1, 2));
    }

    #[test]
    fn point_iter_size_hint() {
        let mut it = PointIter::new(3, 4);
        assert_eq!(it.len(), 12);
        it.next();
        it.next();
        assert_eq!(it.len(), 10);
        assert_eq!(PointIter::new(0, 4).len(), 0);
    }
}
