use gridpath_core::Point;

use crate::cost::{DIAGONAL_COST, ORTHOGONAL_COST};

fn abs_delta(a: Point, b: Point) -> (u64, u64) {
    let d = a - b;
    (u64::from(d.row.unsigned_abs()), u64::from(d.col.unsigned_abs()))
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    let (dr, dc) = abs_delta(a, b);
    dr + dc
}

/// Octile distance on the 10/14 cost scale: the cheapest weight-1 route
/// when diagonal steps are allowed.
#[inline]
pub fn octile(a: Point, b: Point) -> u64 {
    let (dr, dc) = abs_delta(a, b);
    let diag = dr.min(dc);
    // 10·(dr+dc) + (14 − 20)·min(dr,dc), kept non-negative.
    ORTHOGONAL_COST * (dr + dc) - (2 * ORTHOGONAL_COST - DIAGONAL_COST) * diag
}
