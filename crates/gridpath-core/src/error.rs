//! Error types for grid mutation and text decoding.

use thiserror::Error;

use crate::geom::Point;

/// Errors returned by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("point {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds { pos: Point, rows: usize, cols: usize },

    #[error("weight must be at least 1, got {0}")]
    InvalidWeight(u32),

    #[error("cannot place marker at {pos}: {reason}")]
    InvalidPlacement { pos: Point, reason: &'static str },

    #[error("a {rows}x{cols} grid cannot hold both a source and a destination")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("malformed grid text: {0}")]
    Parse(#[from] ParseError),
}

/// Reasons the canonical text encoding was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected header|terrain|weights, found {0} section(s)")]
    SectionCount(usize),

    #[error("header must have 6 comma-separated fields, found {0}")]
    HeaderFieldCount(usize),

    #[error("header field `{name}` is not a non-negative integer: {value:?}")]
    HeaderField { name: &'static str, value: String },

    #[error("dimensions {rows}x{cols} are not usable")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("{name} {pos} lies outside the {rows}x{cols} grid")]
    MarkerOutOfBounds {
        name: &'static str,
        pos: Point,
        rows: usize,
        cols: usize,
    },

    #[error("source and destination both at {0}")]
    MarkersCoincide(Point),

    #[error("terrain has {found} cells, expected {expected}")]
    TerrainLength { expected: usize, found: usize },

    #[error("invalid terrain character {ch:?} at {pos}")]
    InvalidTerrain { ch: char, pos: Point },

    #[error("terrain at {pos} is {found:?}, disagreeing with the header")]
    MarkerMismatch { pos: Point, found: char },

    #[error("weights have {found} entries, expected {expected}")]
    WeightCount { expected: usize, found: usize },

    #[error("weight {token:?} at {pos} is not a positive integer")]
    InvalidWeightToken { token: String, pos: Point },
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
