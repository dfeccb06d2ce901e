//! Canonical text encoding of a [`Grid`].
//!
//! ```text
//! rows,cols,srcRow,srcCol,dstRow,dstCol|<terrain, row-major>|<weights, row-major>
//! ```
//!
//! Terrain uses one character per cell (`.` empty, `#` obstacle, `S` source,
//! `D` destination). Weights are whitespace-separated positive integers.
//! Decoding is all-or-nothing: a grid is only replaced once the whole text
//! has been validated.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::cell::CellKind;
use crate::error::{GridError, ParseError, Result};
use crate::geom::Point;
use crate::grid::Grid;

const HEADER_FIELDS: [&str; 6] = ["rows", "cols", "srcRow", "srcCol", "dstRow", "dstCol"];

impl Grid {
    /// Encode the grid in the canonical text form.
    ///
    /// Marks and the diagonal flag are not part of the encoding.
    pub fn serialize(&self) -> String {
        let len = self.len();
        let mut out = String::with_capacity(32 + len * 3);
        let (s, d) = (self.source(), self.destination());
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "{},{},{},{},{},{}|",
            self.rows(),
            self.cols(),
            s.row,
            s.col,
            d.row,
            d.col
        );
        out.extend(self.cells().iter().map(|k| k.to_char()));
        out.push('|');
        for (i, w) in self.weights().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{w}");
        }
        out
    }

    /// Replace this grid with the one encoded in `text`.
    ///
    /// On error `self` is left exactly as it was. The diagonal flag is kept.
    pub fn load(&mut self, text: &str) -> Result<()> {
        match decode(text) {
            Ok(mut grid) => {
                grid.set_allow_diagonals(self.allow_diagonals());
                *self = grid;
                Ok(())
            }
            Err(e) => {
                log::debug!("rejected grid text: {e}");
                Err(GridError::Parse(e))
            }
        }
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s).map_err(GridError::from)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

fn decode(text: &str) -> std::result::Result<Grid, ParseError> {
    let sections: Vec<&str> = text.split('|').collect();
    let [header, terrain, weights] = sections[..] else {
        return Err(ParseError::SectionCount(sections.len()));
    };

    let fields: Vec<&str> = header.split(',').collect();
    if fields.len() != HEADER_FIELDS.len() {
        return Err(ParseError::HeaderFieldCount(fields.len()));
    }
    let mut values = [0usize; 6];
    for ((slot, raw), name) in values.iter_mut().zip(&fields).zip(HEADER_FIELDS) {
        *slot = unsigned(raw.trim()).ok_or_else(|| ParseError::HeaderField {
            name,
            value: raw.to_string(),
        })?;
    }
    let [rows, cols, sr, sc, dr, dc] = values;

    let len = rows
        .checked_mul(cols)
        .filter(|&n| n >= 2 && rows <= i32::MAX as usize && cols <= i32::MAX as usize)
        .ok_or(ParseError::InvalidDimensions { rows, cols })?;

    let marker = |name: &'static str, row: usize, col: usize| {
        if row < rows && col < cols {
            Ok(Point::new(row as i32, col as i32))
        } else {
            Err(ParseError::MarkerOutOfBounds {
                name,
                pos: Point::new(
                    row.min(i32::MAX as usize) as i32,
                    col.min(i32::MAX as usize) as i32,
                ),
                rows,
                cols,
            })
        }
    };
    let source = marker("source", sr, sc)?;
    let destination = marker("destination", dr, dc)?;
    if source == destination {
        return Err(ParseError::MarkersCoincide(source));
    }

    let at = |i: usize| Point::new((i / cols) as i32, (i % cols) as i32);

    let found = terrain.chars().count();
    if found != len {
        return Err(ParseError::TerrainLength { expected: len, found });
    }
    let mut cells = Vec::with_capacity(len);
    for (i, ch) in terrain.chars().enumerate() {
        let pos = at(i);
        let kind = CellKind::from_char(ch).ok_or(ParseError::InvalidTerrain { ch, pos })?;
        let expected = if pos == source {
            CellKind::Source
        } else if pos == destination {
            CellKind::Destination
        } else if kind.is_marker() {
            // A marker the header does not point at.
            return Err(ParseError::MarkerMismatch { pos, found: ch });
        } else {
            kind
        };
        if kind != expected {
            return Err(ParseError::MarkerMismatch { pos, found: ch });
        }
        cells.push(kind);
    }

    let tokens: Vec<&str> = weights.split_whitespace().collect();
    if tokens.len() != len {
        return Err(ParseError::WeightCount {
            expected: len,
            found: tokens.len(),
        });
    }
    let mut parsed = Vec::with_capacity(len);
    for (i, token) in tokens.into_iter().enumerate() {
        match unsigned::<u32>(token) {
            Some(w) if w >= 1 => parsed.push(w),
            _ => {
                return Err(ParseError::InvalidWeightToken {
                    token: token.to_string(),
                    pos: at(i),
                });
            }
        }
    }

    Ok(Grid::from_parts(rows, cols, cells, parsed, source, destination))
}

/// Parse a plain run of ASCII digits. Signs and other decorations that
/// `str::parse` would accept are rejected.
fn unsigned<T: std::str::FromStr>(token: &str) -> Option<T> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&Grid::serialize(self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_canonical_string() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_weight(Point::new(1, 1), 4).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, format!("\"{}\"", g.serialize()));
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert!(back.same_layout(&g));
    }

    #[test]
    fn invalid_string_fails_to_deserialize() {
        let res: std::result::Result<Grid, _> = serde_json::from_str("\"2,2|..|1\"");
        assert!(res.is_err());
    }
}
