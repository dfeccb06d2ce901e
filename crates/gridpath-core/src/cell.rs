//! Per-cell value types: [`CellKind`] terrain and the [`Mark`] overlay.

use std::fmt;

/// Terrain classification of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Obstacle,
    Source,
    Destination,
}

impl CellKind {
    /// Character used for this kind in the canonical text encoding.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Obstacle => '#',
            Self::Source => 'S',
            Self::Destination => 'D',
        }
    }

    /// Inverse of [`to_char`](Self::to_char). Returns `None` for any
    /// character outside the alphabet.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Obstacle),
            'S' => Some(Self::Source),
            'D' => Some(Self::Destination),
            _ => None,
        }
    }

    /// Whether a search may enter a cell of this kind.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// Whether this is the source or destination marker.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, Self::Source | Self::Destination)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Obstacle => "obstacle",
            Self::Source => "source",
            Self::Destination => "destination",
        };
        f.write_str(name)
    }
}

/// Transient overlay painted by a finished search for display purposes.
///
/// Marks never influence a search and are not part of the text encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    #[default]
    None,
    Visited,
    Path,
}
