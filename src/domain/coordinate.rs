//! Integer grid coordinates on an unbounded plane.
//!
//! A `Coordinate` is a plain value: equality and hashing are structural on
//! `(x, y)`, which is what makes live-set deduplication correct.

use std::fmt;
use std::str::FromStr;

use super::error::CoordinateError;

/// An immutable position on the infinite grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coordinate {
    x: i64,
    y: i64,
}

impl Coordinate {
    /// Smallest component value accepted by [`Coordinate::new`].
    pub const MIN: i64 = i64::MIN + 2;
    /// Largest component value accepted by [`Coordinate::new`].
    pub const MAX: i64 = i64::MAX - 2;

    /// Create a coordinate, rejecting components within two steps of the
    /// i64 boundary. The margin guarantees that neighbor enumeration stays
    /// exact out to the candidate cells one ring beyond the live set, so
    /// stepping a board can never silently wrap.
    pub fn new(x: i64, y: i64) -> Result<Self, CoordinateError> {
        if !(Self::MIN..=Self::MAX).contains(&x) {
            return Err(CoordinateError::Overflow { axis: 'x', value: x });
        }
        if !(Self::MIN..=Self::MAX).contains(&y) {
            return Err(CoordinateError::Overflow { axis: 'y', value: y });
        }
        Ok(Self { x, y })
    }

    pub const fn x(self) -> i64 {
        self.x
    }

    pub const fn y(self) -> i64 {
        self.y
    }

    /// The 8 adjacent coordinates (4 orthogonal, 4 diagonal) in row-major
    /// order: NW, N, NE, W, E, SW, S, SE. The order carries no semantic
    /// weight; it is fixed so tests can assert on it directly.
    ///
    /// Neighbors of an in-range coordinate may land one step past the
    /// accepted range; [`Board`](super::Board) re-validates them before they
    /// become part of a stored generation.
    pub const fn neighbors(self) -> [Coordinate; 8] {
        let Self { x, y } = self;
        [
            Self { x: x - 1, y: y - 1 },
            Self { x, y: y - 1 },
            Self { x: x + 1, y: y - 1 },
            Self { x: x - 1, y },
            Self { x: x + 1, y },
            Self { x: x - 1, y: y + 1 },
            Self { x, y: y + 1 },
            Self { x: x + 1, y: y + 1 },
        ]
    }

    /// Re-check the construction margin. Neighbors of an in-range coordinate
    /// can sit one step past it, so every coordinate is re-validated before
    /// it is stored in a board's live set.
    pub(crate) fn validated(self) -> Result<Self, CoordinateError> {
        Self::new(self.x, self.y)
    }

    /// Translate by `(dx, dy)`, surfacing overflow instead of wrapping.
    pub fn translated(self, dx: i64, dy: i64) -> Result<Self, CoordinateError> {
        let x = self
            .x
            .checked_add(dx)
            .ok_or(CoordinateError::Overflow { axis: 'x', value: self.x })?;
        let y = self
            .y
            .checked_add(dy)
            .ok_or(CoordinateError::Overflow { axis: 'y', value: self.y })?;
        Self::new(x, y)
    }
}

impl TryFrom<(i64, i64)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((x, y): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parse `"x,y"` (surrounding parentheses and whitespace allowed).
    /// Anything that is not two integers is rejected, never coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| CoordinateError::Invalid(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| CoordinateError::Invalid(s.to_string()))
        };
        Self::new(parse(x)?, parse(y)?)
    }
}
