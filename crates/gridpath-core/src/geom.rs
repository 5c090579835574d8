//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! A [`Coord`] is always either inside `[COORD_MIN, COORD_MAX]` on both axes
//! or the [`Coord::UNDEFINED`] sentinel. Construction and mutation validate
//! and report [`PathError::InvalidCoordinate`] instead of silently keeping
//! the old value.

use std::fmt;

use crate::error::{PathError, Result};

/// Smallest valid coordinate component.
pub const COORD_MIN: i32 = 0;

/// Largest valid coordinate component.
pub const COORD_MAX: i32 = 100;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A bounded 2D integer grid position. X grows right, Y grows down.
///
/// Ordering is row-major: by `y` first, then by `x`. Sets and maps keyed by
/// `Coord` therefore iterate in reading order, which is also the tie-break
/// used when several nodes share the lightest tentative weight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(i32, i32)", into = "(i32, i32)")
)]
pub struct Coord {
    x: i32,
    y: i32,
}

impl Coord {
    /// The "undefined" sentinel `(-1, -1)`.
    pub const UNDEFINED: Self = Self { x: -1, y: -1 };

    /// Create a new coordinate, failing if either component is outside
    /// `[COORD_MIN, COORD_MAX]`.
    pub fn new(x: i32, y: i32) -> Result<Self> {
        if Self::valid(x) && Self::valid(y) {
            Ok(Self { x, y })
        } else {
            Err(PathError::InvalidCoordinate { x, y })
        }
    }

    #[inline]
    const fn valid(v: i32) -> bool {
        v >= COORD_MIN && v <= COORD_MAX
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Set the x component. On error the coordinate is left unchanged.
    pub fn set_x(&mut self, x: i32) -> Result<()> {
        if !Self::valid(x) {
            return Err(PathError::InvalidCoordinate { x, y: self.y });
        }
        self.x = x;
        Ok(())
    }

    /// Set the y component. On error the coordinate is left unchanged.
    pub fn set_y(&mut self, y: i32) -> Result<()> {
        if !Self::valid(y) {
            return Err(PathError::InvalidCoordinate { x: self.x, y });
        }
        self.y = y;
        Ok(())
    }

    /// Whether this is the [`UNDEFINED`](Self::UNDEFINED) sentinel.
    #[inline]
    pub fn is_undefined(self) -> bool {
        self == Self::UNDEFINED
    }

    /// Return the coordinate shifted by (dx, dy), or `None` if the result
    /// leaves the valid coordinate space.
    pub fn shift(self, dx: i32, dy: i32) -> Option<Self> {
        let x = self.x.checked_add(dx)?;
        let y = self.y.checked_add(dy)?;
        Self::new(x, y).ok()
    }

    /// The valid cardinal neighbours, in up, right, down, left order.
    pub fn neighbors_4(self) -> impl Iterator<Item = Coord> {
        const DIRS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        DIRS.into_iter()
            .filter_map(move |(dx, dy)| self.shift(dx, dy))
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Default for Coord {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.x, self.y)
    }
}

impl TryFrom<(i32, i32)> for Coord {
    type Error = PathError;

    fn try_from((x, y): (i32, i32)) -> Result<Self> {
        if (x, y) == (-1, -1) {
            return Ok(Self::UNDEFINED);
        }
        Self::new(x, y)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The rectangle `[0, width) x [0, height)` covered by a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// Create bounds of the given size.
    ///
    /// Both sides must be non-negative and every cell must be addressable
    /// by a [`Coord`], so neither side may exceed `COORD_MAX + 1`.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let fits = |v: i32| (0..=COORD_MAX + 1).contains(&v);
        if !fits(width) || !fits(height) {
            return Err(PathError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.width * self.height) as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `c` is a cell of this rectangle.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        !c.is_undefined() && c.x < self.width && c.y < self.height
    }

    /// Row-major flat index of `c`, or `None` if `c` is outside.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.y * self.width + c.x) as usize)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            x: 0,
            y: 0,
        }
    }

    /// The cells of row `y`, left to right. Empty if `y` is out of range.
    pub fn row(self, y: i32) -> Vec<Coord> {
        if y < 0 || y >= self.height {
            return Vec::new();
        }
        (0..self.width).map(|x| Coord { x, y }).collect()
    }

    /// The cells of column `x`, top to bottom. Empty if `x` is out of range.
    pub fn column(self, x: i32) -> Vec<Coord> {
        if x < 0 || x >= self.width {
            return Vec::new();
        }
        (0..self.height).map(|y| Coord { x, y }).collect()
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    x: i32,
    y: i32,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.y >= self.bounds.height || self.bounds.is_empty() {
            return None;
        }
        let c = Coord {
            x: self.x,
            y: self.y,
        };
        self.x += 1;
        if self.x >= self.bounds.width {
            self.x = 0;
            self.y += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.y >= self.bounds.height {
            return (0, Some(0));
        }
        let w = self.bounds.width as usize;
        let remaining_in_row = (self.bounds.width - self.x) as usize;
        let remaining_rows = (self.bounds.height - self.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let p = Coord::new(3, 7).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[3,7]");
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn coord_deserialize_validates() {
        assert!(serde_json::from_str::<Coord>("[101,0]").is_err());
        let undefined: Coord = serde_json::from_str("[-1,-1]").unwrap();
        assert!(undefined.is_undefined());
    }
}
