use std::fmt;

use gridpath_core::Coord;

/// A directed, weighted arc between two coordinates.
///
/// A two-way connection is two edges, and the two directions may carry
/// different weights: on a grid the weight is the cost of entering `to`.
/// Edges order by `from`, then `to`, then `weight`, so the edges leaving a
/// node are contiguous in an ordered set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: Coord,
    pub to: Coord,
    pub weight: u32,
}

impl Edge {
    #[inline]
    pub const fn new(from: Coord, to: Coord, weight: u32) -> Self {
        Self { from, to, weight }
    }

    /// The same connection travelled the other way, with the same weight.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.from, self.weight, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn equality_covers_all_fields() {
        let e = Edge::new(c(0, 0), c(1, 0), 3);
        assert_eq!(e, Edge::new(c(0, 0), c(1, 0), 3));
        assert_ne!(e, Edge::new(c(0, 0), c(1, 0), 4));
        assert_ne!(e, e.reversed());
    }

    #[test]
    fn ordered_by_source_first() {
        let a = Edge::new(c(5, 0), c(0, 0), 9);
        let b = Edge::new(c(0, 1), c(0, 0), 1);
        assert!(a < b);
    }

    #[test]
    fn display() {
        assert_eq!(Edge::new(c(0, 0), c(0, 1), 2).to_string(), "{0,0} -[2]-> {0,1}");
    }
}
