//! The error type shared by every gridpath crate.

use std::fmt;

use crate::geom::Coord;

/// Convenience alias used throughout gridpath.
pub type Result<T> = std::result::Result<T, PathError>;

/// Recoverable failures reported by the engine. Nothing in gridpath panics
/// on bad input; every condition below is returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A coordinate component lies outside `[COORD_MIN, COORD_MAX]`.
    InvalidCoordinate { x: i32, y: i32 },
    /// A valid coordinate that is not a cell of the grid.
    OutOfBounds(Coord),
    /// Grid dimensions that are negative or exceed the configured limits.
    InvalidSize { width: i32, height: i32 },
    /// A node that the graph or tree does not contain.
    UnknownNode(Coord),
    /// Adding this node would give it a second parent.
    DuplicateNode(Coord),
    /// The target is not reachable from the source.
    NoPathFound { from: Coord, to: Coord },
    /// The graph has no nodes at all.
    EmptyGraph,
    /// A bulk map whose cell count does not match the grid.
    DimensionMismatch { expected: usize, found: usize },
    /// A symbolic map character with no known weight.
    UnknownSymbol { ch: char, pos: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { x, y } => write!(f, "invalid coordinate ({x}, {y})"),
            Self::OutOfBounds(c) => write!(f, "coordinate {c} is outside the grid"),
            Self::InvalidSize { width, height } => {
                write!(f, "invalid grid size {width}x{height}")
            }
            Self::UnknownNode(c) => write!(f, "node {c} is not part of the graph"),
            Self::DuplicateNode(c) => write!(f, "node {c} is already part of the tree"),
            Self::NoPathFound { from, to } => write!(f, "no path from {from} to {to}"),
            Self::EmptyGraph => write!(f, "graph has no nodes"),
            Self::DimensionMismatch { expected, found } => {
                write!(f, "map has {found} cells, expected {expected}")
            }
            Self::UnknownSymbol { ch, pos } => {
                write!(f, "unknown map symbol \u{201c}{ch}\u{201d} at index {pos}")
            }
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let c = Coord::new(1, 2).unwrap();
        assert_eq!(
            PathError::InvalidCoordinate { x: 200, y: 0 }.to_string(),
            "invalid coordinate (200, 0)"
        );
        assert_eq!(
            PathError::NoPathFound { from: c, to: c }.to_string(),
            "no path from {1,2} to {1,2}"
        );
        assert_eq!(
            PathError::DimensionMismatch {
                expected: 9,
                found: 8
            }
            .to_string(),
            "map has 8 cells, expected 9"
        );
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(PathError::EmptyGraph);
        assert_eq!(e.to_string(), "graph has no nodes");
    }
}
