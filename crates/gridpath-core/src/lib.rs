//! **gridpath-core** — core types for the weighted-grid shortest-path engine.
//!
//! This crate provides the foundational types used across the *gridpath*
//! crates: bounded coordinates, grid bounds, the shared error type, and grid
//! size limits.

pub mod config;
pub mod error;
pub mod geom;

pub use config::GridConfig;
pub use error::{PathError, Result};
pub use geom::{Bounds, BoundsIter, COORD_MAX, COORD_MIN, Coord};
