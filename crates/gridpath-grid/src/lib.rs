//! Grid adapter for the gridpath engine.
//!
//! A [`Grid`] holds per-cell traversability and terrain weights and turns
//! them into a [`Graph`](gridpath_graph::Graph) on every query. A
//! [`WeightTable`] loads weights from symbolic tile maps.
//!
//! ```
//! use gridpath_core::Coord;
//! use gridpath_grid::Grid;
//!
//! let mut grid = Grid::new(3, 3)?;
//! grid.load_weight_string("111\n0 1\n111")?;
//! let from = Coord::new(0, 0)?;
//! let to = Coord::new(0, 2)?;
//! let route = grid.shortest_route(from, to)?;
//! assert_eq!(route.cost, 6);
//! # Ok::<(), gridpath_core::PathError>(())
//! ```

mod grid;
mod weights;

pub use grid::Grid;
pub use weights::{WeightTable, clean_map};
