//! Directed weighted graphs over grid coordinates and shortest paths on
//! them.
//!
//! - [`Graph`]: node and edge sets with linear neighbourhood queries.
//! - [`Graph::shortest_path_tree`]: Dijkstra, producing a [`Tree`].
//! - [`Tree::dfs_root_to`]: depth-first route reconstruction.
//! - [`Graph::shortest_path`] / [`Graph::shortest_route`]: both in one call.
//!
//! All working state of a query lives in the call itself, so graphs and
//! trees can be queried through shared references, from several threads
//! at once.

mod edge;
mod graph;
mod route;
mod spt;
mod tree;

pub use edge::Edge;
pub use graph::Graph;
pub use route::Route;
pub use tree::Tree;
