use std::collections::{BTreeMap, BTreeSet};

use gridpath_core::{Coord, PathError, Result};

use crate::edge::Edge;
use crate::route::Route;

/// A set of coordinates joined by weighted directed edges.
///
/// Nodes and edges live in ordered sets, so every query below returns its
/// results in a reproducible order (row-major by coordinate).
///
/// Besides its topology a graph carries *terrain weights*: per-node costs
/// seeded from outside (typically by a grid) with [`set_weights`]. They are
/// informational and distinct from the bookkeeping weights of a
/// shortest-path run, which live in per-call scratch and never touch the
/// graph.
///
/// [`set_weights`]: Graph::set_weights
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: BTreeSet<Coord>,
    edges: BTreeSet<Edge>,
    weights: BTreeMap<Coord, i32>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph from existing node and edge sets.
    pub fn from_parts(nodes: BTreeSet<Coord>, edges: BTreeSet<Edge>) -> Self {
        Self {
            nodes,
            edges,
            weights: BTreeMap::new(),
        }
    }

    pub fn nodes(&self) -> &BTreeSet<Coord> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn set_nodes(&mut self, nodes: BTreeSet<Coord>) {
        self.nodes = nodes;
    }

    pub fn set_edges(&mut self, edges: BTreeSet<Edge>) {
        self.edges = edges;
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: Coord) -> bool {
        self.nodes.insert(node)
    }

    /// Insert the edge `from -> to` along with both endpoints. Returns
    /// `false` if an identical edge was already present.
    pub fn add_edge(&mut self, from: Coord, to: Coord, weight: u32) -> bool {
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.edges.insert(Edge::new(from, to, weight))
    }

    #[inline]
    pub fn contains(&self, node: Coord) -> bool {
        self.nodes.contains(&node)
    }

    #[inline]
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    // -----------------------------------------------------------------------
    // Neighbourhood queries (linear scans over the edge set)
    // -----------------------------------------------------------------------

    /// Edges leaving `node`.
    pub fn outgoing_edges_for(&self, node: Coord) -> Vec<Edge> {
        self.edges.iter().filter(|e| e.from == node).copied().collect()
    }

    /// Edges entering `node`.
    pub fn incoming_edges_for(&self, node: Coord) -> Vec<Edge> {
        self.edges.iter().filter(|e| e.to == node).copied().collect()
    }

    /// Nodes reachable from `node` by one edge.
    pub fn outgoing_nodes_for(&self, node: Coord) -> Vec<Coord> {
        self.edges
            .iter()
            .filter(|e| e.from == node)
            .map(|e| e.to)
            .collect()
    }

    /// Nodes with an edge into `node`.
    pub fn incoming_nodes_for(&self, node: Coord) -> Vec<Coord> {
        self.edges
            .iter()
            .filter(|e| e.to == node)
            .map(|e| e.from)
            .collect()
    }

    // -----------------------------------------------------------------------
    // Terrain weights
    // -----------------------------------------------------------------------

    /// Bulk-assign terrain weights.
    pub fn set_weights(&mut self, weights: impl IntoIterator<Item = (Coord, i32)>) {
        for (node, weight) in weights {
            self.set_weight_of(node, weight);
        }
    }

    pub fn set_weight_of(&mut self, node: Coord, weight: i32) {
        self.weights.insert(node, weight);
    }

    /// The terrain weight of `node`, if one was assigned.
    pub fn weight_of(&self, node: Coord) -> Option<i32> {
        self.weights.get(&node).copied()
    }

    // -----------------------------------------------------------------------
    // Shortest paths
    // -----------------------------------------------------------------------

    /// The shortest path from `from` to `to`, both included.
    ///
    /// Builds a shortest-path tree rooted at `from` and reconstructs the
    /// route to `to` by depth-first search over the tree. Fails with
    /// [`PathError::NoPathFound`] if `to` is not reachable.
    pub fn shortest_path(&self, from: Coord, to: Coord) -> Result<Vec<Coord>> {
        Ok(self.shortest_route(from, to)?.nodes)
    }

    /// Like [`shortest_path`](Self::shortest_path), also reporting the total
    /// cost (sum of the weights of the edges taken).
    pub fn shortest_route(&self, from: Coord, to: Coord) -> Result<Route> {
        if !self.contains(to) {
            return Err(PathError::UnknownNode(to));
        }
        let tree = self.shortest_path_tree(from)?;
        let nodes = tree.dfs_root_to(to);
        if nodes.is_empty() {
            log::warn!("no path from {from} to {to}");
            return Err(PathError::NoPathFound { from, to });
        }
        let cost = tree.cost_of_path(&nodes);
        log::debug!(
            "path from {from} to {to}: {} nodes, cost {cost}",
            nodes.len()
        );
        Ok(Route { nodes, cost })
    }
}
