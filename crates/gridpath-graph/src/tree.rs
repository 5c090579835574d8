use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use gridpath_core::{Coord, PathError, Result};

use crate::edge::Edge;
use crate::graph::Graph;

/// A rooted tree over coordinates: a graph without cycles in which every
/// node except the root has exactly one incoming edge.
///
/// Trees are produced by [`Graph::shortest_path_tree`] or grown by hand
/// with [`add_child_node_to`](Tree::add_child_node_to).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Coord,
    graph: Graph,
}

impl Tree {
    /// A tree holding only `root`.
    pub fn new(root: Coord) -> Self {
        let mut graph = Graph::new();
        graph.add_node(root);
        Self { root, graph }
    }

    /// Wrap a graph that already satisfies the tree invariants.
    pub(crate) fn from_parts(root: Coord, graph: Graph) -> Self {
        Self { root, graph }
    }

    #[inline]
    pub fn root(&self) -> Coord {
        self.root
    }

    pub fn nodes(&self) -> &BTreeSet<Coord> {
        self.graph.nodes()
    }

    pub fn edges(&self) -> &BTreeSet<Edge> {
        self.graph.edges()
    }

    #[inline]
    pub fn contains(&self, node: Coord) -> bool {
        self.graph.contains(node)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Always `false`: a tree holds at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Attach `child` below `parent` through an edge of the given weight.
    ///
    /// `parent` must already be in the tree and `child` must not, otherwise
    /// the tree would be disconnected or gain a cycle.
    pub fn add_child_node_to(&mut self, parent: Coord, child: Coord, weight: u32) -> Result<()> {
        if !self.contains(parent) {
            return Err(PathError::UnknownNode(parent));
        }
        if self.contains(child) {
            return Err(PathError::DuplicateNode(child));
        }
        self.graph.add_edge(parent, child, weight);
        Ok(())
    }

    /// The node whose edge leads to `node`. `None` for the root and for
    /// nodes outside the tree.
    pub fn parent_of(&self, node: Coord) -> Option<Coord> {
        self.graph.incoming_nodes_for(node).first().copied()
    }

    /// The direct children of `node`, in row-major order.
    pub fn children_of(&self, node: Coord) -> Vec<Coord> {
        self.graph.outgoing_nodes_for(node)
    }

    /// The path from the root to `target`, both included, found by
    /// depth-first search. Empty if `target` is not in the tree.
    ///
    /// The walk descends into the first unvisited child (row-major order)
    /// of the current node and backtracks to the previous node on the path
    /// when none is left. Each edge is crossed at most twice.
    pub fn dfs_root_to(&self, target: Coord) -> Vec<Coord> {
        if !self.contains(target) {
            return Vec::new();
        }

        let mut children: BTreeMap<Coord, Vec<Coord>> = BTreeMap::new();
        for edge in self.edges() {
            children.entry(edge.from).or_default().push(edge.to);
        }
        let unvisited_child = |node: Coord, visited: &BTreeSet<Coord>| {
            children
                .get(&node)
                .and_then(|kids| kids.iter().copied().find(|k| !visited.contains(k)))
        };

        let mut visited = BTreeSet::new();
        let mut path = Vec::new();
        let mut current = self.root;
        loop {
            visited.insert(current);
            if current == target {
                path.push(current);
                return path;
            }
            if let Some(child) = unvisited_child(current, &visited) {
                path.push(current);
                current = child;
                continue;
            }
            match path.pop() {
                Some(previous) => current = previous,
                None => return Vec::new(),
            }
        }
    }

    /// Total weight of the edges on the path from the root to `target`, or
    /// `None` if `target` is not in the tree.
    pub fn cost_to(&self, target: Coord) -> Option<u32> {
        let path = self.dfs_root_to(target);
        if path.is_empty() {
            return None;
        }
        Some(self.cost_of_path(&path))
    }

    /// Sum of the weights of the edges entering each node of `path` after
    /// the first. Nodes without an incoming tree edge add nothing.
    pub(crate) fn cost_of_path(&self, path: &[Coord]) -> u32 {
        let incoming: BTreeMap<Coord, u32> =
            self.edges().iter().map(|e| (e.to, e.weight)).collect();
        path.iter()
            .skip(1)
            .filter_map(|node| incoming.get(node).copied())
            .fold(0u32, u32::saturating_add)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "root {}, {} nodes, {} edges",
            self.root,
            self.graph.node_count(),
            self.graph.edge_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y).unwrap()
    }

    /// ```text
    ///        (0,0)
    ///       /     \
    ///    (1,0)   (0,1)
    ///    /   \       \
    /// (2,0) (1,1)   (0,2)
    ///          \
    ///         (1,2)
    /// ```
    fn sample() -> Tree {
        let mut t = Tree::new(c(0, 0));
        t.add_child_node_to(c(0, 0), c(1, 0), 1).unwrap();
        t.add_child_node_to(c(0, 0), c(0, 1), 2).unwrap();
        t.add_child_node_to(c(1, 0), c(2, 0), 3).unwrap();
        t.add_child_node_to(c(1, 0), c(1, 1), 4).unwrap();
        t.add_child_node_to(c(1, 1), c(1, 2), 5).unwrap();
        t.add_child_node_to(c(0, 1), c(0, 2), 6).unwrap();
        t
    }

    #[test]
    fn new_tree_holds_root() {
        let t = Tree::new(c(4, 4));
        assert_eq!(t.root(), c(4, 4));
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert!(t.edges().is_empty());
        assert_eq!(t.dfs_root_to(c(4, 4)), vec![c(4, 4)]);
    }

    #[test]
    fn dfs_finds_deep_node() {
        let t = sample();
        assert_eq!(t.dfs_root_to(c(1, 2)), vec![c(0, 0), c(1, 0), c(1, 1), c(1, 2)]);
    }

    #[test]
    fn dfs_backtracks_across_branches() {
        // (0,2) sits in the second branch; the walk exhausts the (1,0)
        // subtree first and must not leave any of it on the path.
        let t = sample();
        assert_eq!(t.dfs_root_to(c(0, 2)), vec![c(0, 0), c(0, 1), c(0, 2)]);
    }

    #[test]
    fn dfs_on_missing_target_is_empty() {
        let t = sample();
        assert!(t.dfs_root_to(c(9, 9)).is_empty());
    }

    #[test]
    fn dfs_does_not_leak_state_between_calls() {
        let t = sample();
        let first = t.dfs_root_to(c(2, 0));
        let second = t.dfs_root_to(c(2, 0));
        assert_eq!(first, vec![c(0, 0), c(1, 0), c(2, 0)]);
        assert_eq!(first, second);
    }

    #[test]
    fn add_child_validates() {
        let mut t = sample();
        assert_eq!(
            t.add_child_node_to(c(8, 8), c(9, 9), 1),
            Err(PathError::UnknownNode(c(8, 8)))
        );
        assert_eq!(
            t.add_child_node_to(c(2, 0), c(0, 0), 1),
            Err(PathError::DuplicateNode(c(0, 0)))
        );
        assert_eq!(t.len(), 7);
    }

    #[test]
    fn parents_and_children() {
        let t = sample();
        assert_eq!(t.parent_of(c(0, 0)), None);
        assert_eq!(t.parent_of(c(1, 2)), Some(c(1, 1)));
        assert_eq!(t.children_of(c(0, 0)), vec![c(1, 0), c(0, 1)]);
        assert!(t.children_of(c(2, 0)).is_empty());
    }

    #[test]
    fn costs() {
        let t = sample();
        assert_eq!(t.cost_to(c(0, 0)), Some(0));
        assert_eq!(t.cost_to(c(1, 2)), Some(1 + 4 + 5));
        assert_eq!(t.cost_to(c(0, 2)), Some(2 + 6));
        assert_eq!(t.cost_to(c(7, 7)), None);
    }

    #[test]
    fn path_cost_matches_cost_to() {
        let t = sample();
        let path = t.dfs_root_to(c(1, 2));
        assert_eq!(t.cost_of_path(&path), 10);
        assert_eq!(Some(t.cost_of_path(&path)), t.cost_to(c(1, 2)));
        assert_eq!(t.cost_of_path(&[c(0, 0)]), 0);
        assert_eq!(t.cost_of_path(&[]), 0);
    }

    #[test]
    fn display() {
        assert_eq!(sample().to_string(), "root {0,0}, 7 nodes, 6 edges");
    }
}
