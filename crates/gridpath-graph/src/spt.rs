//! Shortest-path-tree construction (Dijkstra).

use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use gridpath_core::{Coord, PathError, Result};

use crate::edge::Edge;
use crate::graph::Graph;
use crate::tree::Tree;

/// Frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// lowest cost first and, among equal costs, the smallest coordinate in
/// row-major order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Candidate {
    cost: u32,
    node: Coord,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Working state of a single tree construction.
///
/// Owned by one call of [`Graph::shortest_path_tree`], so concurrent queries
/// on a shared graph never see each other's bookkeeping.
struct SptScratch<'g> {
    /// Outgoing edges per node, built once from the graph's edge set.
    adjacency: BTreeMap<Coord, Vec<&'g Edge>>,
    /// Best known cost from the root. Absent means unreachable so far.
    tentative: BTreeMap<Coord, u32>,
    /// The edge currently giving each node its tentative cost.
    connecting: BTreeMap<Coord, Edge>,
    picked: BTreeSet<Coord>,
    unpicked: BTreeSet<Coord>,
    picked_edges: BTreeSet<Edge>,
    open: BinaryHeap<Candidate>,
}

impl<'g> SptScratch<'g> {
    fn new(graph: &'g Graph, root: Coord) -> Self {
        let mut adjacency: BTreeMap<Coord, Vec<&'g Edge>> = BTreeMap::new();
        for edge in graph.edges() {
            adjacency.entry(edge.from).or_default().push(edge);
        }

        let mut scratch = Self {
            adjacency,
            tentative: BTreeMap::new(),
            connecting: BTreeMap::new(),
            picked: BTreeSet::new(),
            unpicked: graph.nodes().clone(),
            picked_edges: BTreeSet::new(),
            open: BinaryHeap::new(),
        };
        scratch.tentative.insert(root, 0);
        scratch.open.push(Candidate {
            cost: 0,
            node: root,
        });
        scratch
    }

    /// Remove and return the lightest unpicked node that has a finite cost.
    fn pick_lightest(&mut self) -> Option<(Coord, u32)> {
        while let Some(Candidate { cost, node }) = self.open.pop() {
            // Skip stale entries superseded by a later relaxation.
            if !self.unpicked.contains(&node) || self.tentative.get(&node) != Some(&cost) {
                continue;
            }
            self.unpicked.remove(&node);
            self.picked.insert(node);
            return Some((node, cost));
        }
        None
    }

    /// Relax every edge from `node` to a still unpicked neighbour.
    fn relax_neighbours(&mut self, node: Coord, cost: u32) {
        let Some(edges) = self.adjacency.get(&node) else {
            return;
        };
        for &edge in edges {
            if !self.unpicked.contains(&edge.to) {
                continue;
            }
            let candidate = cost.saturating_add(edge.weight);
            let improves = self
                .tentative
                .get(&edge.to)
                .is_none_or(|&current| candidate < current);
            if !improves {
                continue;
            }
            log::trace!("relaxed {} to cost {candidate} via {edge}", edge.to);
            self.tentative.insert(edge.to, candidate);
            self.connecting.insert(edge.to, *edge);
            self.open.push(Candidate {
                cost: candidate,
                node: edge.to,
            });
        }
    }

    fn pick_connecting_edge_for(&mut self, node: Coord) {
        if let Some(edge) = self.connecting.get(&node) {
            self.picked_edges.insert(*edge);
        }
    }
}

impl Graph {
    /// Build the shortest-path tree rooted at `root`.
    ///
    /// Nodes are finalised in order of increasing cost from the root; ties
    /// go to the smaller coordinate in row-major order, which makes the
    /// resulting tree deterministic. Every finalised node except the root
    /// contributes the edge through which it was reached. Nodes that are not
    /// reachable from `root` are left out of the tree.
    ///
    /// Fails with [`PathError::EmptyGraph`] on a graph without nodes and
    /// [`PathError::UnknownNode`] if `root` is not one of them.
    pub fn shortest_path_tree(&self, root: Coord) -> Result<Tree> {
        if self.is_empty() {
            return Err(PathError::EmptyGraph);
        }
        if !self.contains(root) {
            return Err(PathError::UnknownNode(root));
        }

        let mut scratch = SptScratch::new(self, root);
        while let Some((node, cost)) = scratch.pick_lightest() {
            scratch.relax_neighbours(node, cost);
            if node != root {
                scratch.pick_connecting_edge_for(node);
            }
        }

        log::debug!(
            "shortest path tree from {root}: {} of {} nodes reached, {} left unreachable",
            scratch.picked.len(),
            self.node_count(),
            scratch.unpicked.len()
        );

        let graph = Graph::from_parts(scratch.picked, scratch.picked_edges);
        Ok(Tree::from_parts(root, graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y).unwrap()
    }

    /// Two-way 4-connected lattice of `w` x `h` nodes, every edge weight 1.
    fn lattice(w: i32, h: i32) -> Graph {
        let mut g = Graph::new();
        for y in 0..h {
            for x in 0..w {
                g.add_node(c(x, y));
                if x + 1 < w {
                    g.add_edge(c(x, y), c(x + 1, y), 1);
                    g.add_edge(c(x + 1, y), c(x, y), 1);
                }
                if y + 1 < h {
                    g.add_edge(c(x, y), c(x, y + 1), 1);
                    g.add_edge(c(x, y + 1), c(x, y), 1);
                }
            }
        }
        g
    }

    #[test]
    fn tree_spans_reachable_nodes() {
        let g = lattice(3, 3);
        let tree = g.shortest_path_tree(c(1, 1)).unwrap();
        assert_eq!(tree.root(), c(1, 1));
        assert_eq!(tree.nodes(), g.nodes());
        assert_eq!(tree.edges().len(), tree.nodes().len() - 1);
        // Exactly one incoming edge per non-root node, none for the root.
        for &node in tree.nodes() {
            let incoming = tree.edges().iter().filter(|e| e.to == node).count();
            let expected = if node == c(1, 1) { 0 } else { 1 };
            assert_eq!(incoming, expected, "node {node}");
        }
    }

    #[test]
    fn unreachable_nodes_are_left_out() {
        let mut g = lattice(2, 1);
        g.add_node(c(5, 5));
        g.add_edge(c(7, 7), c(0, 0), 1);
        let tree = g.shortest_path_tree(c(0, 0)).unwrap();
        let expected: BTreeSet<Coord> = [c(0, 0), c(1, 0)].into_iter().collect();
        assert_eq!(tree.nodes(), &expected);
        assert_eq!(tree.edges().len(), 1);
    }

    #[test]
    fn ties_go_to_row_major_order() {
        // Both (1,0) and (0,1) reach (1,1) at cost 2; (1,0) is finalised
        // first, so its edge wins.
        let g = lattice(2, 2);
        let tree = g.shortest_path_tree(c(0, 0)).unwrap();
        assert_eq!(tree.parent_of(c(1, 1)), Some(c(1, 0)));
    }

    #[test]
    fn relaxation_keeps_cheapest_edge() {
        let mut g = Graph::new();
        g.add_edge(c(0, 0), c(3, 0), 10);
        g.add_edge(c(0, 0), c(1, 0), 2);
        g.add_edge(c(1, 0), c(2, 0), 2);
        g.add_edge(c(2, 0), c(3, 0), 2);
        let tree = g.shortest_path_tree(c(0, 0)).unwrap();
        assert_eq!(tree.parent_of(c(3, 0)), Some(c(2, 0)));
        assert_eq!(tree.cost_to(c(3, 0)), Some(6));
        assert!(!tree.edges().contains(&Edge::new(c(0, 0), c(3, 0), 10)));
    }

    #[test]
    fn parallel_edges_use_the_lighter_one() {
        let mut g = Graph::new();
        g.add_edge(c(0, 0), c(1, 0), 7);
        g.add_edge(c(0, 0), c(1, 0), 3);
        let tree = g.shortest_path_tree(c(0, 0)).unwrap();
        assert_eq!(tree.cost_to(c(1, 0)), Some(3));
    }

    #[test]
    fn zero_weight_edges() {
        let mut g = Graph::new();
        g.add_edge(c(0, 0), c(1, 0), 0);
        g.add_edge(c(1, 0), c(2, 0), 0);
        let tree = g.shortest_path_tree(c(0, 0)).unwrap();
        assert_eq!(tree.cost_to(c(2, 0)), Some(0));
        assert_eq!(tree.dfs_root_to(c(2, 0)), vec![c(0, 0), c(1, 0), c(2, 0)]);
    }

    #[test]
    fn edges_into_foreign_nodes_are_ignored() {
        let nodes: BTreeSet<Coord> = [c(0, 0)].into_iter().collect();
        let edges: BTreeSet<Edge> = [Edge::new(c(0, 0), c(1, 0), 1)].into_iter().collect();
        let g = Graph::from_parts(nodes, edges);
        let tree = g.shortest_path_tree(c(0, 0)).unwrap();
        assert_eq!(tree.nodes().len(), 1);
        assert!(tree.edges().is_empty());
    }

    #[test]
    fn candidate_heap_order() {
        let mut heap = BinaryHeap::new();
        heap.push(Candidate { cost: 2, node: c(0, 0) });
        heap.push(Candidate { cost: 1, node: c(3, 1) });
        heap.push(Candidate { cost: 1, node: c(4, 0) });
        let order: Vec<Coord> = std::iter::from_fn(|| heap.pop().map(|n| n.node)).collect();
        assert_eq!(order, vec![c(4, 0), c(3, 1), c(0, 0)]);
    }
}
