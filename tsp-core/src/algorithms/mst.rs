//! Builds a minimum spanning tree with Kruskal's algorithm on top of a disjoint-set partition.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/mst_test.rs"]
mod mst_test;

use crate::models::{Edge, Node, WeightedGraph, make_edge};
use crate::utils::{TspError, compare_floats};

/// A disjoint-set partition of cities used to detect cycles while the tree is built.
///
/// `find` compresses paths, `union` does no balancing by rank or size: the root of the first
/// set is attached to the root of the second one. Balancing would change which tree is
/// produced among equal weight alternatives.
pub struct DisjointSet {
    parent: Vec<Node>,
}

impl DisjointSet {
    /// Creates a partition where each node is its own singleton set.
    pub fn new(size: usize) -> Self {
        Self { parent: (0..size).collect() }
    }

    /// Returns the representative of the set which contains the node. Every node on the visited
    /// path is reassigned directly to the representative.
    pub fn find(&mut self, node: Node) -> Node {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges sets which contain given nodes. Returns false if they are already in the same set.
    pub fn union(&mut self, a: Node, b: Node) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));

        if root_a == root_b {
            return false;
        }

        self.parent[root_a] = root_b;

        true
    }

    /// Returns amount of nodes in the partition.
    pub fn size(&self) -> usize {
        self.parent.len()
    }
}

/// Enumerates every undirected edge of the graph once (`i < j`) in row-major order.
/// Missing edges are skipped.
pub fn collect_edges<G: WeightedGraph>(graph: &G) -> Vec<Edge> {
    let size = graph.size();

    (0..size)
        .flat_map(|i| (i + 1..size).filter_map(move |j| graph.weight(i, j).map(|weight| make_edge(i, j, weight))))
        .collect()
}

/// Returns `n - 1` edges of a minimum spanning tree in the order they were accepted.
///
/// Edges are sorted by weight with a stable sort, so ties keep enumeration order and the
/// resulting tree is deterministic. Fails with `DisconnectedGraph` when not all cities can be connected.
pub fn build_minimum_spanning_tree<G: WeightedGraph>(graph: &G) -> Result<Vec<Edge>, TspError> {
    let size = graph.size();
    let required = size.saturating_sub(1);

    let mut edges = collect_edges(graph);
    edges.sort_by(|a, b| compare_floats(a.weight, b.weight));

    let mut partition = DisjointSet::new(size);
    let mut tree = Vec::with_capacity(required);

    for edge in edges {
        if tree.len() == required {
            break;
        }

        if partition.union(edge.from, edge.to) {
            tree.push(edge);
        }
    }

    if tree.len() < required {
        return Err(TspError::DisconnectedGraph { accepted: tree.len(), required });
    }

    Ok(tree)
}
