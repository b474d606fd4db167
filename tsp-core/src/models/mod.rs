//! Contains models shared by all solvers: a distance matrix, a tour and an edge.

mod matrix;
pub use self::matrix::*;

mod tour;
pub use self::tour::*;

use crate::utils::Float;

/// A node is a unique identifier of a city, an index in the distance matrix.
pub type Node = usize;

/// Represents an accumulated weight of one or many edges.
pub type Cost = Float;

/// Represents graph structure with weighted edges. Missing edge is expressed by `None`.
pub trait WeightedGraph {
    /// Returns amount of nodes in the graph.
    fn size(&self) -> usize;

    /// Returns weight of the edge between two nodes, if it exists.
    fn weight(&self, from: Node, to: Node) -> Option<Cost>;
}

/// An undirected weighted edge between two different cities, `from` is always less than `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// A city with the lower index.
    pub from: Node,
    /// A city with the greater index.
    pub to: Node,
    /// An edge weight.
    pub weight: Cost,
}

/// Creates an edge from a pair of nodes keeping them ordered.
pub fn make_edge(i: Node, j: Node, weight: Cost) -> Edge {
    if i < j { Edge { from: i, to: j, weight } } else { Edge { from: j, to: i, weight } }
}
