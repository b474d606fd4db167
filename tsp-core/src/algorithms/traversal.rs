//! Depth-first traversal of a tree given by its edges.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/traversal_test.rs"]
mod traversal_test;

use crate::models::{Edge, Node};
use crate::utils::TspError;

/// Creates an adjacency list where each edge contributes an entry in both directions.
/// Neighbours keep the order in which edges are given.
pub fn create_adjacency(size: usize, edges: &[Edge]) -> Result<Vec<Vec<Node>>, TspError> {
    let mut adjacency = vec![Vec::new(); size];

    for edge in edges {
        if let Some(&index) = [edge.from, edge.to].iter().find(|&&node| node >= size) {
            return Err(TspError::IndexOutOfRange { index, size });
        }

        adjacency[edge.from].push(edge.to);
        adjacency[edge.to].push(edge.from);
    }

    Ok(adjacency)
}

/// Walks the tree depth-first from the start node and returns nodes in the order of their first
/// visit (preorder). Neighbours are visited in adjacency order, the same order a recursive walk
/// would produce; an explicit stack is used instead of recursion.
///
/// Nodes not reachable from the start are not included.
pub fn preorder_walk(size: usize, edges: &[Edge], start: Node) -> Result<Vec<Node>, TspError> {
    if start >= size {
        return Err(TspError::IndexOutOfRange { index: start, size });
    }

    let adjacency = create_adjacency(size, edges)?;

    let mut visited = vec![false; size];
    let mut order = Vec::with_capacity(size);
    // a node and the position of its next neighbour to inspect
    let mut stack: Vec<(Node, usize)> = vec![(start, 0)];

    visited[start] = true;
    order.push(start);

    while let Some((node, next)) = stack.last_mut() {
        match adjacency[*node].get(*next) {
            Some(&neighbour) => {
                *next += 1;

                if !visited[neighbour] {
                    visited[neighbour] = true;
                    order.push(neighbour);
                    stack.push((neighbour, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(order)
}
