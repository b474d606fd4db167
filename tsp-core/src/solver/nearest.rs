#[cfg(test)]
#[path = "../../tests/unit/solver/nearest_test.rs"]
mod nearest_test;

use super::*;
use crate::models::{Cost, WeightedGraph};

/// Greedy heuristic: repeatedly moves to the closest city which is not visited yet.
/// It is fast and deterministic, but gives no optimality guarantee.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestNeighborSolver;

impl Solver for NearestNeighborSolver {
    fn name(&self) -> &'static str {
        "nearest-neighbor"
    }

    fn solve(&self, matrix: &DistanceMatrix, start: Node) -> Result<Tour, TspError> {
        if let Some(tour) = solve_degenerate(matrix, start)? {
            return Ok(tour);
        }

        let mut path = build_nearest_neighbor_path(matrix, start);
        path.push(start);

        Tour::evaluate(matrix, path)
    }
}

/// Builds an open path visiting the closest unvisited city at each step, ties are resolved in
/// favor of the city with the lowest index. Stops early when no unvisited city is reachable from
/// the current one, which can happen only when the graph is not complete.
pub(crate) fn build_nearest_neighbor_path<G: WeightedGraph>(graph: &G, start: Node) -> Vec<Node> {
    let size = graph.size();

    let mut visited = vec![false; size];
    let mut path = Vec::with_capacity(size + 1);
    let mut current = start;

    visited[start] = true;
    path.push(start);

    for _ in 1..size {
        let next = (0..size)
            .filter(|&city| !visited[city])
            .filter_map(|city| graph.weight(current, city).map(|weight| (city, weight)))
            .fold(None, |nearest: Option<(Node, Cost)>, (city, weight)| match nearest {
                Some((_, nearest_weight)) if weight >= nearest_weight => nearest,
                _ => Some((city, weight)),
            });

        let Some((city, _)) = next else { break };

        visited[city] = true;
        path.push(city);
        current = city;
    }

    path
}
