#[cfg(test)]
#[path = "../../tests/unit/solver/approximate_test.rs"]
mod approximate_test;

use super::*;
use crate::algorithms::mst::build_minimum_spanning_tree;
use crate::algorithms::traversal::preorder_walk;

/// A minimum spanning tree based heuristic: the tour visits cities in preorder of the tree
/// walked from the start city and returns back to it.
///
/// The cost is at most twice the optimum when the matrix satisfies the triangle inequality.
/// That is not verified: on non-metric input the tour is still valid, but its quality is unbounded.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproximateSolver;

impl Solver for ApproximateSolver {
    fn name(&self) -> &'static str {
        "approximate"
    }

    fn solve(&self, matrix: &DistanceMatrix, start: Node) -> Result<Tour, TspError> {
        if let Some(tour) = solve_degenerate(matrix, start)? {
            return Ok(tour);
        }

        let tree = build_minimum_spanning_tree(matrix)?;

        let mut path = preorder_walk(matrix.size(), tree.as_slice(), start)?;
        path.push(start);

        Tour::evaluate(matrix, path)
    }
}
