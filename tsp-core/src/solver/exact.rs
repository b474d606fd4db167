#[cfg(test)]
#[path = "../../tests/unit/solver/exact_test.rs"]
mod exact_test;

use super::*;
use crate::algorithms::permutations::for_each_permutation;
use crate::models::{Cost, evaluate_cost};
use std::ops::ControlFlow;

/// Exhaustive search over all orderings of non-start cities, `(n - 1)!` candidates in total.
///
/// It is a reference baseline: no pruning is applied, so it is practical only for small
/// instances (about 11 cities). Among equal cost tours the first found one is returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactSolver;

impl Solver for ExactSolver {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn solve(&self, matrix: &DistanceMatrix, start: Node) -> Result<Tour, TspError> {
        if let Some(tour) = solve_degenerate(matrix, start)? {
            return Ok(tour);
        }

        let mut cities = (0..matrix.size()).filter(|&city| city != start).collect::<Vec<_>>();

        let mut candidate = Vec::with_capacity(matrix.size() + 1);
        let mut best: Option<(Vec<Node>, Cost)> = None;
        let mut error = None;

        let _ = for_each_permutation(cities.as_mut_slice(), |permutation| {
            candidate.clear();
            candidate.push(start);
            candidate.extend_from_slice(permutation);
            candidate.push(start);

            match evaluate_cost(matrix, candidate.as_slice()) {
                Ok(cost) => {
                    if best.as_ref().is_none_or(|(_, best_cost)| cost < *best_cost) {
                        best = Some((candidate.clone(), cost));
                    }
                    ControlFlow::Continue(())
                }
                Err(err) => {
                    error = Some(err);
                    ControlFlow::Break(())
                }
            }
        });

        if let Some(err) = error {
            return Err(err);
        }

        best.map(|(path, cost)| Tour::new(path, cost))
            .ok_or_else(|| TspError::InvalidMatrix("no candidate tour was evaluated".to_string()))
    }
}
