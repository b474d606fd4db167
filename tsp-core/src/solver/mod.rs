//! Contains solvers for the symmetric Traveling Salesman Problem.
//!
//! All solvers are synchronous and keep no state between calls: each call allocates its own
//! working data and releases it on return, so independent calls can be run in parallel by the
//! caller. There is no cancellation: a caller which needs a time bound around exact search has
//! to impose it externally.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod approximate;
pub use self::approximate::ApproximateSolver;

mod exact;
pub use self::exact::ExactSolver;

mod nearest;
pub use self::nearest::NearestNeighborSolver;

use crate::models::{DistanceMatrix, Node, Tour};
use crate::utils::TspError;
use std::fmt;
use std::str::FromStr;

/// Computes a tour over all cities of the matrix starting and ending at the given city.
pub trait Solver {
    /// Returns a short solver name used in reports.
    fn name(&self) -> &'static str;

    /// Solves the problem defined by the matrix starting from the given city.
    fn solve(&self, matrix: &DistanceMatrix, start: Node) -> Result<Tour, TspError>;
}

/// Specifies a kind of solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// Brute force search over all permutations.
    Exact,
    /// Greedy nearest neighbor heuristic.
    NearestNeighbor,
    /// Minimum spanning tree based 2-approximation.
    Approximate,
}

impl SolverKind {
    /// Returns all solver kinds ordered from the most precise to the most scalable.
    pub fn all() -> &'static [SolverKind] {
        &[SolverKind::Exact, SolverKind::NearestNeighbor, SolverKind::Approximate]
    }

    /// Creates a solver of the given kind.
    pub fn create_solver(&self) -> Box<dyn Solver + Send + Sync> {
        match self {
            SolverKind::Exact => Box::new(ExactSolver),
            SolverKind::NearestNeighbor => Box::new(NearestNeighborSolver),
            SolverKind::Approximate => Box::new(ApproximateSolver),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverKind::Exact => "exact",
            SolverKind::NearestNeighbor => "nearest-neighbor",
            SolverKind::Approximate => "approximate",
        };

        write!(f, "{name}")
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "exact" | "brute-force" => Ok(SolverKind::Exact),
            "nearest-neighbor" | "nn" | "heuristic" => Ok(SolverKind::NearestNeighbor),
            "approximate" | "mst" => Ok(SolverKind::Approximate),
            other => Err(format!("unknown solver: '{other}'")),
        }
    }
}

/// Solves the problem with a solver of the given kind.
pub fn solve_with(kind: SolverKind, matrix: &DistanceMatrix, start: Node) -> Result<Tour, TspError> {
    kind.create_solver().solve(matrix, start)
}

/// Handles instances which do not need a search: no cities or a single one.
/// Returns `None` when the instance has to be solved.
fn solve_degenerate(matrix: &DistanceMatrix, start: Node) -> Result<Option<Tour>, TspError> {
    match matrix.size() {
        0 => Ok(Some(Tour::empty())),
        size => {
            matrix.check_index(start)?;
            Ok(if size == 1 { Some(Tour::single(start)) } else { None })
        }
    }
}
