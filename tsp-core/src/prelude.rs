//! This module reimports commonly used types.

pub use crate::models::{Cost, DistanceMatrix, Edge, Node, Tour, WeightedGraph, evaluate_cost};
pub use crate::solver::{ApproximateSolver, ExactSolver, NearestNeighborSolver, Solver, SolverKind, solve_with};
pub use crate::utils::{Float, GenericError, GenericResult, InfoLogger, Timer, TspError};
