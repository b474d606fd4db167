//! Core crate contains building blocks to compute and compare tours for the symmetric
//! ***Traveling Salesman Problem*** defined by a distance matrix.
//!
//! # Solvers
//!
//! - **exact**: brute force over all permutations of non-start cities, returns a global optimum.
//!   Intended for small instances only (roughly up to 11 cities).
//! - **nearest neighbor**: greedy single pass heuristic.
//! - **approximate**: preorder walk of a minimum spanning tree, a 2-approximation for metric instances.
//!
//! # Example
//!
//! ```
//! use tsp_core::prelude::*;
//!
//! let matrix = DistanceMatrix::from_rows(vec![
//!     vec![0., 10., 15., 20.],
//!     vec![10., 0., 35., 25.],
//!     vec![15., 35., 0., 30.],
//!     vec![20., 25., 30., 0.],
//! ])?;
//!
//! let tour = ExactSolver.solve(&matrix, 0)?;
//!
//! assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
//! assert_eq!(tour.cost(), 80.);
//! # Ok::<(), TspError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
