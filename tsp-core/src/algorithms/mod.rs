//! A collection of reusable algorithms used by solvers.

pub mod mst;
pub mod permutations;
pub mod traversal;
