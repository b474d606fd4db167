//! Scientific crate contains logic to read and write problems in formats used to benchmark
//! TSP related algorithms, and to generate random instances.
//!
//! # Supported formats
//!
//! - **tsplib**: a subset of TSPLIB95 format with explicit edge weights given as upper or lower
//!   triangle rows (optionally with diagonal) or as a full matrix.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use tsp_core as core;

pub mod generator;
pub mod tsplib;
