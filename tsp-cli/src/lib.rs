//! A TSP solver command line library: configuration, solver runs and reports which are used by
//! the `tsp-cli` binary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../../tsp-core/tests/helpers/macros.rs"]
#[macro_use]
mod macros;

pub use tsp_core as core;
pub use tsp_scientific as scientific;

pub mod extensions;
