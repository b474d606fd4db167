//! Contains command line extensions: configuration, solver runs and reporting.

pub mod config;
pub mod report;
pub mod run;
