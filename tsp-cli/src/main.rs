//! A command line interface to symmetric *Traveling Salesman Problem* solvers.
//!
//! ## Usage
//!
//! - solve an instance with all solvers, exact one is skipped on big instances
//!
//!     `tsp-cli solve gr17.tsp --start 0`
//!
//! - solve with a heuristic only and write the tour in tsplib format
//!
//!     `tsp-cli solve brazil58.tsp -a nearest-neighbor --out-tour brazil58.tour`
//!
//! - measure how exhaustive search time grows with instance size
//!
//!     `tsp-cli benchmark --max-size 11 --seed 42`
//!
//! - compare heuristics on several instances
//!
//!     `tsp-cli compare gr17.tsp gr21.tsp gr24.tsp --format json`
//!
//! For more details, simply run
//!
//!     tsp-cli --help

mod commands;

use self::commands::benchmark::{get_benchmark_app, run_benchmark};
use self::commands::compare::{get_compare_app, run_compare};
use self::commands::solve::{get_solve_app, run_solve};
use clap::Command;
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        Some(("benchmark", benchmark_matches)) => run_benchmark(benchmark_matches),
        Some(("compare", compare_matches)) => run_compare(compare_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".into()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("Traveling Salesman Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to symmetric Traveling Salesman Problem solvers")
        .subcommand(get_solve_app())
        .subcommand(get_benchmark_app())
        .subcommand(get_compare_app())
}
