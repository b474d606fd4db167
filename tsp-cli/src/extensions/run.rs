//! Runs solvers and measures how long it takes.

#[cfg(test)]
#[path = "../../tests/unit/extensions/run_test.rs"]
mod run_test;

use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;
use tsp_core::models::{Cost, DistanceMatrix, Node, Tour};
use tsp_core::solver::{ExactSolver, Solver, SolverKind};
use tsp_core::utils::{GenericError, InfoLogger, Timer, TspError};
use tsp_scientific::generator::{generate_matrix_with_seed, generate_random_matrix};
use tsp_scientific::tsplib::TsplibProblem;

/// A result of a single solver run.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    /// Solver has produced a tour.
    Solved {
        /// A produced tour.
        tour: Tour,
        /// Time spent by the solver.
        duration: Duration,
    },
    /// Solver was not run, a reason is given.
    Skipped(String),
    /// Solver has failed.
    Failed(TspError),
}

/// Keeps solver kind together with its run result.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverRun {
    /// A solver kind.
    pub kind: SolverKind,
    /// A run result.
    pub outcome: RunOutcome,
}

impl SolverRun {
    /// Returns a tour if solver has produced it.
    pub fn tour(&self) -> Option<&Tour> {
        match &self.outcome {
            RunOutcome::Solved { tour, .. } => Some(tour),
            _ => None,
        }
    }
}

/// A measurement of exact solver on a generated instance.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthSample {
    /// Amount of cities.
    pub size: usize,
    /// Optimal tour cost.
    pub cost: Cost,
    /// Time spent by the solver.
    pub duration: Duration,
}

/// Heuristic runs on a single problem instance.
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceComparison {
    /// A path to the instance.
    pub instance: String,
    /// Amount of cities, if the instance was read.
    pub size: Option<usize>,
    /// Solver runs, empty if the instance cannot be read.
    pub runs: Vec<SolverRun>,
    /// An error which prevented the instance from being solved.
    pub error: Option<String>,
}

/// Reads a problem in tsplib format from the file.
pub fn read_problem(path: &str, logger: &InfoLogger) -> Result<DistanceMatrix, GenericError> {
    let file = File::open(path).map_err(|err| format!("cannot open problem file '{path}': '{err}'"))?;

    Timer::measure_duration_with_callback(
        || BufReader::new(file).read_tsplib().map_err(GenericError::from),
        |duration| (logger)(format!("problem '{path}' read in {}ms", duration.as_millis()).as_str()),
    )
}

/// Returns a problem name derived from its path.
pub fn get_problem_name(path: &str) -> String {
    Path::new(path).file_stem().and_then(|stem| stem.to_str()).unwrap_or(path).to_string()
}

/// Runs solvers one by one on the same matrix. Exact solver is skipped when the matrix has more
/// than `max_exact_size` cities.
pub fn run_solvers(
    matrix: &DistanceMatrix,
    start: Node,
    kinds: &[SolverKind],
    max_exact_size: usize,
    logger: &InfoLogger,
) -> Vec<SolverRun> {
    kinds
        .iter()
        .map(|&kind| {
            if kind == SolverKind::Exact && matrix.size() > max_exact_size {
                let reason = format!("{} cities exceed exact solver limit of {max_exact_size}", matrix.size());
                (logger)(format!("{kind} solver skipped: {reason}").as_str());

                return SolverRun { kind, outcome: RunOutcome::Skipped(reason) };
            }

            let solver = kind.create_solver();
            let (result, duration) = Timer::measure_duration(|| solver.solve(matrix, start));

            let outcome = match result {
                Ok(tour) => {
                    (logger)(
                        format!("{kind} solver found tour with cost {} in {}ms", tour.cost(), duration.as_millis())
                            .as_str(),
                    );
                    RunOutcome::Solved { tour, duration }
                }
                Err(err) => {
                    (logger)(format!("{kind} solver failed: {err}").as_str());
                    RunOutcome::Failed(err)
                }
            };

            SolverRun { kind, outcome }
        })
        .collect()
}

/// Measures exact solver on generated instances of growing size. When seed is specified, each size
/// uses the `seed + size` value, so runs are reproducible.
pub fn run_exact_growth(
    min_size: usize,
    max_size: usize,
    seed: Option<u64>,
    logger: &InfoLogger,
) -> Result<Vec<GrowthSample>, GenericError> {
    if min_size > max_size {
        return Err(format!("min size {min_size} is greater than max size {max_size}").into());
    }

    (min_size..=max_size)
        .map(|size| -> Result<GrowthSample, GenericError> {
            let matrix = match seed {
                Some(seed) => generate_matrix_with_seed(size, seed.wrapping_add(size as u64)),
                None => generate_random_matrix(size),
            }?;

            let (tour, duration) = Timer::measure_duration(|| ExactSolver.solve(&matrix, 0));
            let tour = tour?;

            (logger)(format!("exact solver on {size} cities took {}ms", duration.as_millis()).as_str());

            Ok(GrowthSample { size, cost: tour.cost(), duration })
        })
        .collect()
}

/// Runs heuristic solvers on each instance. Instances are processed in parallel, solvers on the
/// same instance run one after another. Results keep the order of given paths.
pub fn compare_instances(paths: &[String], start: Node, logger: &InfoLogger) -> Vec<InstanceComparison> {
    let kinds = [SolverKind::NearestNeighbor, SolverKind::Approximate];

    paths
        .par_iter()
        .map(|path| match read_problem(path, logger) {
            Ok(matrix) => InstanceComparison {
                instance: path.clone(),
                size: Some(matrix.size()),
                runs: run_solvers(&matrix, start, &kinds, 0, logger),
                error: None,
            },
            Err(err) => {
                (logger)(format!("cannot process '{path}': {err}").as_str());
                InstanceComparison { instance: path.clone(), size: None, runs: vec![], error: Some(err.to_string()) }
            }
        })
        .collect()
}
