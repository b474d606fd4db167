#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use tsp_cli::extensions::report::{SolveReport, write_report};
use tsp_cli::extensions::run::{RunOutcome, SolverRun, get_problem_name, read_problem, run_solvers};
use tsp_core::models::Tour;
use tsp_core::solver::SolverKind;
use tsp_scientific::tsplib::TsplibTour;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const ALGORITHM_ARG_NAME: &str = "algorithm";
const START_ARG_NAME: &str = "start";
const MAX_EXACT_SIZE_ARG_NAME: &str = "max-exact-size";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_TOUR_ARG_NAME: &str = "out-tour";

pub fn get_solve_app() -> Command {
    add_common_args(
        Command::new("solve")
            .about("Solves symmetric TSP instance specified in tsplib format with explicit weights")
            .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
            .arg(
                Arg::new(ALGORITHM_ARG_NAME)
                    .help("Specifies solver: exact, nearest-neighbor, approximate or all")
                    .short('a')
                    .long(ALGORITHM_ARG_NAME)
                    .required(false)
                    .default_value("all"),
            )
            .arg(
                Arg::new(START_ARG_NAME)
                    .help("Specifies zero-based index of the start city")
                    .short('s')
                    .long(START_ARG_NAME)
                    .required(false),
            )
            .arg(
                Arg::new(MAX_EXACT_SIZE_ARG_NAME)
                    .help("Specifies the biggest amount of cities solved by exact solver")
                    .long(MAX_EXACT_SIZE_ARG_NAME)
                    .required(false),
            )
            .arg(
                Arg::new(OUT_RESULT_ARG_NAME)
                    .help("Specifies path to the file for report output")
                    .short('o')
                    .long(OUT_RESULT_ARG_NAME)
                    .required(false),
            )
            .arg(
                Arg::new(OUT_TOUR_ARG_NAME)
                    .help("Specifies path to the file for the best tour output in tsplib format")
                    .short('t')
                    .long(OUT_TOUR_ARG_NAME)
                    .required(false),
            ),
    )
}

pub fn run_solve(matches: &ArgMatches) -> Result<(), GenericError> {
    let config = get_config(matches)?;
    let logger = create_logger(matches);
    let format = get_output_format(matches)?;

    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem path is not specified")?;
    let kinds = get_solver_kinds(matches.get_one::<String>(ALGORITHM_ARG_NAME).map(String::as_str))?;
    let start = parse_int_value::<usize>(matches, START_ARG_NAME, "start city")?.unwrap_or_else(|| config.start());
    let max_exact_size = parse_int_value::<usize>(matches, MAX_EXACT_SIZE_ARG_NAME, "max exact size")?
        .unwrap_or_else(|| config.max_exact_size());

    let matrix = read_problem(problem_path, &logger)?;

    if kinds == [SolverKind::Exact] && matrix.size() > max_exact_size {
        return Err(format!(
            "exact solver is limited to {max_exact_size} cities, problem has {}: use a heuristic instead",
            matrix.size()
        )
        .into());
    }

    let runs = run_solvers(&matrix, start, kinds.as_slice(), max_exact_size, &logger);
    let name = get_problem_name(problem_path);

    if let Some(tour_path) = matches.get_one::<String>(OUT_TOUR_ARG_NAME) {
        let tour = get_best_tour(runs.as_slice()).ok_or("no tour was produced, nothing to write")?;
        let writer = BufWriter::new(create_file(tour_path, "tour")?);
        tour.write_tsplib_tour(name.as_str(), writer)?;
    }

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_result = out_result.transpose()?;

    let is_metric = !kinds.contains(&SolverKind::Approximate) || matrix.satisfies_triangle_inequality();
    let report = SolveReport::new(name.as_str(), matrix.size(), start, is_metric, &runs);
    write_report(&report, format, create_write_buffer(out_result))?;

    if runs.iter().all(|run| run.tour().is_none()) {
        return Err(get_failures(runs.as_slice()).into());
    }

    Ok(())
}

fn get_solver_kinds(algorithm: Option<&str>) -> Result<Vec<SolverKind>, GenericError> {
    match algorithm {
        None | Some("all") => Ok(SolverKind::all().to_vec()),
        Some(name) => name.parse::<SolverKind>().map(|kind| vec![kind]).map_err(GenericError::from),
    }
}

/// Returns the cheapest tour, the first one wins on equal cost.
fn get_best_tour(runs: &[SolverRun]) -> Option<&Tour> {
    runs.iter().filter_map(|run| run.tour()).fold(None, |best: Option<&Tour>, tour| match best {
        Some(best) if best.cost() <= tour.cost() => Some(best),
        _ => Some(tour),
    })
}

fn get_failures(runs: &[SolverRun]) -> String {
    let errors = runs
        .iter()
        .filter_map(|run| match &run.outcome {
            RunOutcome::Skipped(reason) => Some(format!("{} solver skipped: {reason}", run.kind)),
            RunOutcome::Failed(err) => Some(format!("{} solver failed: {err}", run.kind)),
            RunOutcome::Solved { .. } => None,
        })
        .map(GenericError::from)
        .collect::<Vec<_>>();

    GenericError::join_many(errors.as_slice(), "\n")
}
