use super::*;
use std::sync::{Arc, Mutex};
use tsp_core::utils::create_silent_logger;

const CLASSIC_PROBLEM_PATH: &str = "../tsp-scientific/tests/data/tsplib/classic4.upper.tsp";
const RING_PROBLEM_PATH: &str = "../tsp-scientific/tests/data/tsplib/ring12.upper_diag.tsp";

fn create_classic_matrix() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![0., 10., 15., 20.],
        vec![10., 0., 35., 25.],
        vec![15., 35., 0., 30.],
        vec![20., 25., 30., 0.],
    ])
    .expect("cannot create matrix")
}

fn get_costs(runs: &[SolverRun]) -> Vec<Option<Cost>> {
    runs.iter().map(|run| run.tour().map(|tour| tour.cost())).collect()
}

#[test]
fn can_run_all_solvers() {
    let matrix = create_classic_matrix();

    let runs = run_solvers(&matrix, 0, SolverKind::all(), 11, &create_silent_logger());

    assert_eq!(runs.iter().map(|run| run.kind).collect::<Vec<_>>(), SolverKind::all().to_vec());
    assert_eq!(get_costs(runs.as_slice()), vec![Some(80.), Some(80.), Some(95.)]);
    assert_eq!(runs[0].tour().map(|tour| tour.path().to_vec()), Some(vec![0, 1, 3, 2, 0]));
}

#[test]
fn can_skip_exact_solver_above_limit() {
    let matrix = create_classic_matrix();

    let runs = run_solvers(&matrix, 0, SolverKind::all(), 3, &create_silent_logger());

    assert_eq!(runs[0].outcome, RunOutcome::Skipped("4 cities exceed exact solver limit of 3".to_string()));
    assert_eq!(get_costs(&runs[1..]), vec![Some(80.), Some(95.)]);
}

#[test]
fn can_report_failure_for_start_out_of_range() {
    let matrix = create_classic_matrix();

    let runs = run_solvers(&matrix, 7, SolverKind::all(), 11, &create_silent_logger());

    assert!(runs.iter().all(|run| run.outcome == RunOutcome::Failed(TspError::IndexOutOfRange { index: 7, size: 4 })));
}

#[test]
fn can_log_solver_runs() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    run_solvers(&create_classic_matrix(), 0, SolverKind::all(), 3, &logger);

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].starts_with("exact solver skipped"));
    assert!(messages[1].starts_with("nearest-neighbor solver found tour with cost 80"));
    assert!(messages[2].starts_with("approximate solver found tour with cost 95"));
}

#[test]
fn can_run_exact_growth_reproducibly() {
    let logger = create_silent_logger();

    let first = run_exact_growth(2, 6, Some(42), &logger).expect("cannot run growth");
    let second = run_exact_growth(2, 6, Some(42), &logger).expect("cannot run growth");

    assert_eq!(first.iter().map(|sample| sample.size).collect::<Vec<_>>(), vec![2, 3, 4, 5, 6]);
    assert_eq!(
        first.iter().map(|sample| sample.cost).collect::<Vec<_>>(),
        second.iter().map(|sample| sample.cost).collect::<Vec<_>>()
    );
    assert!(first.iter().all(|sample| sample.cost >= sample.size as Cost));
}

#[test]
fn can_reject_inverted_growth_range() {
    let result = run_exact_growth(5, 4, None, &create_silent_logger());

    assert_eq!(result, Err("min size 5 is greater than max size 4".into()));
}

#[test]
fn can_read_problem_from_file() {
    let matrix = read_problem(CLASSIC_PROBLEM_PATH, &create_silent_logger()).expect("cannot read problem");

    assert_eq!(matrix, create_classic_matrix());
}

#[test]
fn can_return_error_for_missing_problem_file() {
    let result = read_problem("tests/data/missing.tsp", &create_silent_logger());

    assert!(result.unwrap_err().to_string().starts_with("cannot open problem file 'tests/data/missing.tsp'"));
}

#[test]
fn can_get_problem_name() {
    assert_eq!(get_problem_name(CLASSIC_PROBLEM_PATH), "classic4.upper");
    assert_eq!(get_problem_name("gr17"), "gr17");
}

#[test]
fn can_compare_instances_keeping_input_order() {
    let paths =
        vec![RING_PROBLEM_PATH.to_string(), "tests/data/missing.tsp".to_string(), CLASSIC_PROBLEM_PATH.to_string()];

    let comparisons = compare_instances(paths.as_slice(), 0, &create_silent_logger());

    assert_eq!(comparisons.iter().map(|comparison| comparison.instance.clone()).collect::<Vec<_>>(), paths);

    assert_eq!(comparisons[0].size, Some(12));
    assert_eq!(comparisons[0].runs[0].kind, SolverKind::NearestNeighbor);
    assert_eq!(comparisons[0].runs[0].tour().map(|tour| tour.cost()), Some(12.));

    assert_eq!(comparisons[1].size, None);
    assert!(comparisons[1].runs.is_empty());
    assert!(comparisons[1].error.is_some());

    assert_eq!(comparisons[2].size, Some(4));
    assert_eq!(get_costs(comparisons[2].runs.as_slice()), vec![Some(80.), Some(95.)]);
}
