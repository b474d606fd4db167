use super::*;
use serde_json::Value;
use tempfile::NamedTempFile;

const CLASSIC_PROBLEM_PATH: &str = "../tsp-scientific/tests/data/tsplib/classic4.upper.tsp";
const RING_PROBLEM_PATH: &str = "../tsp-scientific/tests/data/tsplib/ring12.upper_diag.tsp";

fn run_compare_with_args(args: &[&str]) -> Result<(), GenericError> {
    let matches = get_compare_app().try_get_matches_from(args).expect("cannot parse args");

    run_compare(&matches)
}

fn read_json(file: &NamedTempFile) -> Value {
    serde_json::from_reader(BufReader::new(file.reopen().expect("cannot reopen file"))).expect("invalid json")
}

#[test]
fn can_compare_heuristics_on_instances() {
    let out = NamedTempFile::new().unwrap();

    run_compare_with_args(&[
        "compare",
        CLASSIC_PROBLEM_PATH,
        RING_PROBLEM_PATH,
        "tests/data/missing.tsp",
        "--format",
        "json",
        "--out-result",
        out.path().to_str().unwrap(),
    ])
    .unwrap();

    let json = read_json(&out);
    assert_eq!(json["entries"][0]["instance"], CLASSIC_PROBLEM_PATH);
    assert_eq!(json["entries"][0]["nearestNeighbor"]["cost"], 80.);
    assert_eq!(json["entries"][0]["approximate"]["cost"], 95.);
    assert_eq!(json["entries"][1]["instance"], RING_PROBLEM_PATH);
    assert_eq!(json["entries"][1]["size"], 12);
    assert_eq!(json["entries"][1]["nearestNeighbor"]["cost"], 12.);
    assert!(json["entries"][2]["error"].as_str().is_some_and(|error| error.starts_with("cannot open problem file")));
}

#[test]
fn can_use_instances_and_start_from_config() {
    let out = NamedTempFile::new().unwrap();

    run_compare_with_args(&[
        "compare",
        "--config",
        "tests/data/config.json",
        "-f",
        "json",
        "-o",
        out.path().to_str().unwrap(),
    ])
    .unwrap();

    let json = read_json(&out);
    assert_eq!(json["entries"].as_array().map(|entries| entries.len()), Some(2));
    assert_eq!(json["entries"][0]["instance"], CLASSIC_PROBLEM_PATH);
    assert!(json["entries"][0]["error"].is_null());
}

#[test]
fn can_return_error_without_instances() {
    let result = run_compare_with_args(&["compare"]);

    assert_eq!(result, Err("no problem files specified in arguments or config".into()));
}
