use super::*;
use serde_json::Value;
use tempfile::NamedTempFile;

fn run_benchmark_with_args(args: &[&str]) -> Result<(), GenericError> {
    let matches = get_benchmark_app().try_get_matches_from(args).expect("cannot parse args");

    run_benchmark(&matches)
}

fn read_json(file: &NamedTempFile) -> Value {
    serde_json::from_reader(BufReader::new(file.reopen().expect("cannot reopen file"))).expect("invalid json")
}

fn get_sizes(json: &Value) -> Vec<u64> {
    json["entries"].as_array().unwrap().iter().filter_map(|entry| entry["size"].as_u64()).collect()
}

#[test]
fn can_run_benchmark_from_args() {
    let out = NamedTempFile::new().unwrap();

    run_benchmark_with_args(&[
        "benchmark",
        "--min-size",
        "2",
        "--max-size",
        "5",
        "--seed",
        "7",
        "--format",
        "json",
        "--out-result",
        out.path().to_str().unwrap(),
    ])
    .unwrap();

    let json = read_json(&out);
    assert_eq!(json["seed"], 7);
    assert_eq!(get_sizes(&json), vec![2, 3, 4, 5]);
    assert_eq!(json["entries"][3]["permutations"], 24);
}

#[test]
fn can_run_benchmark_from_config() {
    let out = NamedTempFile::new().unwrap();

    run_benchmark_with_args(&[
        "benchmark",
        "--config",
        "tests/data/config.json",
        "--max-size",
        "4",
        "-f",
        "json",
        "-o",
        out.path().to_str().unwrap(),
    ])
    .unwrap();

    let json = read_json(&out);
    assert_eq!(json["seed"], 42);
    assert_eq!(get_sizes(&json), vec![3, 4]);
}

#[test]
fn can_return_error_for_inverted_sizes() {
    let result = run_benchmark_with_args(&["benchmark", "--min-size", "6", "--max-size", "3"]);

    assert_eq!(result, Err("min size 6 is greater than max size 3".into()));
}
