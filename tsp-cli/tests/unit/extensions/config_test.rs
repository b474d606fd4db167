use super::*;
use std::fs::File;

#[test]
fn can_read_config_from_file() {
    let file = File::open("tests/data/config.json").expect("cannot open config");

    let config = read_config(BufReader::new(file)).expect("cannot read config");

    assert_eq!(config.start(), 1);
    assert_eq!(config.max_exact_size(), 9);
    assert_eq!(config.instances.as_ref().map(|instances| instances.len()), Some(2));
    assert_eq!(config.benchmark_sizes(), (3, 6));
    assert_eq!(config.benchmark_seed(), Some(42));
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = read_config(BufReader::new("{}".as_bytes())).expect("cannot read config");

    assert_eq!(config, Config::default());
    assert_eq!(config.start(), DEFAULT_START);
    assert_eq!(config.max_exact_size(), DEFAULT_MAX_EXACT_SIZE);
    assert_eq!(config.benchmark_sizes(), (DEFAULT_BENCHMARK_MIN_SIZE, DEFAULT_MAX_EXACT_SIZE));
    assert_eq!(config.benchmark_seed(), None);
}

#[test]
fn can_limit_benchmark_by_exact_size_when_max_size_is_missing() {
    let config = read_config(BufReader::new(r#"{ "maxExactSize": 7, "benchmark": { "seed": 1 } }"#.as_bytes()))
        .expect("cannot read config");

    assert_eq!(config.benchmark_sizes(), (DEFAULT_BENCHMARK_MIN_SIZE, 7));
    assert_eq!(config.benchmark_seed(), Some(1));
}

#[test]
fn can_reject_unknown_fields() {
    let result = read_config(BufReader::new(r#"{ "startCity": 1 }"#.as_bytes()));

    assert!(result.unwrap_err().to_string().starts_with("cannot deserialize config"));
}

#[test]
fn can_reject_invalid_json() {
    let result = read_config(BufReader::new(r#"{ "start": -1 }"#.as_bytes()));

    assert!(result.is_err());
}
