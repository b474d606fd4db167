//! Command line configuration which can be read from a json file.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::io::{BufReader, Read};
use tsp_core::models::Node;
use tsp_core::utils::GenericError;

/// A city used as a start when nothing else is specified.
pub const DEFAULT_START: Node = 0;

/// The biggest instance which is solved by exhaustive search when nothing else is specified.
pub const DEFAULT_MAX_EXACT_SIZE: usize = 11;

/// The smallest instance size used in exact solver growth benchmark.
pub const DEFAULT_BENCHMARK_MIN_SIZE: usize = 2;

/// A configuration of solver runs. All values are optional, command line arguments take precedence.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// A start city of tours.
    pub start: Option<Node>,
    /// A maximum amount of cities for exact solver, bigger instances are skipped.
    pub max_exact_size: Option<usize>,
    /// Paths to problem instances used by comparison.
    pub instances: Option<Vec<String>>,
    /// Exact solver growth benchmark settings.
    pub benchmark: Option<BenchmarkConfig>,
}

/// Specifies exact solver growth benchmark.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BenchmarkConfig {
    /// The smallest generated instance.
    pub min_size: Option<usize>,
    /// The biggest generated instance.
    pub max_size: Option<usize>,
    /// A seed for instance generation.
    pub seed: Option<u64>,
}

impl Config {
    /// Returns configured start city or the default one.
    pub fn start(&self) -> Node {
        self.start.unwrap_or(DEFAULT_START)
    }

    /// Returns configured exact solver size limit or the default one.
    pub fn max_exact_size(&self) -> usize {
        self.max_exact_size.unwrap_or(DEFAULT_MAX_EXACT_SIZE)
    }

    /// Returns configured benchmark size range, inclusive.
    pub fn benchmark_sizes(&self) -> (usize, usize) {
        let benchmark = self.benchmark.clone().unwrap_or_default();

        (
            benchmark.min_size.unwrap_or(DEFAULT_BENCHMARK_MIN_SIZE),
            benchmark.max_size.unwrap_or_else(|| self.max_exact_size()),
        )
    }

    /// Returns configured benchmark seed.
    pub fn benchmark_seed(&self) -> Option<u64> {
        self.benchmark.as_ref().and_then(|benchmark| benchmark.seed)
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
