#[cfg(test)]
#[path = "../../tests/unit/commands/benchmark_test.rs"]
mod benchmark_test;

use super::*;
use tsp_cli::extensions::report::{GrowthReport, write_report};
use tsp_cli::extensions::run::run_exact_growth;

const MIN_SIZE_ARG_NAME: &str = "min-size";
const MAX_SIZE_ARG_NAME: &str = "max-size";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_benchmark_app() -> Command {
    add_common_args(
        Command::new("benchmark")
            .about("Measures exact solver running time on random instances of growing size")
            .arg(
                Arg::new(MIN_SIZE_ARG_NAME)
                    .help("Specifies the smallest amount of cities")
                    .long(MIN_SIZE_ARG_NAME)
                    .required(false),
            )
            .arg(
                Arg::new(MAX_SIZE_ARG_NAME)
                    .help("Specifies the biggest amount of cities")
                    .short('m')
                    .long(MAX_SIZE_ARG_NAME)
                    .required(false),
            )
            .arg(
                Arg::new(SEED_ARG_NAME)
                    .help("Specifies random seed for reproducible instances")
                    .short('s')
                    .long(SEED_ARG_NAME)
                    .required(false),
            )
            .arg(
                Arg::new(OUT_RESULT_ARG_NAME)
                    .help("Specifies path to the file for report output")
                    .short('o')
                    .long(OUT_RESULT_ARG_NAME)
                    .required(false),
            ),
    )
}

pub fn run_benchmark(matches: &ArgMatches) -> Result<(), GenericError> {
    let config = get_config(matches)?;
    let logger = create_logger(matches);
    let format = get_output_format(matches)?;

    let (config_min_size, config_max_size) = config.benchmark_sizes();
    let min_size = parse_int_value::<usize>(matches, MIN_SIZE_ARG_NAME, "min size")?.unwrap_or(config_min_size);
    let max_size = parse_int_value::<usize>(matches, MAX_SIZE_ARG_NAME, "max size")?.unwrap_or(config_max_size);
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?.or_else(|| config.benchmark_seed());

    let samples = run_exact_growth(min_size, max_size, seed, &logger)?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_result = out_result.transpose()?;

    write_report(&GrowthReport::new(seed, samples.as_slice()), format, create_write_buffer(out_result))
}
