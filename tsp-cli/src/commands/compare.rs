#[cfg(test)]
#[path = "../../tests/unit/commands/compare_test.rs"]
mod compare_test;

use super::*;
use tsp_cli::extensions::report::{ComparisonReport, write_report};
use tsp_cli::extensions::run::compare_instances;

const PROBLEMS_ARG_NAME: &str = "PROBLEMS";
const START_ARG_NAME: &str = "start";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_compare_app() -> Command {
    add_common_args(
        Command::new("compare")
            .about("Compares nearest neighbor and approximate solvers on several instances")
            .arg(
                Arg::new(PROBLEMS_ARG_NAME)
                    .help("Sets problem files to use, instances from config are used when omitted")
                    .required(false)
                    .num_args(1..)
                    .index(1),
            )
            .arg(
                Arg::new(START_ARG_NAME)
                    .help("Specifies zero-based index of the start city")
                    .short('s')
                    .long(START_ARG_NAME)
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

pub fn run_compare(matches: &ArgMatches) -> Result<(), GenericError> {
    let config = get_config(matches)?;
    let logger = create_logger(matches);
    let format = get_output_format(matches)?;

    let paths = matches
        .get_many::<String>(PROBLEMS_ARG_NAME)
        .map(|paths| paths.cloned().collect::<Vec<_>>())
        .or_else(|| config.instances.clone())
        .unwrap_or_default();

    if paths.is_empty() {
        return Err("no problem files specified in arguments or config".into());
    }

    let start = parse_int_value::<usize>(matches, START_ARG_NAME, "start city")?.unwrap_or_else(|| config.start());

    let comparisons = compare_instances(paths.as_slice(), start, &logger);

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_result = out_result.transpose()?;

    write_report(&ComparisonReport::new(comparisons.as_slice()), format, create_write_buffer(out_result))
}
