use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod benchmark;
pub mod compare;
pub mod solve;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;
use std::sync::Arc;
use tsp_cli::extensions::config::{Config, read_config};
use tsp_cli::extensions::report::OutputFormat;
use tsp_core::utils::{GenericError, InfoLogger, create_silent_logger};

const FORMAT_ARG_NAME: &str = "format";
const LOG_ARG_NAME: &str = "log";
const CONFIG_ARG_NAME: &str = "config";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn create_file(path: &str, description: &str) -> Result<File, GenericError> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, GenericError> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| GenericError::from(format!("cannot get integer value, error: '{err}': '{arg_desc}'")))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

fn create_logger(matches: &ArgMatches) -> InfoLogger {
    if matches.get_flag(LOG_ARG_NAME) { Arc::new(|msg: &str| println!("{msg}")) } else { create_silent_logger() }
}

fn get_output_format(matches: &ArgMatches) -> Result<OutputFormat, GenericError> {
    matches.get_one::<String>(FORMAT_ARG_NAME).map_or(Ok(OutputFormat::default()), |format| format.parse())
}

fn get_config(matches: &ArgMatches) -> Result<Config, GenericError> {
    match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => {
            let file = File::open(path).map_err(|err| format!("cannot open config file '{path}': '{err}'"))?;
            read_config(BufReader::new(file))
        }
        None => Ok(Config::default()),
    }
}

fn add_common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies report format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .required(false)
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the json config file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
}
