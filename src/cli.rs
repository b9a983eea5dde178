use clap::builder::NonEmptyStringValueParser;
use clap::{Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_version};

use crate::configuration::RunConfig;
use crate::constants::{
    BASE_FILENAME_HELP, BINARY_NAME, DEFAULT_EXTENSION, EXTENSION_HELP, FOLDER_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;

/// Builds the command-line definition
///
/// Defines the following arguments:
/// - `basefilename`: Literal prefix shared by all frames (required)
/// - `folder`: Folder containing the frames
/// - `extension`: Frame file extension
/// - `verbose`: Print each rename, repeatable
pub fn build_command() -> Command {
    let arg_base_filename = Arg::new("basefilename")
        .help(BASE_FILENAME_HELP)
        .required(true)
        .value_parser(NonEmptyStringValueParser::new());

    let arg_folder = Arg::new("folder")
        .short('d')
        .long("folder")
        .value_name("PATH")
        .help(FOLDER_HELP);

    let arg_extension = Arg::new("extension")
        .short('e')
        .long("extension")
        .value_name("EXT")
        .help(EXTENSION_HELP)
        .default_value(DEFAULT_EXTENSION);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(BINARY_NAME)
        .version(crate_version!())
        .arg(arg_base_filename)
        .arg(arg_folder)
        .arg(arg_extension)
        .arg(arg_verbose)
}

/// Parses the process arguments
///
/// Exits with a usage error if the base filename is missing.
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Turns parsed arguments into a validated run configuration
///
/// # Errors
/// Returns an error if the base filename is missing or the folder is invalid
pub fn get_run_config(matches: &ArgMatches) -> Result<RunConfig> {
    let base_name = matches
        .get_one::<String>("basefilename")
        .ok_or_else(|| generic_error("Base filename argument not found"))?;
    let folder = matches.get_one::<String>("folder").map(String::as_str);
    let extension = matches.get_one::<String>("extension").map(String::as_str);

    RunConfig::new(base_name, folder, extension, get_verbosity(matches))
}
