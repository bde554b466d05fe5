//! Command-line runner

use anyhow::Result;
use std::process::ExitCode;

use crate::config::Config;
use crate::report::render;
use crate::validation::validate_path;

/// Exit code for template or usage problems, matching clap's usage errors
pub const EXIT_USAGE: u8 = 2;

/// Set up stderr logging with the configured filter
pub fn init_logging(config: &Config) {
    let _ = env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .format_timestamp(None)
        .try_init();
}

/// Validate the configured file and print the report
///
/// Returns success only if the document has no errors. Template problems
/// are returned as `Err` since they are not validation outcomes.
pub fn run(config: &Config) -> Result<ExitCode> {
    let template = config.load_template()?;
    let report = validate_path(&config.notes_path, &template);

    print!("{}", render(&report, config.format)?);

    if report.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
