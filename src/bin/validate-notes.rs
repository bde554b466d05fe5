use std::process::ExitCode;

use study_notes_validator::cli::{self, EXIT_USAGE};
use study_notes_validator::Config;

fn main() -> ExitCode {
    let config = match Config::from_args_and_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    cli::init_logging(&config);

    match cli::run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}
