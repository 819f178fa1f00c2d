use clap::Parser;
use gentestdata::config::Config;
use gentestdata::error::AppError;
use gentestdata::utils::initialize_logger;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                // Help and version go to stdout, usage errors to stderr.
                AppError::Usage(usage) => {
                    // The logger is not up yet and the exit code already
                    // carries the outcome, so a failed print is dropped.
                    let _ = usage.print();
                }
                AppError::Io(_) => eprintln!("ERROR: {}", err),
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn try_main() -> Result<(), AppError> {
    let config = Config::try_parse()?;
    initialize_logger(config.log_level);

    gentestdata::run(&config, io::stdout().lock(), io::stderr().lock())?;
    Ok(())
}
