pub mod config;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod utils;

use config::Config;
use emitter::{EmitStats, Emitter, Stream};
use error::AppError;
use generator::LineGenerator;
use log::{debug, info};
use std::io::Write;

extern crate log;

/// Generates `config.num_lines` lines and writes each one to `stdout` or
/// `stderr` according to the interleave setting.
pub fn run<O: Write, E: Write>(config: &Config, stdout: O, stderr: E) -> Result<EmitStats, AppError> {
    debug!("Generating with {:?}", config);

    let mut generator = LineGenerator::new(config);
    let mut emitter = Emitter::new(stdout, stderr);

    for index in 0..u64::from(config.num_lines) {
        let line = generator.line(index);
        emitter.emit(Stream::select(index, config.interleave), &line)?;
    }

    let stats = emitter.finish()?;
    info!(
        "Wrote {} lines ({} stdout, {} stderr)",
        stats.total(),
        stats.stdout,
        stats.stderr
    );
    Ok(stats)
}

#[cfg(test)]
mod test_utils;
