//! Stderr logging for the command line

use log::{LevelFilter, SetLoggerError};

/// Map `-v` repetitions to a level filter
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the logger. `RUST_LOG` refines the level chosen by `-v`.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .try_init()
}
