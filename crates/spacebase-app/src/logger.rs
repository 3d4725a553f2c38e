//! Minimal stderr backend for the `log` facade.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_LEVEL_ENV: &str = "SPACEBASE_LOG";

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Parse a level name, falling back to `Info`.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by `SPACEBASE_LOG`.
pub fn init_from_env() -> Result<(), SetLoggerError> {
    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
