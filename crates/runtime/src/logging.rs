use std::sync::OnceLock;
#[cfg(test)]
use std::sync::Mutex;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::{PROGRAM_LOG_LEVEL, PROGRAM_NAME};

enum LogTarget {
    Stderr,
    #[cfg(test)]
    Memory(Mutex<Vec<String>>),
}

/// Minimal line logger for hosts embedding the catalog without their own
/// `log` implementation.
pub struct Logger {
    level: Level,
    target: LogTarget,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record);
        match &self.target {
            LogTarget::Stderr => eprintln!("{line}"),
            #[cfg(test)]
            LogTarget::Memory(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(line);
                }
            }
        }
    }

    fn flush(&self) {}
}

fn format_line(record: &Record<'_>) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!(
        "{timestamp} {} {PROGRAM_NAME}[{}] {}",
        record.level(),
        record.target(),
        record.args()
    )
}

/// Parse a level name; unknown values and `off` fall back to `warn`.
fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

fn get_level_from_env() -> Level {
    parse_level(std::env::var(PROGRAM_LOG_LEVEL).ok().as_deref())
}

/// Install the stderr logger at the level named by `FILECAT_LOG_LEVEL`.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(get_level_from_env())
}

/// Install the stderr logger at `level`.
///
/// Succeeds exactly once per process. Errors if a logger is already
/// installed, whether by an earlier call or by the host, and in that case
/// nothing changes: the installed logger and max level stay as they were.
pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // The stored level is whichever call got here first; set_logger below
    // is the atomic gate, so concurrent callers see one Ok at most.
    let logger = LOGGER.get_or_init(|| Logger {
        level,
        target: LogTarget::Stderr,
    });

    log::set_logger(logger)?;
    log::set_max_level(logger.level.to_level_filter());

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
