use super::*;
use log::{Level, Metadata, Record};
use serial_test::serial;

fn memory_logger(level: Level) -> Logger {
    Logger {
        level,
        target: LogTarget::Memory(Mutex::new(Vec::new())),
    }
}

fn captured(logger: &Logger) -> Vec<String> {
    match &logger.target {
        LogTarget::Memory(lines) => lines.lock().expect("lock lines").clone(),
        LogTarget::Stderr => Vec::new(),
    }
}

#[test]
fn parse_level_handles_names_and_garbage() {
    let cases: &[(Option<&str>, Level)] = &[
        (None, Level::Warn),
        (Some("debug"), Level::Debug),
        (Some("DEBUG"), Level::Debug),
        (Some("info"), Level::Info),
        (Some("error"), Level::Error),
        (Some("trace"), Level::Trace),
        (Some("garbage"), Level::Warn),
        (Some("off"), Level::Warn),
        (Some(""), Level::Warn),
    ];

    for (value, expected) in cases {
        let lvl = parse_level(*value);
        assert_eq!(
            lvl, *expected,
            "value {:?} should yield level {:?}, got {:?}",
            value, expected, lvl
        );
    }
}

#[test]
#[serial]
fn get_level_from_env_reads_program_variable() {
    unsafe { std::env::set_var(PROGRAM_LOG_LEVEL, "info") };
    assert_eq!(get_level_from_env(), Level::Info);

    unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) };
    assert_eq!(get_level_from_env(), Level::Warn);
}

#[test]
fn enabled_respects_level_threshold() {
    let levels = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    for logger_level in levels {
        let logger = memory_logger(logger_level);

        for record_level in levels {
            let meta = Metadata::builder()
                .level(record_level)
                .target("test_target")
                .build();

            assert_eq!(
                logger.enabled(&meta),
                record_level <= logger_level,
                "logger level {:?}, record level {:?}",
                logger_level,
                record_level
            );
        }
    }
}

#[test]
fn log_writes_only_enabled_records() {
    let logger = memory_logger(Level::Info);

    let cases = [
        (Level::Debug, "skipped"),
        (Level::Info, "listed 3 entries"),
        (Level::Error, "delete failed"),
    ];

    for (lvl, msg) in &cases {
        let args = format_args!("{msg}");
        let record = Record::builder()
            .level(*lvl)
            .target("filecat_fs::catalog")
            .args(args)
            .build();
        logger.log(&record);
    }
    logger.flush();

    let lines = captured(&logger);
    assert_eq!(lines.len(), 2, "debug record should be filtered: {lines:?}");
    assert!(lines[0].contains("INFO filecat[filecat_fs::catalog] listed 3 entries"));
    assert!(lines[1].contains("ERROR"));
    assert!(lines[1].ends_with("delete failed"));
}

#[test]
fn repeated_init_reports_installed_logger() {
    // Whatever the first call returns, a logger is installed afterwards,
    // so a second call must not claim to have installed one.
    let _ = init_with_level(Level::Warn);
    assert!(init_with_level(Level::Debug).is_err());
    assert!(init().is_err());
}
