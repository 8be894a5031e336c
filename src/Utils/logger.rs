//! Logger set-up: terminal output always, plus a log file on request.
use crate::error::{PdeError, Result};
use chrono::Local;
use simplelog::*;
use std::fs::File;
use std::path::{Path, PathBuf};

/// `None` means logging is switched off.
pub fn parse_level(level: &str) -> Result<Option<LevelFilter>> {
    match level.to_lowercase().as_str() {
        "off" | "none" => Ok(None),
        "debug" => Ok(Some(LevelFilter::Debug)),
        "info" => Ok(Some(LevelFilter::Info)),
        "warn" => Ok(Some(LevelFilter::Warn)),
        "error" => Ok(Some(LevelFilter::Error)),
        _ => Err(PdeError::InvalidLogLevel(level.to_string())),
    }
}

/// log_2025-01-31_12-00-00.txt
pub fn timestamped_log_name() -> PathBuf {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    PathBuf::from(format!("log_{}.txt", date_and_time))
}

/// `file = "auto"` in the config asks for a timestamped log file name.
pub fn resolve_log_file(log_file: Option<&Path>) -> Option<PathBuf> {
    match log_file {
        Some(path) if path == Path::new("auto") => Some(timestamped_log_name()),
        Some(path) => Some(path.to_path_buf()),
        None => None,
    }
}

/// Installs the global logger. Terminal messages go to stderr, so rendered documents on
/// stdout stay clean. Calling it a second time keeps the first logger.
pub fn init_logger(level: &str, log_file: Option<&Path>) -> Result<()> {
    let Some(level) = parse_level(level)? else {
        return Ok(());
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = resolve_log_file(log_file) {
        loggers.push(WriteLogger::new(level, Config::default(), File::create(&path)?));
    }
    if CombinedLogger::init(loggers).is_err() {
        log::debug!("logger already initialised");
    }
    Ok(())
}
