use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Severity of a log line, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::White => "\x1b[37m",
        }
    }

    fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Color::Cyan,
            LogLevel::Info => Color::Green,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
        }
    }
}

/// Line logger used by the report tools.
///
/// Lines go to an optional log file and, when enabled, to stderr with colours.
/// Stdout is left alone so that report output stays clean.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: Option<PathBuf>,
    min_level: LogLevel,
    to_console: bool,
}

impl Logger {
    /// Creates a `Logger` that writes into `<log_dir>/<run_name>.log`.
    ///
    /// # Parameters
    /// - `log_dir`: Existing directory where the log file is created.
    /// - `run_name`: Base name of the log file.
    ///
    /// # Errors
    /// `LoggerError::InvalidPath` when `log_dir` is not a directory, or
    /// `LoggerError::Io` if the file cannot be created.
    pub fn new(log_dir: &Path, run_name: &str) -> Result<Self, LoggerError> {
        if !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(format!(
                "{} is not a directory",
                log_dir.display()
            )));
        }

        let sanitized = run_name.replace([':', '/', ' '], "_");
        let log_file = log_dir.join(format!("{}.log", sanitized));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger {
            log_file: Some(log_file),
            min_level: LogLevel::Info,
            to_console: false,
        })
    }

    /// A logger with no file, echoing to stderr only.
    pub fn console() -> Self {
        Logger {
            log_file: None,
            min_level: LogLevel::Info,
            to_console: true,
        }
    }

    /// A logger that drops everything. Handy for tests and library callers.
    pub fn silent() -> Self {
        Logger {
            log_file: None,
            min_level: LogLevel::Error,
            to_console: false,
        }
    }

    pub fn with_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn with_console(mut self, to_console: bool) -> Self {
        self.to_console = to_console;
        self
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    fn log(&self, level: LogLevel, message: &str) -> Result<(), LoggerError> {
        if level < self.min_level {
            return Ok(());
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let log_message = format!("[{}] [{}]: {}\n", level.tag(), timestamp, message);

        if self.to_console {
            let color = Color::for_level(level);
            let mut stderr = io::stderr().lock();
            write!(stderr, "{}{}\x1b[0m", color.to_ansi_code(), log_message)?;
            stderr.flush()?;
        }

        if let Some(path) = &self.log_file {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            file.write_all(log_message.as_bytes())?;
            file.flush()?;
        }

        Ok(())
    }

    pub fn debug(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Debug, message)
    }

    /// Logs an informational message.
    pub fn info(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Info, message)
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message)
    }

    /// Logs an error message.
    pub fn error(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message)
    }
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid Path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("logger_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).expect("Failed to create test directory");
        dir
    }

    #[test]
    fn test_logger_creation_and_logging() {
        let log_dir = scratch_dir("creation");
        let logger = Logger::new(&log_dir, "reports").expect("Failed to create logger");

        logger.info("Test log message.").expect("Failed to log message");

        let log_contents =
            fs::read_to_string(log_dir.join("reports.log")).expect("Failed to read log file");

        assert!(log_contents.contains("[INFO]"), "INFO level missing in log");
        assert!(log_contents.contains("Test log message."));

        fs::remove_dir_all(&log_dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_level_threshold_filters_lines() {
        let log_dir = scratch_dir("threshold");
        let logger = Logger::new(&log_dir, "run")
            .expect("Failed to create logger")
            .with_level(LogLevel::Warn);

        logger.debug("hidden debug").unwrap();
        logger.info("hidden info").unwrap();
        logger.warn("visible warn").unwrap();
        logger.error("visible error").unwrap();

        let contents = fs::read_to_string(log_dir.join("run.log")).unwrap();
        assert!(!contents.contains("hidden"));
        assert!(contents.contains("[WARN]"));
        assert!(contents.contains("[ERROR]"));

        fs::remove_dir_all(&log_dir).unwrap();
    }

    #[test]
    fn test_run_name_is_sanitized() {
        let log_dir = scratch_dir("sanitize");
        let logger = Logger::new(&log_dir, "run 1:a/b").unwrap();
        assert_eq!(logger.log_file(), Some(log_dir.join("run_1_a_b.log").as_path()));
        fs::remove_dir_all(&log_dir).unwrap();
    }

    #[test]
    fn test_invalid_path() {
        let result = Logger::new(Path::new("/invalid/path"), "run");
        assert!(matches!(result, Err(LoggerError::InvalidPath(_))));
    }

    #[test]
    fn test_silent_logger_accepts_everything() {
        let logger = Logger::silent();
        assert!(logger.info("nothing").is_ok());
        assert!(logger.log_file().is_none());
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
