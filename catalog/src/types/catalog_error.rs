use logger::LoggerError;
use thiserror::Error;

/// Errors raised while building, loading or reporting on an airport catalog.
///
/// Domain errors from `acos` never show up here: the argument is clamped
/// before the call.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed or insufficient data (empty GPS id, coordinates out of
    /// range, fewer than two stops, non-positive speed, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Logger error: {0}")]
    Logger(#[from] LoggerError),
}

impl CatalogError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CatalogError::InvalidInput(message.into())
    }
}
