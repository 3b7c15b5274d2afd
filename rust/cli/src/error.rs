//! Errors surfaced by command handlers.
//!
//! Handlers return [`CliError`]; `run` prints it and exits with code 2.
//! Failures that only affect one file or one hand block are wrapped in a
//! [`BatchValidationError`] and reported as warnings instead, so the rest of
//! the archive is still processed.

use chipledger_engine::errors::EngineError;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// Reading inputs, creating directories or writing to the output streams
    Io(std::io::Error),
    /// Input path missing or otherwise unusable
    InvalidInput(String),
    /// Configuration file or environment could not be resolved
    Config(String),
    /// Raised by the engine, e.g. an archive without a single usable hand
    Engine(EngineError),
    /// A report row could not be written
    Csv(csv::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            CliError::Csv(e) => Some(e),
            CliError::InvalidInput(_) | CliError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        CliError::Engine(e)
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Csv(e)
    }
}

/// A non-fatal failure tied to one item of a batch.
///
/// `T` identifies the item: a file path for unreadable inputs, or the
/// 1-based block position for hands that could not be parsed.
///
/// ```rust
/// use chipledger_cli::BatchValidationError;
///
/// let hand = BatchValidationError {
///     item_context: 5,
///     message: "Header has no hand identifier".to_string(),
/// };
/// assert_eq!(hand.to_string(), "5: Header has no hand identifier");
///
/// let file = BatchValidationError {
///     item_context: "logs/broken.txt".to_string(),
///     message: "stream did not contain valid UTF-8".to_string(),
/// };
/// assert_eq!(file.to_string(), "logs/broken.txt: stream did not contain valid UTF-8");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    pub item_context: T,
    pub message: String,
}

impl<T: fmt::Display> fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}
