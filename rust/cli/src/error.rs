//! Error types for the CLI application.

use std::fmt;

/// Errors that end a CLI command, propagated with `?` up to [`crate::run`].
///
/// Engine rejections during play (wrong turn, short raise, and so on) are
/// not errors at this level: they are notices shown to the player while the
/// hand continues.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, log file operations)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// The engine refused an operation the CLI cannot recover from
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}
