//! Error types for the CLI application.
//!
//! Command handlers return [`CliError`] and propagate with `?`; [`crate::run`]
//! turns the error into a message on stderr and an exit code.

use std::fmt;

use kems_engine::errors::GameError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),

    /// Operation was interrupted before finishing
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
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

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            CliError::InvalidInput("games must be >= 1".into()).to_string(),
            "Invalid input: games must be >= 1"
        );
        assert_eq!(
            CliError::Interrupted("saved 2/5".into()).to_string(),
            "Interrupted: saved 2/5"
        );
    }

    #[test]
    fn test_game_error_converts_to_engine_error() {
        let e: CliError = GameError::InvalidHandIndex { index: 7, len: 4 }.into();
        match e {
            CliError::Engine(msg) => assert!(msg.contains('7'), "{msg}"),
            other => panic!("expected Engine, got {other:?}"),
        }
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;
        let e = CliError::from(std::io::Error::other("disk gone"));
        assert!(e.source().is_some());
        assert!(CliError::Config("x".into()).source().is_none());
    }
}
