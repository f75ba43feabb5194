//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;
use strata::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// The configuration could not be rendered in the requested format.
    Serialization(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Invalid configuration
    /// - 2: Missing configuration file
    /// - 3: Configuration file could not be parsed
    /// - 4: Configured path does not exist
    /// - 5: I/O or output error
    /// - 6: Invalid arguments
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::InvalidConfiguration { .. } => 1,
                LibError::MissingConfigFile { .. } => 2,
                LibError::ConfigParse { .. } => 3,
                LibError::PathNotFound { .. } => 4,
                LibError::Io { .. } => 5,
            },
            CliError::Serialization(_) => 5,
            CliError::InvalidArguments(_) => 6,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // One violation per line reads better on a terminal
            CliError::Library(LibError::InvalidConfiguration { violations }) => {
                write!(f, "invalid configuration:")?;
                for violation in violations {
                    write!(f, "\n  - {violation}")?;
                }
                Ok(())
            }
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Serialization(msg) => write!(f, "Failed to render configuration: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}
