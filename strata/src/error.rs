//! Error types for the strata library.
//!
//! Every error here is fatal to configuration loading: nothing is retried
//! and there is no partially loaded configuration to fall back on.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a strata error.
///
/// # Examples
///
/// ```
/// use strata::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the strata library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration file does not exist.
    #[error("missing required configuration file: {}", path.display())]
    MissingConfigFile {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// A configuration file exists but is not valid INI.
    #[error("failed to parse {} (line {line}): {message}", path.display())]
    ConfigParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The 1-based line number of the offending line.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The merged configuration violates the schema.
    ///
    /// Carries every violation found in the run, in schema order.
    #[error("invalid configuration: {}", ViolationList(violations))]
    InvalidConfiguration {
        /// All violations, in the order the schema declares the fields.
        violations: Vec<Violation>,
    },

    /// A configured filesystem path does not exist.
    #[error("configured path '{field}' does not exist: {}", path.display())]
    PathNotFound {
        /// The configuration field holding the path (e.g. `paths.views`).
        field: String,
        /// The resolved absolute path that was checked.
        path: PathBuf,
    },

    /// An existing configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A single schema violation.
///
/// # Examples
///
/// ```
/// use strata::Violation;
///
/// let violation = Violation::new("http.port", "is required");
/// assert_eq!(violation.to_string(), "http.port is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human readable description of the rule that failed.
    pub message: String,
}

impl Violation {
    /// Creates a violation for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

struct ViolationList<'a>(&'a [Violation]);

impl fmt::Display for ViolationList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Returns the schema violations if this is an `InvalidConfiguration` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::{Error, Violation};
    ///
    /// let err = Error::InvalidConfiguration {
    ///     violations: vec![Violation::new("http.port", "is required")],
    /// };
    /// assert_eq!(err.violations().len(), 1);
    /// ```
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::InvalidConfiguration { violations } => violations,
            _ => &[],
        }
    }

    /// Check if error indicates a configured path does not exist.
    #[must_use]
    pub fn is_path_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error indicates a required file is missing.
    #[must_use]
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::MissingConfigFile { .. })
    }
}
