//! Runtime environment selection.
//!
//! The environment name picks which environment-specific file is layered on
//! top of `common.ini`, and whether that file is mandatory.

use std::env;

use crate::config::schema::Environment;
use crate::error::{Error, Result, Violation};

/// Environment variable selecting the runtime environment.
pub const ENV_VAR: &str = "APP_ENV";

/// Environment used when [`ENV_VAR`] is unset or blank.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// File extension of configuration files.
pub const CONFIG_EXTENSION: &str = "ini";

/// Handles selection of the runtime environment name.
///
/// # Examples
///
/// ```
/// use strata::config::EnvironmentConfig;
///
/// assert_eq!(EnvironmentConfig::from_value(None), "development");
/// assert_eq!(EnvironmentConfig::from_value(Some(" staging ")), "staging");
/// assert_eq!(EnvironmentConfig::file_name("staging"), "staging.ini");
/// assert!(EnvironmentConfig::is_file_required("production"));
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Read the environment name from `APP_ENV`, defaulting to `development`.
    #[must_use]
    pub fn selected() -> String {
        Self::from_value(env::var(ENV_VAR).ok().as_deref())
    }

    /// Normalize a raw environment name.
    ///
    /// Surrounding whitespace is trimmed; a missing or blank value falls back
    /// to [`DEFAULT_ENVIRONMENT`].
    #[must_use]
    pub fn from_value(value: Option<&str>) -> String {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_ENVIRONMENT)
            .to_string()
    }

    /// Name of the environment-specific configuration file.
    #[must_use]
    pub fn file_name(environment: &str) -> String {
        format!("{environment}.{CONFIG_EXTENSION}")
    }

    /// Whether the environment-specific file must exist.
    ///
    /// Only production refuses to start without its own file.
    #[must_use]
    pub fn is_file_required(environment: &str) -> bool {
        environment == Environment::Production.as_str()
    }

    /// Reject names that cannot safely become a file name.
    ///
    /// Names may contain only ASCII letters, digits, `-` and `_`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming [`ENV_VAR`].
    pub fn validate_name(environment: &str) -> Result<()> {
        let valid = !environment.is_empty()
            && environment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid {
            Ok(())
        } else {
            Err(Error::InvalidConfiguration {
                violations: vec![Violation::new(
                    ENV_VAR,
                    format!("'{environment}' must contain only letters, digits, '-' or '_'"),
                )],
            })
        }
    }
}
