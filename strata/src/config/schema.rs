//! Configuration schema definitions.
//!
//! These types are the validated, immutable view of the configuration that
//! the rest of the application consumes. Field names in the INI files are a
//! compatibility surface, so serde names mirror them exactly.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use url::Url;

/// Runtime environment of the application.
///
/// # Examples
///
/// ```
/// use strata::Environment;
///
/// let env: Environment = "staging".parse().unwrap();
/// assert_eq!(env, Environment::Staging);
/// assert_eq!(env.to_string(), "staging");
/// assert!("local".parse::<Environment>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Live deployment; the environment file is mandatory.
    Production,
    /// Local development (the default).
    Development,
    /// Pre-production deployment.
    Staging,
    /// Automated test runs.
    Testing,
}

impl Environment {
    /// Every environment, in the order they are listed in error messages.
    pub const ALL: [Self; 4] = [
        Self::Production,
        Self::Development,
        Self::Staging,
        Self::Testing,
    ];

    /// Returns the lowercase name used in files and environment variables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| format!("unknown environment: {s}"))
    }
}

/// Maximum accepted request body size, e.g. `100kb`.
///
/// The original text is preserved for display; [`BodyLimit::bytes`] gives the
/// size in bytes (`kb` = 1024 bytes, `mb` = 1024 kb).
///
/// # Examples
///
/// ```
/// use strata::config::BodyLimit;
///
/// let limit = BodyLimit::parse("2MB").unwrap();
/// assert_eq!(limit.bytes(), 2 * 1024 * 1024);
/// assert_eq!(limit.as_str(), "2MB");
/// assert!(BodyLimit::parse("2 gb").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyLimit {
    raw: String,
    bytes: u64,
}

impl BodyLimit {
    /// Parse `<digits><b|kb|mb>` (case-insensitive).
    ///
    /// Returns `None` if the text does not match or the size overflows.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
        let pattern = PATTERN
            .get_or_init(|| Regex::new(r"(?i)^(\d+)(b|kb|mb)$").ok())
            .as_ref()?;

        let captures = pattern.captures(raw)?;
        let amount: u64 = captures[1].parse().ok()?;
        let unit: u64 = match captures[2].to_ascii_lowercase().as_str() {
            "b" => 1,
            "kb" => 1024,
            _ => 1024 * 1024,
        };

        Some(Self {
            raw: raw.to_string(),
            bytes: amount.checked_mul(unit)?,
        })
    }

    /// Returns the limit as written in the configuration.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the limit in bytes.
    #[must_use]
    pub const fn bytes(&self) -> u64 {
        self.bytes
    }
}

impl Serialize for BodyLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// A secret string that never appears in `Debug` or serialized output.
///
/// # Examples
///
/// ```
/// use strata::config::Secret;
///
/// let secret = Secret::new("s3cr3t");
/// assert_eq!(secret.expose(), "s3cr3t");
/// assert!(!format!("{secret:?}").contains("s3cr3t"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    const REDACTED: &'static str = "********";

    /// Wraps a plain string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the plain secret.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", Self::REDACTED)
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(Self::REDACTED)
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    /// Listening port (1-65535).
    pub port: u16,
    /// Maximum request body size.
    pub body_limit: BodyLimit,
}

/// Request rate limiting: at most `requests` per `minutes` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitConfig {
    /// Window length in minutes (at least 1).
    pub minutes: u64,
    /// Requests allowed per window (at least 1).
    pub requests: u64,
}

/// Session middleware settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    /// Signing secret, at least 32 characters.
    pub secret: Secret,
}

/// Filesystem locations used by the application.
///
/// `P` is `String` straight out of validation and `PathBuf` once every path
/// has been resolved against the project root and checked on disk.
/// `default_layout` is a template name, not a path, and stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathsConfig<P = PathBuf> {
    /// Static asset directory.
    #[serde(rename = "static")]
    pub static_files: P,
    /// View templates.
    pub views: P,
    /// Layout templates.
    pub views_layouts: P,
    /// Partial templates.
    pub views_partials: P,
    /// Email templates.
    pub emails: P,
    /// Name of the layout used when a view does not pick one.
    pub default_layout: String,
}

/// Valkey (Redis-compatible) connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValkeyConfig {
    /// Connection URI.
    pub url: Url,
}

/// Complete validated configuration.
///
/// Only the recognized sections survive validation; unknown keys in the
/// files are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config<P = PathBuf> {
    /// Runtime environment.
    pub environment: Environment,
    /// HTTP server settings.
    pub http: HttpConfig,
    /// Rate limiting settings.
    pub rate_limit: RateLimitConfig,
    /// Session settings.
    pub session: SessionConfig,
    /// Filesystem locations.
    pub paths: PathsConfig<P>,
    /// Valkey settings.
    pub valkey: ValkeyConfig,
}

/// Configuration that passed schema validation but whose paths are still
/// the raw strings from the files.
pub type ValidatedConfig = Config<String>;

impl<P> Config<P> {
    /// Convert the `paths` section with `f`, keeping everything else.
    ///
    /// # Errors
    ///
    /// Returns whatever error `f` returns.
    pub fn try_map_paths<Q, E>(
        self,
        f: impl FnOnce(PathsConfig<P>) -> Result<PathsConfig<Q>, E>,
    ) -> Result<Config<Q>, E> {
        Ok(Config {
            environment: self.environment,
            http: self.http,
            rate_limit: self.rate_limit,
            session: self.session,
            paths: f(self.paths)?,
            valkey: self.valkey,
        })
    }

    /// True when running in production.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// True when running in development.
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// True when running in staging.
    #[must_use]
    pub fn is_staging(&self) -> bool {
        self.environment == Environment::Staging
    }

    /// True when running tests.
    #[must_use]
    pub fn is_testing(&self) -> bool {
        self.environment == Environment::Testing
    }
}
