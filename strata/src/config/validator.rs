//! Configuration validation.
//!
//! Validation runs every field check in a single pass and collects all
//! violations before reporting, so one failed run surfaces every problem.
//! Numeric strings are coerced to integers before range checks, which is
//! what makes INI values (always strings) usable for numeric fields.

use serde_json::Value;
use url::Url;

use crate::config::ini::ConfigTree;
use crate::config::schema::{
    BodyLimit, Config, Environment, HttpConfig, PathsConfig, RateLimitConfig, Secret,
    SessionConfig, ValidatedConfig, ValkeyConfig,
};
use crate::error::{Error, Result, Violation};

/// Top-level key holding the environment name.
pub const ENVIRONMENT_FIELD: &str = "NODE_ENV";

/// Minimum session secret length, in characters.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Validates a merged configuration tree against the schema.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strata::config::ConfigValidator;
///
/// let tree = json!({"NODE_ENV": "development"});
/// let err = ConfigValidator::validate(tree.as_object().unwrap()).unwrap_err();
/// // Every missing section is reported, not just the first.
/// assert_eq!(err.violations().len(), 5);
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a merged configuration tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] listing every violation, in
    /// schema order.
    pub fn validate(tree: &ConfigTree) -> Result<ValidatedConfig> {
        let mut checker = Checker::default();

        let environment = checker.field(
            ENVIRONMENT_FIELD,
            tree.get(ENVIRONMENT_FIELD),
            environment_name,
        );
        let http = Self::validate_http(&mut checker, tree);
        let rate_limit = Self::validate_rate_limit(&mut checker, tree);
        let session = Self::validate_session(&mut checker, tree);
        let paths = Self::validate_paths(&mut checker, tree);
        let valkey = Self::validate_valkey(&mut checker, tree);

        match (environment, http, rate_limit, session, paths, valkey) {
            (
                Some(environment),
                Some(http),
                Some(rate_limit),
                Some(session),
                Some(paths),
                Some(valkey),
            ) if checker.violations.is_empty() => Ok(Config {
                environment,
                http,
                rate_limit,
                session,
                paths,
                valkey,
            }),
            _ => Err(Error::InvalidConfiguration {
                violations: checker.violations,
            }),
        }
    }

    fn validate_http(checker: &mut Checker, tree: &ConfigTree) -> Option<HttpConfig> {
        let section = checker.section(tree, "http")?;
        let port = checker.field("http.port", section.get("port"), |v| {
            let port = integer(v)?;
            u16::try_from(port)
                .ok()
                .filter(|p| *p >= 1)
                .ok_or_else(|| "must be between 1 and 65535".to_string())
        });
        let body_limit = checker.field("http.bodyLimit", section.get("bodyLimit"), |v| {
            BodyLimit::parse(string(v)?)
                .ok_or_else(|| "must be a size such as 100kb (units: b, kb, mb)".to_string())
        });
        Some(HttpConfig {
            port: port?,
            body_limit: body_limit?,
        })
    }

    fn validate_rate_limit(checker: &mut Checker, tree: &ConfigTree) -> Option<RateLimitConfig> {
        let section = checker.section(tree, "rateLimit")?;
        let minutes = checker.field("rateLimit.minutes", section.get("minutes"), positive);
        let requests = checker.field("rateLimit.requests", section.get("requests"), positive);
        Some(RateLimitConfig {
            minutes: minutes?,
            requests: requests?,
        })
    }

    fn validate_session(checker: &mut Checker, tree: &ConfigTree) -> Option<SessionConfig> {
        let section = checker.section(tree, "session")?;
        let secret = checker.field("session.secret", section.get("secret"), |v| {
            let secret = string(v)?;
            if secret.chars().count() < MIN_SECRET_LENGTH {
                return Err(format!("must be at least {MIN_SECRET_LENGTH} characters long"));
            }
            Ok(Secret::new(secret))
        });
        Some(SessionConfig { secret: secret? })
    }

    fn validate_paths(checker: &mut Checker, tree: &ConfigTree) -> Option<PathsConfig<String>> {
        let section = checker.section(tree, "paths")?;
        let mut path = |key: &str| {
            checker.field(&format!("paths.{key}"), section.get(key), |v| {
                non_empty_string(v).map(str::to_string)
            })
        };

        let static_files = path("static");
        let views = path("views");
        let views_layouts = path("viewsLayouts");
        let views_partials = path("viewsPartials");
        let emails = path("emails");
        let default_layout = path("defaultLayout");

        Some(PathsConfig {
            static_files: static_files?,
            views: views?,
            views_layouts: views_layouts?,
            views_partials: views_partials?,
            emails: emails?,
            default_layout: default_layout?,
        })
    }

    fn validate_valkey(checker: &mut Checker, tree: &ConfigTree) -> Option<ValkeyConfig> {
        let section = checker.section(tree, "valkey")?;
        let url = checker.field("valkey.url", section.get("url"), |v| {
            Url::parse(string(v)?).map_err(|e| format!("must be a valid URI ({e})"))
        });
        Some(ValkeyConfig { url: url? })
    }
}

/// Accumulates violations while field checks run.
#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.violations.push(Violation::new(field, message));
    }

    /// Look up a required section, recording a single violation if it is
    /// missing or not a table.
    fn section<'t>(&mut self, tree: &'t ConfigTree, name: &str) -> Option<&'t ConfigTree> {
        match tree.get(name) {
            None | Some(Value::Null) => {
                self.fail(name, "is required");
                None
            }
            Some(Value::Object(section)) => Some(section),
            Some(_) => {
                self.fail(name, "must be a section");
                None
            }
        }
    }

    /// Run `rule` on a required field, recording a violation on failure.
    fn field<T>(
        &mut self,
        field: &str,
        value: Option<&Value>,
        rule: impl FnOnce(&Value) -> std::result::Result<T, String>,
    ) -> Option<T> {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            self.fail(field, "is required");
            return None;
        };
        match rule(value) {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                self.fail(field, message);
                None
            }
        }
    }
}

fn environment_name(value: &Value) -> std::result::Result<Environment, String> {
    value
        .as_str()
        .and_then(|name| name.parse().ok())
        .ok_or_else(|| {
            let names: Vec<&str> = Environment::ALL.iter().map(|e| e.as_str()).collect();
            format!("must be one of: {}", names.join(", "))
        })
}

fn string(value: &Value) -> std::result::Result<&str, String> {
    value.as_str().ok_or_else(|| "must be a string".to_string())
}

fn non_empty_string(value: &Value) -> std::result::Result<&str, String> {
    let s = string(value)?;
    if s.trim().is_empty() {
        return Err("must not be empty".to_string());
    }
    Ok(s)
}

/// Coerce a number or numeric string into an integer.
fn integer(value: &Value) -> std::result::Result<i64, String> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| {
            if n.is_u64() {
                "is out of range".to_string()
            } else {
                "must be an integer".to_string()
            }
        }),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().map_err(|_| {
                if trimmed.parse::<f64>().is_ok() {
                    "must be an integer".to_string()
                } else {
                    "must be a number".to_string()
                }
            })
        }
        _ => Err("must be a number".to_string()),
    }
}

fn positive(value: &Value) -> std::result::Result<u64, String> {
    let n = integer(value)?;
    u64::try_from(n)
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| "must be greater than or equal to 1".to_string())
}
