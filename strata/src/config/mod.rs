//! Layered application configuration.
//!
//! Configuration is read from INI files under `<project root>/config/`:
//!
//! 1. `common.ini` (always required)
//! 2. `<environment>.ini` (required only in production)
//!
//! Later files win: nested sections are merged key by key, while scalars and
//! arrays replace what came before. The merged tree is validated against a
//! fixed schema, every violation being reported at once, and the configured
//! directories are resolved against the project root and checked on disk.
//!
//! The environment is taken from `APP_ENV` unless set explicitly, and
//! defaults to `development`.
//!
//! # Examples
//!
//! ```no_run
//! use strata::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new("/srv/app").build().unwrap();
//! println!("listening on {}", config.http.port);
//! println!("body limit: {} bytes", config.http.body_limit.bytes());
//! ```
//!
//! Using a custom source:
//!
//! ```
//! use strata::config::{ConfigSource, ConfigTree};
//! use strata::Result;
//!
//! struct Fixed;
//!
//! impl ConfigSource for Fixed {
//!     fn load(&self, _filename: &str, _required: bool) -> Result<ConfigTree> {
//!         Ok(ConfigTree::new())
//!     }
//! }
//! ```

pub mod builder;
pub mod environment;
pub mod ini;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use ini::ConfigTree;
pub use loader::{ConfigSource, FileLoader, COMMON_FILE};
pub use merger::ConfigMerger;
pub use schema::{
    BodyLimit, Config, Environment, HttpConfig, PathsConfig, RateLimitConfig, Secret,
    SessionConfig, ValidatedConfig, ValkeyConfig,
};
pub use validator::ConfigValidator;
