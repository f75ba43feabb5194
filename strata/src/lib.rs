#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # strata
//!
//! Layered, validated application configuration.
//!
//! Settings are read from `config/common.ini` and an environment-specific
//! file, merged, validated against a fixed schema and published once per
//! process as an immutable [`Config`].
//!
//! ## Core Types
//!
//! - [`ConfigBuilder`]: Runs the load pipeline
//! - [`Config`] and [`Environment`]: The resolved configuration
//! - [`ConfigCell`] and [`global`]: Load-once publication
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use strata::ConfigBuilder;
//!
//! let config = ConfigBuilder::new("/srv/app").load_global().unwrap();
//! if strata::global().is_production() {
//!     println!("production on port {}", config.http.port);
//! }
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use cell::{global, ConfigCell};
pub use config::{Config, ConfigBuilder, Environment};
pub use error::{Error, Result, Violation};
pub use logging::{init_logger, Log, LogLevel, Logger};
