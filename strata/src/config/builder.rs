//! Assembles and runs the configuration pipeline.

use std::error::Error as StdError;
use std::path::{self, PathBuf};
use std::sync::Arc;

use crate::cell::{self, ConfigCell};
use crate::config::environment::{EnvironmentConfig, ENV_VAR};
use crate::config::loader::{ConfigSource, FileLoader, COMMON_FILE};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use crate::logging::{Log, Logger};
use crate::path::PathResolver;

/// Builder for loading configuration.
///
/// The pipeline is: select the environment, load `common.ini` and
/// `<environment>.ini`, merge them (environment file wins), validate, then
/// resolve and check paths.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use strata::{ConfigBuilder, LogLevel, Logger};
///
/// let config = ConfigBuilder::new("/srv/app")
///     .with_environment("staging")
///     .with_logger(Arc::new(Logger::new(LogLevel::Verbose)))
///     .build()
///     .unwrap();
///
/// assert!(config.is_staging());
/// ```
pub struct ConfigBuilder {
    root: PathBuf,
    environment: Option<String>,
    logger: Arc<dyn Log>,
    source: Option<Box<dyn ConfigSource>>,
}

impl ConfigBuilder {
    /// Create a builder for the project rooted at `root`.
    ///
    /// The environment defaults to `APP_ENV` and files are read from
    /// `<root>/config/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            environment: None,
            logger: Arc::new(Logger::default()),
            source: None,
        }
    }

    /// Use `environment` instead of reading `APP_ENV`.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Report progress through `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn Log>) -> Self {
        self.logger = logger;
        self
    }

    /// Read configuration trees from `source` instead of the filesystem.
    #[must_use]
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Run the pipeline and return the resolved configuration.
    ///
    /// Every failure is logged through the configured logger before it is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error: a missing required file, a parse
    /// error, every schema violation at once, or the first missing path.
    pub fn build(&self) -> Result<Config> {
        self.run().inspect_err(|err| {
            let detail: &dyn StdError = err;
            self.logger.error("Failed to load configuration", Some(detail));
        })
    }

    /// Load into `cell` unless it already holds a configuration.
    ///
    /// # Errors
    ///
    /// Returns the error from [`ConfigBuilder::build`]; `cell` stays empty.
    pub fn load_into(&self, cell: &ConfigCell) -> Result<Arc<Config>> {
        cell.load_with(|| self.build())
    }

    /// Load into the process-wide cell returned by [`crate::global`].
    ///
    /// # Errors
    ///
    /// Returns the error from [`ConfigBuilder::build`].
    pub fn load_global(&self) -> Result<Arc<Config>> {
        self.load_into(cell::global())
    }

    fn run(&self) -> Result<Config> {
        let environment = self.environment.as_deref().map_or_else(
            EnvironmentConfig::selected,
            |name| EnvironmentConfig::from_value(Some(name)),
        );
        EnvironmentConfig::validate_name(&environment)?;

        let root = path::absolute(&self.root).map_err(|source| Error::Io {
            path: self.root.clone(),
            source,
        })?;
        log::debug!(
            "Loading '{environment}' configuration from {}",
            root.display()
        );

        let file_loader;
        let source: &dyn ConfigSource = match &self.source {
            Some(source) => source.as_ref(),
            None => {
                file_loader = FileLoader::new(&root, Arc::clone(&self.logger));
                &file_loader
            }
        };

        let common = source.load(COMMON_FILE, true)?;
        let specific = source.load(
            &EnvironmentConfig::file_name(&environment),
            EnvironmentConfig::is_file_required(&environment),
        )?;

        let merged = ConfigMerger::merge([common, specific]);
        let validated = ConfigValidator::validate(&merged)?;
        let config = PathResolver::new(root).resolve_config(validated)?;

        // The predicates follow NODE_ENV, not the file selection.
        if config.environment.as_str() != environment {
            self.logger.warn(&format!(
                "{ENV_VAR} selected '{environment}' but NODE_ENV is '{}'",
                config.environment
            ));
        }
        self.logger.info(&format!(
            "Configuration loaded for environment '{}'",
            config.environment
        ));
        Ok(config)
    }
}
