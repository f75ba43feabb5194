//! Load-once configuration cell.
//!
//! A [`ConfigCell`] holds at most one [`Config`] for its whole lifetime. The
//! first successful load publishes it; every later load returns the published
//! value without running the pipeline again. A failed load publishes nothing.
//!
//! Applications normally use the process-wide cell returned by [`global`]
//! and hand the resulting `Arc<Config>` to the components that need it.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::config::{Config, Environment};
use crate::error::Result;

/// Holds a configuration that is loaded at most once.
///
/// # Examples
///
/// ```no_run
/// use strata::{ConfigBuilder, ConfigCell};
///
/// let cell = ConfigCell::new();
/// assert!(!cell.is_development());
///
/// let builder = ConfigBuilder::new("/srv/app");
/// let first = builder.load_into(&cell).unwrap();
/// let second = builder.load_into(&cell).unwrap();
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug)]
pub struct ConfigCell {
    value: OnceLock<Arc<Config>>,
    init: Mutex<()>,
}

impl ConfigCell {
    /// Create an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Return the published configuration, running `load` if there is none.
    ///
    /// Concurrent first calls are serialized so `load` runs at most once per
    /// successful initialization.
    ///
    /// # Errors
    ///
    /// Returns the error from `load`; the cell stays empty in that case.
    pub fn load_with<F>(&self, load: F) -> Result<Arc<Config>>
    where
        F: FnOnce() -> Result<Config>,
    {
        if let Some(config) = self.value.get() {
            return Ok(Arc::clone(config));
        }

        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(config) = self.value.get() {
            return Ok(Arc::clone(config));
        }

        let config = Arc::new(load()?);
        let published = self.value.get_or_init(|| config);
        Ok(Arc::clone(published))
    }

    /// The published configuration, if loading has completed.
    #[must_use]
    pub fn get(&self) -> Option<Arc<Config>> {
        self.value.get().cloned()
    }

    /// Whether a configuration has been published.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.value.get().is_some()
    }

    /// The published environment, if loaded.
    #[must_use]
    pub fn environment(&self) -> Option<Environment> {
        self.value.get().map(|config| config.environment)
    }

    /// True once loaded for production.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment() == Some(Environment::Production)
    }

    /// True once loaded for development.
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.environment() == Some(Environment::Development)
    }

    /// True once loaded for staging.
    #[must_use]
    pub fn is_staging(&self) -> bool {
        self.environment() == Some(Environment::Staging)
    }

    /// True once loaded for testing.
    #[must_use]
    pub fn is_testing(&self) -> bool {
        self.environment() == Some(Environment::Testing)
    }
}

impl Default for ConfigCell {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide configuration cell.
#[must_use]
pub fn global() -> &'static ConfigCell {
    static GLOBAL: ConfigCell = ConfigCell::new();
    &GLOBAL
}
