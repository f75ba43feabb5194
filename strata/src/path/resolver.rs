//! Resolution and existence checks for configured paths.
//!
//! Unlike schema validation, a missing path stops processing immediately:
//! the first one found is reported and the rest are not examined.

use std::path::{Path, PathBuf};

use crate::config::schema::{Config, PathsConfig, ValidatedConfig};
use crate::error::{Error, Result};
use crate::path::normalize::resolve_against;

/// Resolves the `paths` section against the project root.
///
/// # Examples
///
/// ```
/// use strata::path::PathResolver;
/// use std::path::{Path, PathBuf};
///
/// let resolver = PathResolver::new("/srv/app");
/// assert_eq!(resolver.resolve("public"), PathBuf::from("/srv/app/public"));
/// assert_eq!(resolver.root(), Path::new("/srv/app"));
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Create a resolver anchored at the project `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root relative paths are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a single configured path without checking it exists.
    #[must_use]
    pub fn resolve(&self, value: &str) -> PathBuf {
        resolve_against(&self.root, value)
    }

    /// Resolve every directory in `paths` and verify each exists.
    ///
    /// Fields are checked in declaration order: `static`, `views`,
    /// `viewsLayouts`, `viewsPartials`, `emails`. `default_layout` names a
    /// template and is passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] for the first path that does not
    /// exist.
    pub fn resolve_paths(&self, paths: PathsConfig<String>) -> Result<PathsConfig> {
        Ok(PathsConfig {
            static_files: self.existing("static", &paths.static_files)?,
            views: self.existing("views", &paths.views)?,
            views_layouts: self.existing("viewsLayouts", &paths.views_layouts)?,
            views_partials: self.existing("viewsPartials", &paths.views_partials)?,
            emails: self.existing("emails", &paths.emails)?,
            default_layout: paths.default_layout,
        })
    }

    /// Resolve the `paths` section of a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] for the first path that does not
    /// exist.
    pub fn resolve_config(&self, config: ValidatedConfig) -> Result<Config> {
        config.try_map_paths(|paths| self.resolve_paths(paths))
    }

    fn existing(&self, key: &str, value: &str) -> Result<PathBuf> {
        let path = self.resolve(value);
        if path.exists() {
            log::debug!("paths.{key} resolved to {}", path.display());
            Ok(path)
        } else {
            Err(Error::PathNotFound {
                field: format!("paths.{key}"),
                path,
            })
        }
    }
}
