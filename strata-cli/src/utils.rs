//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command and the
//! helpers that turn them into a configuration load.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strata::{Config, ConfigBuilder, Logger};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Logger built from `--verbose`, `--quiet` and `STRATA_LOG_MODE`.
    pub logger: Logger,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the project root.
    pub root: Option<PathBuf>,

    /// Override the runtime environment.
    pub environment: Option<String>,
}

impl GlobalOptions {
    /// The project root: `--root`, `STRATA_ROOT`, or the workspace this
    /// binary was built from.
    pub fn project_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(default_root)
    }

    /// A builder configured from these options.
    pub fn config_builder(&self) -> ConfigBuilder {
        let builder =
            ConfigBuilder::new(self.project_root()).with_logger(Arc::new(self.logger));
        match &self.environment {
            Some(environment) => builder.with_environment(environment.clone()),
            None => builder,
        }
    }
}

/// The workspace root recorded at build time.
///
/// It ships a sample `config/common.ini` and the directories it names, so
/// `strata check` works from a checkout without `--root`.
pub fn default_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map_or_else(|| manifest_dir.to_path_buf(), Path::to_path_buf)
}

/// Load the configuration into the process-wide cell.
pub fn load_configuration(global: &GlobalOptions) -> Result<Arc<Config>, CliError> {
    if let Some(root) = &global.root {
        if !root.is_dir() {
            return Err(CliError::InvalidArguments(format!(
                "project root is not a directory: {}",
                root.display()
            )));
        }
    }

    global.logger.debug(&format!(
        "Using project root {}",
        global.project_root().display()
    ));
    Ok(global.config_builder().load_global()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata::LogLevel;

    fn options(root: Option<PathBuf>) -> GlobalOptions {
        GlobalOptions {
            logger: Logger::new(LogLevel::Quiet),
            quiet: true,
            root,
            environment: None,
        }
    }

    #[test]
    fn test_project_root_prefers_override() {
        let global = options(Some(PathBuf::from("/srv/app")));
        assert_eq!(global.project_root(), PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_default_root_is_workspace() {
        let global = options(None);
        assert_eq!(global.project_root(), default_root());
        assert!(default_root().join("strata-cli").is_dir());
    }

    #[test]
    fn test_load_rejects_missing_root() {
        let global = options(Some(PathBuf::from("/nonexistent/strata/root")));
        let err = load_configuration(&global).unwrap_err();
        assert_eq!(err.exit_code(), 6);
    }
}
