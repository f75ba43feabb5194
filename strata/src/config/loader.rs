//! Configuration file loading.
//!
//! Files live in the `config/` directory under the project root. The root is
//! always supplied by the caller, so loading never depends on the process's
//! current working directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ini::{self, ConfigTree};
use crate::error::{Error, Result};
use crate::logging::Log;

/// Directory, relative to the project root, holding configuration files.
pub const CONFIG_DIR: &str = "config";

/// Name of the configuration file shared by every environment.
pub const COMMON_FILE: &str = "common.ini";

/// A source of configuration trees, addressed by file name.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource {
    /// Load `filename` into a tree.
    ///
    /// A missing file yields an empty tree unless `required` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfigFile`] for a missing required file,
    /// [`Error::ConfigParse`] for malformed contents and [`Error::Io`] when
    /// an existing file cannot be read.
    fn load(&self, filename: &str, required: bool) -> Result<ConfigTree>;
}

/// Loads INI files from `<root>/config/`.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use strata::config::{ConfigSource, FileLoader};
/// use strata::Logger;
///
/// let loader = FileLoader::new("/srv/app", Arc::new(Logger::default()));
/// let common = loader.load("common.ini", true).unwrap();
/// println!("{} top-level keys", common.len());
/// ```
pub struct FileLoader {
    config_dir: PathBuf,
    log: Arc<dyn Log>,
}

impl FileLoader {
    /// Create a loader for the project rooted at `root`.
    pub fn new(root: impl AsRef<Path>, log: Arc<dyn Log>) -> Self {
        Self {
            config_dir: root.as_ref().join(CONFIG_DIR),
            log,
        }
    }

    /// Directory the loader reads from.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Read and parse a single INI file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfigFile`] if the file does not exist,
    /// [`Error::Io`] if it cannot be read and [`Error::ConfigParse`] if the
    /// contents are not valid UTF-8 or not valid INI.
    pub fn load_file(path: &Path) -> Result<ConfigTree> {
        let bytes = fs::read(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                Error::MissingConfigFile {
                    path: path.to_path_buf(),
                }
            } else {
                Error::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let contents = String::from_utf8(bytes).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            Error::ConfigParse {
                path: path.to_path_buf(),
                line: valid.iter().filter(|b| **b == b'\n').count() + 1,
                message: "invalid UTF-8".to_string(),
            }
        })?;

        ini::parse(&contents).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            line: e.line,
            message: e.message,
        })
    }
}

impl ConfigSource for FileLoader {
    fn load(&self, filename: &str, required: bool) -> Result<ConfigTree> {
        let path = self.config_dir.join(filename);

        if !path.exists() {
            if required {
                return Err(Error::MissingConfigFile { path });
            }
            self.log.warn(&format!(
                "Optional configuration file not found, skipping: {}",
                path.display()
            ));
            return Ok(ConfigTree::new());
        }

        let tree = Self::load_file(&path)?;
        self.log
            .info(&format!("Loaded configuration file: {}", path.display()));
        Ok(tree)
    }
}
