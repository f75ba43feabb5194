//! Common test utilities for integration tests.
//!
//! This module provides a project fixture builder and a recording logger for
//! testing the strata library.

use std::error::Error as StdError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use strata::Log;
use tempfile::TempDir;

/// A `common.ini` that passes validation once the default directories exist.
#[allow(dead_code)]
pub const VALID_COMMON: &str = "\
NODE_ENV = development

[http]
port = 8080
bodyLimit = 100kb

[rateLimit]
minutes = 15
requests = 100

[session]
secret = 0123456789abcdef0123456789abcdef

[paths]
static = public
views = views
viewsLayouts = views/layouts
viewsPartials = views/partials
emails = emails
defaultLayout = main

[valkey]
url = redis://localhost:6379
";

/// Directories referenced by [`VALID_COMMON`].
pub const DEFAULT_DIRS: [&str; 4] = ["public", "views/layouts", "views/partials", "emails"];

/// A temporary project root with a `config/` directory.
///
/// # Examples
///
/// ```no_run
/// # use common::ProjectFixture;
/// let project = ProjectFixture::new()
///     .with_default_dirs()
///     .with_file("common.ini", common::VALID_COMMON);
/// ```
pub struct ProjectFixture {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// Creates an empty project with only a `config/` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("config")).unwrap();
        Self { temp_dir }
    }

    /// Creates the directories the valid configuration points at.
    pub fn with_default_dirs(self) -> Self {
        for dir in DEFAULT_DIRS {
            fs::create_dir_all(self.root().join(dir)).unwrap();
        }
        self
    }

    /// Writes `contents` to `config/<name>`.
    pub fn with_file(self, name: &str, contents: &str) -> Self {
        fs::write(self.config_dir().join(name), contents).unwrap();
        self
    }

    /// A fully valid development project.
    pub fn valid() -> Self {
        Self::new()
            .with_default_dirs()
            .with_file("common.ini", VALID_COMMON)
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The `config/` directory.
    pub fn config_dir(&self) -> PathBuf {
        self.root().join("config")
    }
}

/// Records every log call for later inspection.
#[derive(Default)]
pub struct RecordingLog {
    entries: Mutex<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl RecordingLog {
    /// Messages logged at `level` ("info", "warn" or "error").
    pub fn messages(&self, level: &str) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn record(&self, level: &str, message: String) {
        self.entries
            .lock()
            .unwrap()
            .push((level.to_string(), message));
    }
}

impl Log for RecordingLog {
    fn info(&self, message: &str) {
        self.record("info", message.to_string());
    }

    fn warn(&self, message: &str) {
        self.record("warn", message.to_string());
    }

    fn error(&self, message: &str, detail: Option<&dyn StdError>) {
        let message = match detail {
            Some(err) => format!("{message}: {err}"),
            None => message.to_string(),
        };
        self.record("error", message);
    }
}
