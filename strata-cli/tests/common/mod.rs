//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated project root with a `config/` directory
//! and a command builder pointed at it.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
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

/// Test environment with an isolated project root.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the project root
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an empty project with only a `config/` directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        fs::create_dir(root.join("config")).expect("Failed to create config dir");

        Self { temp_dir, root }
    }

    /// Create a project whose configuration is valid for development.
    pub fn valid() -> Self {
        let env = Self::new();
        for dir in ["public", "views/layouts", "views/partials", "emails"] {
            env.create_dir(dir);
        }
        env.write_config("common.ini", VALID_COMMON);
        env
    }

    /// Get a bare command builder with inherited configuration variables
    /// cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("strata").expect("Failed to find strata binary");
        cmd.env_remove("APP_ENV")
            .env_remove("STRATA_ROOT")
            .env_remove("STRATA_LOG_MODE");
        cmd
    }

    /// Get a command builder with `--root` pointed at this project.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--root").arg(&self.root);
        cmd
    }

    /// Get the project root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Create a directory under the project root.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write `config/<name>`.
    pub fn write_config(&self, name: &str, contents: &str) {
        fs::write(self.root.join("config").join(name), contents)
            .expect("Failed to write config file");
    }
}
