//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `check`: Load and validate the configuration
//! - `show`: Print the resolved configuration
//! - `env`: Print the resolved environment
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod env;
pub mod show;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use env::EnvCommand;
pub use show::{OutputFormat, ShowCommand};
