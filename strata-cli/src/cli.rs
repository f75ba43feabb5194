//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CheckCommand, CompletionsCommand, EnvCommand, ShowCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for checking layered application configuration.
#[derive(Parser)]
#[command(name = "strata")]
#[command(version, about = "Check and inspect layered application configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Project root containing the config/ directory
    #[arg(long, value_name = "PATH", global = true, env = "STRATA_ROOT")]
    pub root: Option<PathBuf>,

    /// Runtime environment (defaults to development)
    #[arg(long, short = 'e', value_name = "NAME", global = true, env = "APP_ENV")]
    pub environment: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Load and validate the configuration
    Check(CheckCommand),

    /// Print the resolved configuration
    Show(ShowCommand),

    /// Print the resolved environment
    Env(EnvCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
