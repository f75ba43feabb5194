//! Build script for strata-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("strata")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check and inspect layered application configuration")
        .long_about(
            "Load config/common.ini and the environment-specific file from a project root, \
             validate the merged result and print it",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Project root containing the config/ directory")
                .value_name("PATH")
                .global(true)
                .env("STRATA_ROOT"),
        )
        .arg(
            Arg::new("environment")
                .long("environment")
                .short('e')
                .help("Runtime environment (defaults to development)")
                .value_name("NAME")
                .global(true)
                .env("APP_ENV"),
        )
        .subcommands(vec![
            Command::new("check")
                .about("Load and validate the configuration")
                .long_about("Run the full load pipeline and report every problem found"),
            Command::new("show")
                .about("Print the resolved configuration")
                .long_about("Print the resolved configuration as YAML or JSON, secret redacted"),
            Command::new("env")
                .about("Print the resolved environment")
                .long_about("Print the runtime environment and the environment predicates"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main strata.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("strata.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
