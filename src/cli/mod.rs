//! Command-line interface for dockgen.
//!
//! # Available Commands
//!
//! - `generate` - Render and write every `Dockerfile.<platform>-<compiler>` (default)
//! - `list` - Show the catalog and the recipes it expands to
//! - `validate` - Check the manifest and render every recipe without writing
//! - `init` - Write a `dockgen.toml` pre-filled with the built-in catalog
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging
//! - `--quiet` / `-q` - Only errors
//! - `--manifest-path` - Use this manifest instead of searching for `dockgen.toml`
//! - `--no-color` - Disable colored output
//!
//! Log output goes to stderr. `RUST_LOG` overrides the level chosen by
//! `--verbose` / `--quiet`.

pub mod common;
pub mod generate;
pub mod init;
pub mod list;
pub mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub log_level: String,
    pub no_color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            no_color: false,
        }
    }
}

impl CliConfig {
    /// Install the global tracing subscriber and color settings.
    ///
    /// A subscriber that is already installed is left in place.
    pub fn apply(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(!self.no_color)
            .without_time()
            .try_init();
    }
}

/// Generate per-platform, per-compiler Dockerfiles for asset-server.
#[derive(Parser, Debug)]
#[command(
    name = "dockgen",
    about = "Generate Dockerfile recipes for every platform and compiler pair",
    version,
    long_about = "dockgen expands a catalog of base platforms and C++ compilers into one \
                  two-stage Dockerfile per pair, named Dockerfile.<platform>-<compiler>."
)]
pub struct Cli {
    /// The subcommand to execute (defaults to `generate`)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to dockgen.toml (default: search upward from the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    manifest_path: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render and write recipes (default command)
    Generate(generate::GenerateCommand),

    /// Show platforms, compilers and recipe names
    List(list::ListCommand),

    /// Validate the manifest and render every recipe without writing
    Validate(validate::ValidateCommand),

    /// Create a dockgen.toml with the built-in catalog
    Init(init::InitCommand),
}

impl Cli {
    /// Apply global settings and run the selected command.
    ///
    /// # Errors
    ///
    /// Returns whatever error the command fails with.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(&config)
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            no_color: self.no_color,
        }
    }

    /// Run with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns whatever error the command fails with.
    pub fn execute_with_config(self, config: &CliConfig) -> Result<()> {
        config.apply();

        tracing::debug!(command = ?self.command, "dispatching");

        match self.command {
            None => generate::GenerateCommand::default()
                .execute_with_manifest_path(self.manifest_path, self.quiet),
            Some(Commands::Generate(cmd)) => {
                cmd.execute_with_manifest_path(self.manifest_path, self.quiet)
            }
            Some(Commands::List(cmd)) => cmd.execute_with_manifest_path(self.manifest_path),
            Some(Commands::Validate(cmd)) => {
                cmd.execute_with_manifest_path(self.manifest_path, self.quiet)
            }
            Some(Commands::Init(cmd)) => cmd.execute(self.quiet),
        }
    }
}
