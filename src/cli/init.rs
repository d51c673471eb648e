//! Create a `dockgen.toml` manifest pre-filled with the built-in catalog.
//!
//! # Examples
//!
//! ```bash
//! # Write dockgen.toml into the current directory
//! dockgen init
//!
//! # Write into another directory, replacing an existing manifest
//! dockgen init --path docker --force
//! ```

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::manifest::{MANIFEST_FILE, Manifest};
use crate::utils::fs::{ensure_dir, safe_write};

const HEADER: &str = "\
# dockgen manifest
# Every [[platforms]] entry is combined with every [[compilers]] entry and
# written to Dockerfile.<platform>-<compiler>. Each install-command must contain
# {deps} exactly once.

";

/// Command to initialize a new dockgen manifest.
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Directory to create the manifest in (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Force overwrite if the manifest already exists
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    /// Write the manifest, refusing to replace an existing one without
    /// `--force`. `quiet` suppresses the confirmation line.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest exists and `--force` was not given,
    /// or if the file cannot be written.
    pub fn execute(self, quiet: bool) -> Result<()> {
        let target_dir = self.path.unwrap_or_else(|| PathBuf::from("."));
        let manifest_path = target_dir.join(MANIFEST_FILE);

        if manifest_path.exists() && !self.force {
            return Err(anyhow!(
                "Manifest already exists at {}. Use --force to overwrite",
                manifest_path.display()
            ));
        }

        ensure_dir(&target_dir)?;

        let body = Manifest::builtin().to_toml_string()?;
        safe_write(&manifest_path, &format!("{HEADER}{body}"))?;

        tracing::info!(path = %manifest_path.display(), "wrote manifest");
        if !quiet {
            println!("{} Initialized {} at {}", "✓".green(), MANIFEST_FILE, manifest_path.display());
        }

        Ok(())
    }
}
