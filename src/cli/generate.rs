//! Generate `Dockerfile.<platform>-<compiler>` recipes.
//!
//! This is the default command: running `dockgen` with no subcommand behaves
//! like `dockgen generate`.
//!
//! # Examples
//!
//! ```bash
//! # Every pair, into the manifest's output directory
//! dockgen generate
//!
//! # Only the alpine recipes, into ./docker
//! dockgen generate --platform alpine --output-dir docker
//!
//! # Show what would change
//! dockgen generate --dry-run
//!
//! # Fail if any recipe on disk is missing or out of date (for CI)
//! dockgen generate --check
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::load_manifest;
use crate::matrix::{ArtifactStatus, GenerationReport, MatrixGenerator, Selection};

/// Command to render and write recipes.
#[derive(Args, Debug, Default)]
pub struct GenerateCommand {
    /// Directory to write recipes to (overrides `[generator] output-dir`)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Only generate recipes for this platform (repeatable)
    #[arg(short, long = "platform", value_name = "NAME")]
    pub platforms: Vec<String>,

    /// Only generate recipes for this compiler (repeatable)
    #[arg(short, long = "compiler", value_name = "NAME")]
    pub compilers: Vec<String>,

    /// Report what would be written without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error if any recipe is missing or differs from its rendering
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,
}

impl GenerateCommand {
    /// # Errors
    ///
    /// Returns an error if the manifest is invalid, a selected name is
    /// unknown, rendering fails, any recipe could not be written, or
    /// `--check` finds stale recipes.
    pub fn execute_with_manifest_path(
        self,
        manifest_path: Option<PathBuf>,
        quiet: bool,
    ) -> Result<()> {
        let loaded = load_manifest(manifest_path)?;
        let output_dir = loaded.output_dir(self.output_dir.as_deref());
        let generator = MatrixGenerator::new(loaded.manifest.catalog()?)?;
        let selection = Selection::new(self.platforms, self.compilers);

        if self.check {
            generator.check(&selection, &output_dir)?;
            if !quiet {
                println!("{} All recipes in {} are up to date", "✓".green(), output_dir.display());
            }
            return Ok(());
        }

        let report = generator.generate(&selection, &output_dir, self.dry_run)?;
        if !quiet {
            print_report(&report, &output_dir);
        }
        report.ensure_success()?;
        Ok(())
    }
}

fn print_report(report: &GenerationReport, output_dir: &std::path::Path) {
    for artifact in &report.artifacts {
        let name = artifact
            .path
            .file_name()
            .map_or_else(|| artifact.path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let status = match (artifact.status, report.dry_run) {
            (ArtifactStatus::Unchanged, _) => "unchanged".dimmed(),
            (ArtifactStatus::Created, false) => "created".green(),
            (ArtifactStatus::Updated, false) => "updated".yellow(),
            (ArtifactStatus::Created, true) => "would create".green(),
            (ArtifactStatus::Updated, true) => "would update".yellow(),
        };
        println!("{} {} ({})", "✓".green(), name, status);
    }
    for failure in &report.failures {
        println!("{} {}: {}", "✗".red(), failure.path.display(), failure.reason);
    }

    let verb = if report.dry_run { "Checked" } else { "Generated" };
    println!(
        "{} {} recipe(s) in {}: {} created, {} updated, {} unchanged, {} failed",
        verb,
        report.total(),
        output_dir.display(),
        report.count(ArtifactStatus::Created),
        report.count(ArtifactStatus::Updated),
        report.count(ArtifactStatus::Unchanged),
        report.failures.len()
    );
}
