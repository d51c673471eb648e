//! Validate a dockgen manifest without writing any recipe.
//!
//! Validation runs the same steps as `generate` up to the point of writing:
//!
//! 1. Parse the manifest (or take the built-in catalog)
//! 2. Build the catalog, checking names, packages, `{deps}` placeholders,
//!    duplicates and output-name collisions
//! 3. Render every recipe
//!
//! # Examples
//!
//! ```bash
//! dockgen validate
//! dockgen validate --format json
//! ```

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::common::load_manifest;
use crate::matrix::{MatrixGenerator, Selection};

/// Output format for `validate` and `list`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colored status symbols
    #[default]
    Text,
    /// Pretty-printed JSON on stdout
    Json,
}

/// Command to validate the manifest.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Results of a validation run, as printed with `--format json`.
#[derive(Debug, Default, Serialize)]
pub struct ValidationResults {
    pub valid: bool,
    /// Manifest path, or "built-in catalog"
    pub manifest: String,
    pub platforms: usize,
    pub compilers: usize,
    pub recipes: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidateCommand {
    /// Validate the manifest found via `manifest_path` or discovery.
    ///
    /// With `quiet`, a successful text-format run prints nothing. JSON output
    /// is always printed.
    ///
    /// # Errors
    ///
    /// Returns the first validation error after reporting it in the chosen
    /// format.
    pub fn execute_with_manifest_path(
        self,
        manifest_path: Option<PathBuf>,
        quiet: bool,
    ) -> Result<()> {
        let mut results = ValidationResults::default();

        let loaded = match load_manifest(manifest_path) {
            Ok(loaded) => loaded,
            Err(e) => {
                results.errors.push(format!("{e:#}"));
                return self.fail(&results, e);
            }
        };
        results.manifest = loaded.origin();

        let catalog = match loaded.manifest.catalog() {
            Ok(catalog) => catalog,
            Err(e) => {
                results.errors.push(e.to_string());
                return self.fail(&results, e.into());
            }
        };
        results.platforms = catalog.platforms().len();
        results.compilers = catalog.compilers().len();

        if catalog.platforms().is_empty() {
            results.warnings.push("No platforms defined".to_string());
        }
        if catalog.compilers().is_empty() {
            results.warnings.push("No compilers defined".to_string());
        }

        let rendered = MatrixGenerator::new(catalog).and_then(|g| g.render_all(&Selection::all()));
        match rendered {
            Ok(recipes) => results.recipes = recipes.len(),
            Err(e) => {
                results.errors.push(e.to_string());
                return self.fail(&results, e.into());
            }
        }

        results.valid = true;
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
            OutputFormat::Text if quiet => {}
            OutputFormat::Text => {
                println!("{} Valid {}", "✓".green(), results.manifest);
                println!(
                    "  {} platform(s) × {} compiler(s) = {} recipe(s)",
                    results.platforms, results.compilers, results.recipes
                );
                for warning in &results.warnings {
                    println!("{} Warning: {}", "⚠".yellow(), warning);
                }
            }
        }
        Ok(())
    }

    fn fail(&self, results: &ValidationResults, error: anyhow::Error) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(results)?);
                Err(anyhow!("Validation failed"))
            }
            OutputFormat::Text => Err(error),
        }
    }
}
