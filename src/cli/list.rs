//! Show the catalog and the recipes it expands to.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::common::load_manifest;
use super::validate::OutputFormat;
use crate::catalog::{self, Catalog, PackageList};

/// Command to list platforms, compilers and recipe names.
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct PlatformSummary<'a> {
    name: &'a str,
    image: &'a str,
    install_command: &'a str,
    dev_packages: &'a PackageList,
    runtime_packages: &'a PackageList,
}

#[derive(Debug, Serialize)]
struct CompilerSummary<'a> {
    name: &'a str,
    package: &'a str,
}

/// One matrix cell with its effective package lists.
#[derive(Debug, Serialize)]
struct RecipeSummary<'a> {
    output: String,
    platform: &'a str,
    compiler: &'a str,
    image: &'a str,
    dev_packages: PackageList,
    runtime_packages: &'a PackageList,
}

#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    manifest: String,
    platforms: Vec<PlatformSummary<'a>>,
    compilers: Vec<CompilerSummary<'a>>,
    recipes: Vec<RecipeSummary<'a>>,
}

impl<'a> ListOutput<'a> {
    fn new(manifest: String, catalog: &'a Catalog) -> Self {
        let platforms = catalog
            .platforms()
            .iter()
            .map(|p| PlatformSummary {
                name: p.name(),
                image: p.base_image(),
                install_command: p.install_command().as_str(),
                dev_packages: p.dev_packages(),
                runtime_packages: p.runtime_packages(),
            })
            .collect();
        let compilers = catalog
            .compilers()
            .iter()
            .map(|c| CompilerSummary {
                name: c.name(),
                package: c.package_name(),
            })
            .collect();
        let recipes = catalog
            .platforms()
            .iter()
            .flat_map(|p| {
                catalog.compilers().iter().map(move |c| RecipeSummary {
                    output: catalog::output_name(p, c),
                    platform: p.name(),
                    compiler: c.name(),
                    image: p.base_image(),
                    dev_packages: p.effective_dev_packages(c.package_name()),
                    runtime_packages: p.runtime_packages(),
                })
            })
            .collect();

        Self {
            manifest,
            platforms,
            compilers,
            recipes,
        }
    }

    fn print_text(&self) {
        println!("{} ({})", "Platforms".bold(), self.manifest);
        for p in &self.platforms {
            println!("  {:<12} {}", p.name.cyan(), p.image);
        }
        println!("{}", "Compilers".bold());
        for c in &self.compilers {
            println!("  {:<12} {}", c.name.cyan(), c.package);
        }
        println!("{}", "Recipes".bold());
        if self.recipes.is_empty() {
            println!("  {}", "(none)".dimmed());
        }
        for recipe in &self.recipes {
            println!("  {:<28} {}", recipe.output, recipe.image);
            println!("    {} {}", "dev:".dimmed(), recipe.dev_packages);
            println!("    {} {}", "runtime:".dimmed(), recipe.runtime_packages);
        }
    }
}

impl ListCommand {
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded or is invalid.
    pub fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let loaded = load_manifest(manifest_path)?;
        let catalog = loaded.manifest.catalog()?;
        let output = ListOutput::new(loaded.origin(), &catalog);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
            OutputFormat::Text => output.print_text(),
        }
        Ok(())
    }
}
