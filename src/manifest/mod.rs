//! Manifest file parsing for dockgen.
//!
//! A `dockgen.toml` manifest declares the platform and compiler catalogs the
//! generator expands. Without a manifest, the built-in catalog
//! ([`Manifest::builtin`]) is used.
//!
//! # Structure
//!
//! ```toml
//! [generator]
//! output-dir = "docker"
//!
//! [[platforms]]
//! name = "alpine"
//! image = "alpine:3"
//! install-command = "apk add --no-cache {deps}"
//! dev-deps = ["openssl-dev", "vips-dev", "boost-dev", "file-dev", "cmake", "make", "git"]
//! runtime-deps = ["vips", "openssl", "libmagic"]
//!
//! [[compilers]]
//! name = "gcc"
//! package = "g++"
//! ```
//!
//! Entries keep the order they are written in; that order fixes the order of
//! generated files and of packages inside each recipe.
//!
//! Parsing only checks the TOML shape. Semantic checks (placeholder, names,
//! duplicates) happen in [`Manifest::catalog`].

mod builtin;
pub mod helpers;

pub use helpers::{MANIFEST_FILE, find_manifest, find_manifest_from, find_manifest_with_optional};

use crate::catalog::{Catalog, CompilerDefinition, PlatformDefinition};
use crate::core::DockgenError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Generator settings from the `[generator]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory recipes are written to, relative to the manifest directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// A `[[platforms]]` entry as written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PlatformEntry {
    pub name: String,
    pub image: String,
    /// Package-manager invocation with one `{deps}` placeholder
    pub install_command: String,
    #[serde(default)]
    pub dev_deps: Vec<String>,
    #[serde(default)]
    pub runtime_deps: Vec<String>,
}

/// A `[[compilers]]` entry as written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CompilerEntry {
    pub name: String,
    /// Package installing this compiler on every platform
    pub package: String,
}

/// The parsed contents of `dockgen.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<GeneratorConfig>,

    #[serde(default)]
    pub platforms: Vec<PlatformEntry>,

    #[serde(default)]
    pub compilers: Vec<CompilerEntry>,

    /// Directory containing the manifest file, set by [`Manifest::load`]
    #[serde(skip)]
    pub manifest_dir: Option<PathBuf>,
}

impl Manifest {
    /// Load and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid manifest
    /// TOML ([`DockgenError::ManifestParseError`]).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

        let mut manifest = Self::parse(&content, path)?;

        manifest.manifest_dir = Some(manifest_dir_of(path));

        tracing::debug!(
            path = %path.display(),
            platforms = manifest.platforms.len(),
            compilers = manifest.compilers.len(),
            "loaded manifest"
        );

        Ok(manifest)
    }

    /// Parse manifest TOML; `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`DockgenError::ManifestParseError`] on syntax errors, unknown
    /// keys or missing required fields.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, DockgenError> {
        toml::from_str(content).map_err(|e| DockgenError::ManifestParseError {
            file: origin.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Build the validated catalog from the manifest entries.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found, see
    /// [`PlatformDefinition::new`], [`CompilerDefinition::new`] and
    /// [`Catalog::new`].
    pub fn catalog(&self) -> Result<Catalog, DockgenError> {
        let platforms = self
            .platforms
            .iter()
            .map(|p| {
                PlatformDefinition::new(
                    &p.name,
                    &p.image,
                    &p.install_command,
                    p.dev_deps.iter().cloned(),
                    p.runtime_deps.iter().cloned(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let compilers = self
            .compilers
            .iter()
            .map(|c| CompilerDefinition::new(&c.name, &c.package))
            .collect::<Result<Vec<_>, _>>()?;

        Catalog::new(platforms, compilers)
    }

    /// Where recipes go when no `--output-dir` is given.
    ///
    /// `[generator] output-dir` is resolved against the manifest directory;
    /// otherwise the manifest directory itself, or `.` for the built-in
    /// catalog.
    #[must_use]
    pub fn default_output_dir(&self) -> PathBuf {
        let base = self.manifest_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        match self.generator.as_ref().and_then(|g| g.output_dir.as_ref()) {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => base.join(dir),
            None => base,
        }
    }

    /// Serialize back to TOML, as written by `dockgen init`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, DockgenError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Directory holding the manifest at `path`.
///
/// A bare file name has an empty parent, which is reported as `.`.
fn manifest_dir_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
