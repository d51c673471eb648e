//! Manifest discovery.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// File name of the dockgen manifest.
pub const MANIFEST_FILE: &str = "dockgen.toml";

/// Find `dockgen.toml` by walking up from the current directory.
///
/// # Errors
///
/// Returns [`crate::core::DockgenError::ManifestNotFound`] if no manifest
/// exists in the current directory or any parent.
pub fn find_manifest() -> Result<PathBuf> {
    let current = std::env::current_dir()
        .context("Cannot determine current working directory")?;
    find_manifest_from(current)
}

/// Use `explicit_path` if given, otherwise search from the current directory.
///
/// # Errors
///
/// Returns [`crate::core::DockgenError::ManifestNotFound`] if the explicit
/// path does not exist or the search finds nothing.
pub fn find_manifest_with_optional(explicit_path: Option<PathBuf>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => {
            if path.exists() {
                Ok(path)
            } else {
                Err(crate::core::DockgenError::ManifestNotFound.into())
            }
        }
        None => find_manifest(),
    }
}

/// Find `dockgen.toml` by walking up from `current`.
///
/// # Errors
///
/// Returns [`crate::core::DockgenError::ManifestNotFound`] when the
/// filesystem root is reached without a match.
pub fn find_manifest_from(mut current: PathBuf) -> Result<PathBuf> {
    loop {
        let manifest_path = current.join(MANIFEST_FILE);
        if manifest_path.exists() {
            return Ok(manifest_path);
        }

        if !current.pop() {
            return Err(crate::core::DockgenError::ManifestNotFound.into());
        }
    }
}
