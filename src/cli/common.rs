//! Helpers shared by the dockgen subcommands.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::DockgenError;
use crate::manifest::{Manifest, find_manifest, find_manifest_with_optional};

/// A manifest plus the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub manifest: Manifest,
    /// `None` when the built-in catalog is in use
    pub path: Option<PathBuf>,
}

impl LoadedManifest {
    /// Human-readable origin, for output.
    #[must_use]
    pub fn origin(&self) -> String {
        self.path
            .as_deref()
            .map_or_else(|| "built-in catalog".to_string(), |p| p.display().to_string())
    }

    /// `--output-dir` if given, otherwise the manifest's default.
    #[must_use]
    pub fn output_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map_or_else(|| self.manifest.default_output_dir(), Path::to_path_buf)
    }
}

/// Load the manifest for a command.
///
/// An explicit `--manifest-path` must exist. Without one, `dockgen.toml` is
/// searched for from the current directory upward, falling back to the
/// built-in catalog when none is found.
///
/// # Errors
///
/// Returns an error if an explicit manifest is missing, or if a found
/// manifest cannot be read or parsed.
pub fn load_manifest(manifest_path: Option<PathBuf>) -> Result<LoadedManifest> {
    let path = if manifest_path.is_some() {
        Some(find_manifest_with_optional(manifest_path)?)
    } else {
        match find_manifest() {
            Ok(path) => Some(path),
            Err(e) if matches!(e.downcast_ref::<DockgenError>(), Some(DockgenError::ManifestNotFound)) => {
                tracing::debug!("no dockgen.toml found, using built-in catalog");
                None
            }
            Err(e) => return Err(e),
        }
    };

    let manifest = match &path {
        Some(path) => Manifest::load(path)?,
        None => Manifest::builtin(),
    };

    Ok(LoadedManifest {
        manifest,
        path,
    })
}
