//! File system utilities used when emitting recipes
//!
//! - [`atomic_write`] / [`safe_write`]: temp-file-and-rename writes
//! - [`ensure_dir`]: create the output directory tree
//! - [`read_existing`]: read a previous recipe, if any, for change detection

pub mod atomic;
pub mod dirs;

pub use atomic::{atomic_write, safe_write};
pub use dirs::ensure_dir;

use anyhow::{Context, Result};
use std::path::Path;

/// Read a file's bytes if it exists as a regular file.
///
/// Returns `Ok(None)` when nothing is at `path` or when `path` is a
/// directory, so callers can treat both as "no previous recipe".
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_existing(path: &Path) -> Result<Option<Vec<u8>>> {
    if !path.is_file() {
        return Ok(None);
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(bytes))
}
