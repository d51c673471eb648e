//! Atomic file write operations using temp-and-rename strategy.
//!
//! Recipes are written to a sibling temp file and renamed into place, so a
//! reader (or a container build started mid-run) never sees a truncated
//! Dockerfile under its final name.

use crate::utils::fs::dirs::ensure_dir;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Safely writes a string to a file using atomic operations.
///
/// This is a convenience wrapper around [`atomic_write`]. The file either
/// contains the new content or its previous content, never a partial write.
///
/// # Examples
///
/// ```rust,no_run
/// use dockgen_cli::utils::fs::safe_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// safe_write(Path::new("Dockerfile.debian-gcc"), "FROM debian:bookworm AS builder\n")?;
/// # Ok(())
/// # }
/// ```
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Writes content to `<file name>.tmp` in the same directory
/// 2. Syncs the temporary file to disk
/// 3. Renames the temporary file over the target path
///
/// The temp name keeps the full target file name, so concurrent writes of
/// `Dockerfile.debian-gcc` and `Dockerfile.debian-clang` never share a temp
/// file. On failure the temp file is removed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the temp
/// file cannot be written, or the rename fails (for example when the target
/// is an existing directory).
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }

    let temp_path = temp_path_for(path);

    let result = write_and_rename(path, &temp_path, content);
    if result.is_err() && temp_path.exists() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_rename(path: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    {
        let mut file = fs::File::create(temp_path).with_context(|| {
            format!(
                "Failed to create temp file: {}\n\nCheck file permissions and that directory exists",
                temp_path.display()
            )
        })?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().with_context(|| "Failed to sync file to disk")?;
    }

    fs::rename(temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

/// `Dockerfile.debian-gcc` -> `Dockerfile.debian-gcc.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(OsString::new, OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}
