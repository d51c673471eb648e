//! Utilities
//!
//! - [`fs`] - atomic writes and directory handling for emitted recipes
//!
//! # Example
//!
//! ```rust,no_run
//! use dockgen_cli::utils::{ensure_dir, atomic_write};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("docker"))?;
//! atomic_write(Path::new("docker/Dockerfile.debian-gcc"), b"FROM debian:bookworm AS builder\n")?;
//! # Ok(())
//! # }
//! ```

pub mod fs;

pub use fs::{atomic_write, ensure_dir, safe_write};
