//! Core types for dockgen
//!
//! This module holds the error taxonomy shared by every layer of the crate.
//!
//! - [`DockgenError`] - enumerated failure modes (configuration, manifest,
//!   selection, template, write)
//! - [`ErrorContext`] - user-facing wrapper with details and a suggestion
//! - [`user_friendly_error`] - convert any `anyhow::Error` for CLI display
//!
//! # Examples
//!
//! ```rust
//! use dockgen_cli::core::{DockgenError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn load() -> Result<()> {
//!     Err(DockgenError::ManifestNotFound.into())
//! }
//!
//! if let Err(e) = load() {
//!     let friendly = user_friendly_error(e);
//!     assert!(friendly.suggestion.is_some());
//! }
//! ```

pub mod error;

pub use error::{DockgenError, ErrorContext, user_friendly_error};
