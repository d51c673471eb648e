//! Platform × compiler matrix generation
//!
//! [`MatrixGenerator`] walks the catalog platform-major (each platform, then
//! each compiler), renders an [`EffectiveRecipe`] per pair and writes it to
//! `Dockerfile.<platform>-<compiler>` in the output directory.
//!
//! # Failure policy
//!
//! - Unknown `--platform` / `--compiler` names and template errors abort the
//!   run before any file is written.
//! - Each recipe is written atomically. A failed write is recorded and the
//!   remaining recipes are still written; the run then reports
//!   [`crate::core::DockgenError::GenerationFailed`].
//!
//! # Example
//!
//! ```rust,no_run
//! use dockgen_cli::manifest::Manifest;
//! use dockgen_cli::matrix::{MatrixGenerator, Selection};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let generator = MatrixGenerator::new(Manifest::builtin().catalog()?)?;
//! let report = generator.generate(&Selection::all(), Path::new("."), false)?;
//! report.ensure_success()?;
//! # Ok(())
//! # }
//! ```

pub mod generator;
pub mod recipe;
pub mod report;
pub mod selection;

pub use generator::{MatrixGenerator, PlannedRecipe};
pub use recipe::EffectiveRecipe;
pub use report::{ArtifactOutcome, ArtifactStatus, GenerationReport, RecipeFailure};
pub use selection::Selection;
