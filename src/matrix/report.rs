//! Outcome records for a generation run.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::core::DockgenError;

/// What happened (or would happen) to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    /// No file existed at the output path
    Created,
    /// A file existed with different content
    Updated,
    /// The file already held exactly the rendered text
    Unchanged,
}

impl ArtifactStatus {
    #[must_use]
    pub const fn is_stale(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// One output file of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactOutcome {
    pub platform: String,
    pub compiler: String,
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

/// A recipe that could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeFailure {
    pub platform: String,
    pub compiler: String,
    pub path: PathBuf,
    pub reason: String,
}

impl From<&RecipeFailure> for DockgenError {
    fn from(failure: &RecipeFailure) -> Self {
        Self::WriteFailed {
            platform: failure.platform.clone(),
            compiler: failure.compiler.clone(),
            path: failure.path.display().to_string(),
            reason: failure.reason.clone(),
        }
    }
}

/// Result of [`super::MatrixGenerator::generate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub artifacts: Vec<ArtifactOutcome>,
    pub failures: Vec<RecipeFailure>,
    pub dry_run: bool,
}

impl GenerationReport {
    /// Number of recipes attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.artifacts.len() + self.failures.len()
    }

    #[must_use]
    pub fn count(&self, status: ArtifactStatus) -> usize {
        self.artifacts.iter().filter(|a| a.status == status).count()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn recorded write failures into an error.
    ///
    /// # Errors
    ///
    /// Returns [`DockgenError::GenerationFailed`] listing every failed recipe.
    pub fn ensure_success(&self) -> Result<(), DockgenError> {
        if self.is_success() {
            return Ok(());
        }
        Err(DockgenError::GenerationFailed {
            failed: self.failures.len(),
            total: self.total(),
            details: self.failures.iter().map(|f| DockgenError::from(f).to_string()).collect(),
        })
    }
}
