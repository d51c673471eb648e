//! Matrix expansion and recipe emission.

use std::path::{Path, PathBuf};

use super::recipe::EffectiveRecipe;
use super::report::{ArtifactOutcome, ArtifactStatus, GenerationReport, RecipeFailure};
use super::selection::Selection;
use crate::catalog::{Catalog, CompilerDefinition, PlatformDefinition};
use crate::core::DockgenError;
use crate::templating::{RecipeRenderer, RecipeTemplate};
use crate::utils::fs::{atomic_write, read_existing};

/// A rendered recipe together with where it goes and how it compares to
/// what is already on disk.
#[derive(Debug, Clone)]
pub struct PlannedRecipe {
    pub recipe: EffectiveRecipe,
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

/// Expands a [`Catalog`] into one recipe per (platform, compiler) pair.
///
/// Every selected recipe is rendered before anything is written, so a
/// template problem leaves the output directory untouched. Writing is then
/// attempted for every recipe; individual write failures are recorded in the
/// [`GenerationReport`] instead of stopping the run.
#[derive(Debug)]
pub struct MatrixGenerator {
    catalog: Catalog,
    renderer: RecipeRenderer,
}

impl MatrixGenerator {
    /// Generator using the built-in recipe template.
    ///
    /// # Errors
    ///
    /// Returns [`DockgenError::TemplateSyntax`] if the template fails to compile.
    pub fn new(catalog: Catalog) -> Result<Self, DockgenError> {
        Self::with_template(catalog, &RecipeTemplate::builtin())
    }

    /// # Errors
    ///
    /// Returns [`DockgenError::TemplateSyntax`] if `template` fails to compile.
    pub fn with_template(catalog: Catalog, template: &RecipeTemplate) -> Result<Self, DockgenError> {
        Ok(Self {
            catalog,
            renderer: RecipeRenderer::new(template)?,
        })
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Selected pairs, platform-major in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error for names not in the catalog.
    pub fn pairs(
        &self,
        selection: &Selection,
    ) -> Result<Vec<(&PlatformDefinition, &CompilerDefinition)>, DockgenError> {
        selection.pairs(&self.catalog)
    }

    /// Render every selected recipe without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Stops at the first pair that fails to render.
    pub fn render_all(&self, selection: &Selection) -> Result<Vec<EffectiveRecipe>, DockgenError> {
        self.pairs(selection)?
            .into_iter()
            .map(|(platform, compiler)| EffectiveRecipe::render(platform, compiler, &self.renderer))
            .collect()
    }

    /// Render every selected recipe and compare it with `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns the first rendering or selection error.
    pub fn plan(
        &self,
        selection: &Selection,
        output_dir: &Path,
    ) -> Result<Vec<PlannedRecipe>, DockgenError> {
        let recipes = self.render_all(selection)?;

        Ok(recipes
            .into_iter()
            .map(|recipe| {
                let path = output_dir.join(&recipe.output_name);
                let status = match read_existing(&path) {
                    Ok(None) => ArtifactStatus::Created,
                    Ok(Some(existing)) if existing == recipe.rendered_text.as_bytes() => {
                        ArtifactStatus::Unchanged
                    }
                    Ok(Some(_)) => ArtifactStatus::Updated,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), "cannot read existing recipe: {e:#}");
                        ArtifactStatus::Updated
                    }
                };
                PlannedRecipe {
                    recipe,
                    path,
                    status,
                }
            })
            .collect())
    }

    /// Write every selected recipe into `output_dir`.
    ///
    /// Files whose content is already current are left alone. With `dry_run`
    /// nothing is written and the report describes what would change.
    ///
    /// # Errors
    ///
    /// Returns an error only if rendering fails; write failures are in the
    /// report (see [`GenerationReport::ensure_success`]).
    pub fn generate(
        &self,
        selection: &Selection,
        output_dir: &Path,
        dry_run: bool,
    ) -> Result<GenerationReport, DockgenError> {
        let planned = self.plan(selection, output_dir)?;

        tracing::info!(
            recipes = planned.len(),
            output_dir = %output_dir.display(),
            dry_run,
            "generating recipes"
        );

        let mut report = GenerationReport {
            dry_run,
            ..GenerationReport::default()
        };

        for PlannedRecipe {
            recipe,
            path,
            status,
        } in planned
        {
            if status.is_stale() && !dry_run {
                if let Err(e) = atomic_write(&path, recipe.rendered_text.as_bytes()) {
                    tracing::warn!(
                        platform = %recipe.platform,
                        compiler = %recipe.compiler,
                        path = %path.display(),
                        "failed to write recipe: {e:#}"
                    );
                    report.failures.push(RecipeFailure {
                        platform: recipe.platform,
                        compiler: recipe.compiler,
                        path,
                        reason: format!("{e:#}"),
                    });
                    continue;
                }
                tracing::info!(path = %path.display(), %status, "wrote recipe");
            } else {
                tracing::debug!(path = %path.display(), %status, "recipe not written");
            }
            report.artifacts.push(ArtifactOutcome {
                platform: recipe.platform,
                compiler: recipe.compiler,
                path,
                status,
            });
        }

        Ok(report)
    }

    /// Verify that `output_dir` already holds every selected recipe.
    ///
    /// # Errors
    ///
    /// Returns [`DockgenError::RecipesOutOfDate`] naming each missing or
    /// differing file, or any rendering error.
    pub fn check(&self, selection: &Selection, output_dir: &Path) -> Result<(), DockgenError> {
        let stale: Vec<String> = self
            .plan(selection, output_dir)?
            .into_iter()
            .filter(|p| p.status.is_stale())
            .map(|p| {
                let state = if p.status == ArtifactStatus::Created { "missing" } else { "stale" };
                format!("{} ({state})", p.path.display())
            })
            .collect();

        if stale.is_empty() {
            Ok(())
        } else {
            Err(DockgenError::RecipesOutOfDate {
                stale,
            })
        }
    }
}
