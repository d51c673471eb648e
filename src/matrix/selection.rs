//! Restricting generation to part of the matrix.

use strsim::levenshtein;

use crate::catalog::{Catalog, CompilerDefinition, PlatformDefinition};
use crate::core::DockgenError;

/// Maximum Levenshtein distance, as a percentage of the typed name's length,
/// for a catalog name to be offered as a suggestion.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Platform and compiler filters from `--platform` / `--compiler`.
///
/// An empty filter selects every entry. Selected pairs are always returned in
/// catalog order, whatever order the filters were given in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub platforms: Vec<String>,
    pub compilers: Vec<String>,
}

impl Selection {
    /// Select the whole matrix.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(platforms: Vec<String>, compilers: Vec<String>) -> Self {
        Self {
            platforms,
            compilers,
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.platforms.is_empty() && self.compilers.is_empty()
    }

    /// Selected (platform, compiler) pairs, platform-major.
    ///
    /// # Errors
    ///
    /// Returns [`DockgenError::UnknownPlatform`] or
    /// [`DockgenError::UnknownCompiler`] for a name the catalog lacks.
    pub fn pairs<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Result<Vec<(&'a PlatformDefinition, &'a CompilerDefinition)>, DockgenError> {
        for name in &self.platforms {
            if catalog.platform(name).is_none() {
                let known: Vec<&str> = catalog.platforms().iter().map(PlatformDefinition::name).collect();
                return Err(DockgenError::UnknownPlatform {
                    name: name.clone(),
                    suggestions: find_similar(name, &known),
                });
            }
        }
        for name in &self.compilers {
            if catalog.compiler(name).is_none() {
                let known: Vec<&str> = catalog.compilers().iter().map(CompilerDefinition::name).collect();
                return Err(DockgenError::UnknownCompiler {
                    name: name.clone(),
                    suggestions: find_similar(name, &known),
                });
            }
        }

        let platforms = catalog
            .platforms()
            .iter()
            .filter(|p| self.platforms.is_empty() || self.platforms.iter().any(|n| n == p.name()));

        let mut pairs = Vec::new();
        for platform in platforms {
            for compiler in catalog.compilers() {
                if self.compilers.is_empty() || self.compilers.iter().any(|n| n == compiler.name()) {
                    pairs.push((platform, compiler));
                }
            }
        }
        Ok(pairs)
    }
}

/// Up to three known names close to `target`, closest first.
fn find_similar(target: &str, known: &[&str]) -> Vec<String> {
    let limit = (target.len() * SIMILARITY_THRESHOLD_PERCENT / 100).max(1);

    let mut scored: Vec<_> = known.iter().map(|name| (*name, levenshtein(target, name))).collect();
    scored.sort_by_key(|(_, dist)| *dist);

    scored
        .into_iter()
        .filter(|(_, dist)| *dist <= limit)
        .take(3)
        .map(|(name, _)| name.to_string())
        .collect()
}
