//! Platform and compiler catalogs
//!
//! The catalog is the static input of the generator: an ordered list of
//! platforms and an ordered list of compilers. Every (platform, compiler)
//! pair becomes one recipe.
//!
//! # Invariants
//!
//! A [`Catalog`] can only be obtained through [`Catalog::new`], which checks
//! that:
//! - platform names are unique and compiler names are unique
//! - every pair maps to a distinct output file name
//! - no platform lists a compiler package among its runtime packages
//!
//! Entry-level checks (name charset, `{deps}` placeholder, package names)
//! happen in [`PlatformDefinition::new`] and [`CompilerDefinition::new`].
//!
//! Iteration order is insertion order. The order of packages inside a
//! rendered recipe follows it, so regenerating from the same catalog is
//! byte-for-byte reproducible.

pub mod compiler;
pub mod install;
pub mod packages;
pub mod platform;

pub use compiler::CompilerDefinition;
pub use install::{DEPS_PLACEHOLDER, InstallCommandShape};
pub use packages::PackageList;
pub use platform::PlatformDefinition;

use crate::core::DockgenError;
use std::collections::{HashMap, HashSet};

/// Prefix shared by every output file name.
pub const OUTPUT_PREFIX: &str = "Dockerfile.";

/// Output file name for one matrix cell: `Dockerfile.<platform>-<compiler>`.
#[must_use]
pub fn output_name(platform: &PlatformDefinition, compiler: &CompilerDefinition) -> String {
    format!("{OUTPUT_PREFIX}{}-{}", platform.name(), compiler.name())
}

/// Validated, read-only platform and compiler tables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    platforms: Vec<PlatformDefinition>,
    compilers: Vec<CompilerDefinition>,
}

impl Catalog {
    /// Build a catalog, checking the cross-entry invariants.
    ///
    /// # Errors
    ///
    /// - [`DockgenError::DuplicatePlatform`] / [`DockgenError::DuplicateCompiler`]
    /// - [`DockgenError::CompilerInRuntime`] if a runtime list contains a compiler package
    /// - [`DockgenError::OutputNameCollision`] if two pairs would write the same file
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dockgen_cli::catalog::{Catalog, CompilerDefinition, PlatformDefinition};
    ///
    /// let catalog = Catalog::new(
    ///     vec![PlatformDefinition::new("alpine", "alpine:3", "apk add {deps}", ["make"], ["vips"])?],
    ///     vec![CompilerDefinition::new("gcc", "g++")?, CompilerDefinition::new("clang", "clang")?],
    /// )?;
    /// assert_eq!(catalog.pair_count(), 2);
    /// # Ok::<(), dockgen_cli::core::DockgenError>(())
    /// ```
    pub fn new(
        platforms: Vec<PlatformDefinition>,
        compilers: Vec<CompilerDefinition>,
    ) -> Result<Self, DockgenError> {
        let mut seen = HashSet::with_capacity(platforms.len());
        for platform in &platforms {
            if !seen.insert(platform.name()) {
                return Err(DockgenError::DuplicatePlatform {
                    name: platform.name().to_string(),
                });
            }
        }

        let mut seen = HashSet::with_capacity(compilers.len());
        for compiler in &compilers {
            if !seen.insert(compiler.name()) {
                return Err(DockgenError::DuplicateCompiler {
                    name: compiler.name().to_string(),
                });
            }
        }

        for platform in &platforms {
            for compiler in &compilers {
                if platform.runtime_packages().contains(compiler.package_name()) {
                    return Err(DockgenError::CompilerInRuntime {
                        platform: platform.name().to_string(),
                        package: compiler.package_name().to_string(),
                    });
                }
            }
        }

        // Names are joined with '-', so "a-b"+"c" and "a"+"b-c" collide
        let mut outputs: HashMap<String, String> =
            HashMap::with_capacity(platforms.len() * compilers.len());
        for platform in &platforms {
            for compiler in &compilers {
                let pair = format!("{}/{}", platform.name(), compiler.name());
                if let Some(first) = outputs.insert(output_name(platform, compiler), pair.clone())
                {
                    return Err(DockgenError::OutputNameCollision {
                        output: output_name(platform, compiler),
                        first,
                        second: pair,
                    });
                }
            }
        }

        Ok(Self {
            platforms,
            compilers,
        })
    }

    #[must_use]
    pub fn platforms(&self) -> &[PlatformDefinition] {
        &self.platforms
    }

    #[must_use]
    pub fn compilers(&self) -> &[CompilerDefinition] {
        &self.compilers
    }

    #[must_use]
    pub fn platform(&self, name: &str) -> Option<&PlatformDefinition> {
        self.platforms.iter().find(|p| p.name() == name)
    }

    #[must_use]
    pub fn compiler(&self, name: &str) -> Option<&CompilerDefinition> {
        self.compilers.iter().find(|c| c.name() == name)
    }

    /// Number of recipes the full matrix produces.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.platforms.len() * self.compilers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pair_count() == 0
    }
}

/// Check that `name` is usable inside an output file name.
pub(crate) fn validate_name(kind: &str, name: &str) -> Result<(), DockgenError> {
    let invalid = |reason: &str| DockgenError::InvalidName {
        kind: kind.to_string(),
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if let Some(c) = name.chars().find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(invalid(&format!("character {c:?} is not allowed in file names")));
    }
    Ok(())
}

/// Check that every package is non-empty and has no whitespace.
pub(crate) fn validate_packages(entry: &str, packages: &PackageList) -> Result<(), DockgenError> {
    match packages.iter().find(|p| p.is_empty() || p.chars().any(char::is_whitespace)) {
        Some(package) => Err(DockgenError::InvalidPackage {
            entry: entry.to_string(),
            package: package.clone(),
        }),
        None => Ok(()),
    }
}
