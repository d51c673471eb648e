//! Package-manager invocation shapes.
//!
//! Every platform declares how its package manager is invoked, as a command
//! with a single `{deps}` placeholder:
//!
//! ```text
//! apk add --no-cache {deps}
//! dnf install --setopt=install_weak_deps=False -y {deps} && dnf clean all
//! ```
//!
//! The shape is split around the placeholder once, when the catalog is built.
//! Rendering is then plain concatenation and cannot fail.

use crate::catalog::PackageList;
use crate::core::DockgenError;

/// The substitution point for the space-separated package list.
pub const DEPS_PLACEHOLDER: &str = "{deps}";

/// A validated install command with exactly one `{deps}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommandShape {
    raw: String,
    prefix: String,
    suffix: String,
}

impl InstallCommandShape {
    /// Parse the install command declared for `platform`.
    ///
    /// # Errors
    ///
    /// - [`DockgenError::MissingPlaceholder`] if `{deps}` does not occur
    /// - [`DockgenError::MultiplePlaceholders`] if it occurs more than once
    pub fn parse(platform: &str, shape: &str) -> Result<Self, DockgenError> {
        let count = shape.matches(DEPS_PLACEHOLDER).count();
        match count {
            0 => Err(DockgenError::MissingPlaceholder {
                platform: platform.to_string(),
                shape: shape.to_string(),
            }),
            1 => {
                let (prefix, suffix) = shape
                    .split_once(DEPS_PLACEHOLDER)
                    .unwrap_or((shape, ""));
                Ok(Self {
                    raw: shape.to_string(),
                    prefix: prefix.to_string(),
                    suffix: suffix.to_string(),
                })
            }
            _ => Err(DockgenError::MultiplePlaceholders {
                platform: platform.to_string(),
                count,
            }),
        }
    }

    /// Substitute the space-joined `packages` into the placeholder.
    #[must_use]
    pub fn render(&self, packages: &PackageList) -> String {
        let joined = packages.join();
        let mut command =
            String::with_capacity(self.prefix.len() + joined.len() + self.suffix.len());
        command.push_str(&self.prefix);
        command.push_str(&joined);
        command.push_str(&self.suffix);
        command
    }

    /// The command as declared, placeholder included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}
