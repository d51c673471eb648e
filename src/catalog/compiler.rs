//! Compiler definitions.

use crate::catalog::validate_name;
use crate::core::DockgenError;

/// A C++ toolchain variant and the package that installs it.
///
/// The same `package_name` is passed to every platform's package manager.
/// Making sure it exists under that name on every distribution is up to
/// whoever writes the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerDefinition {
    name: String,
    package_name: String,
}

impl CompilerDefinition {
    /// Build a validated compiler.
    ///
    /// # Errors
    ///
    /// - [`DockgenError::InvalidName`] if `name` cannot appear in a file name
    /// - [`DockgenError::EmptyField`] / [`DockgenError::InvalidPackage`] if the
    ///   package name is blank or contains whitespace
    pub fn new(name: &str, package_name: &str) -> Result<Self, DockgenError> {
        validate_name("compiler", name)?;

        if package_name.trim().is_empty() {
            return Err(DockgenError::EmptyField {
                entry: format!("compiler '{name}'"),
                field: "package".to_string(),
            });
        }
        if package_name.chars().any(char::is_whitespace) {
            return Err(DockgenError::InvalidPackage {
                entry: format!("compiler '{name}'"),
                package: package_name.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            package_name: package_name.to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}
