//! Platform definitions.

use crate::catalog::{InstallCommandShape, PackageList, validate_name, validate_packages};
use crate::core::DockgenError;

/// One target distribution: its base image, package-manager shape and the
/// packages it needs to build and to run `asset-server`.
///
/// Fields are private and only exposed by shared reference. Once built, a
/// platform never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDefinition {
    name: String,
    base_image: String,
    install_command: InstallCommandShape,
    dev_packages: PackageList,
    runtime_packages: PackageList,
}

impl PlatformDefinition {
    /// Build a validated platform.
    ///
    /// `dev_packages` must not include a compiler; the compiler package is
    /// appended per recipe.
    ///
    /// # Errors
    ///
    /// - [`DockgenError::InvalidName`] if `name` cannot appear in a file name
    /// - [`DockgenError::EmptyField`] if `base_image` is blank
    /// - [`DockgenError::MissingPlaceholder`] / [`DockgenError::MultiplePlaceholders`]
    ///   if `install_command` does not contain exactly one `{deps}`
    /// - [`DockgenError::InvalidPackage`] for an empty or whitespace-containing package
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dockgen_cli::catalog::PlatformDefinition;
    ///
    /// let alpine = PlatformDefinition::new(
    ///     "alpine",
    ///     "alpine:3",
    ///     "apk add --no-cache {deps}",
    ///     ["cmake", "make"],
    ///     ["vips"],
    /// )?;
    /// assert_eq!(alpine.install_dev_command("g++"), "apk add --no-cache cmake make g++");
    /// # Ok::<(), dockgen_cli::core::DockgenError>(())
    /// ```
    pub fn new<D, R, S, T>(
        name: &str,
        base_image: &str,
        install_command: &str,
        dev_packages: D,
        runtime_packages: R,
    ) -> Result<Self, DockgenError>
    where
        D: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = T>,
        T: Into<String>,
    {
        validate_name("platform", name)?;
        let entry = format!("platform '{name}'");

        if base_image.trim().is_empty() {
            return Err(DockgenError::EmptyField {
                entry,
                field: "image".to_string(),
            });
        }
        if install_command.trim().is_empty() {
            return Err(DockgenError::EmptyField {
                entry,
                field: "install-command".to_string(),
            });
        }

        let install_command = InstallCommandShape::parse(name, install_command)?;
        let dev_packages = PackageList::new(dev_packages);
        let runtime_packages = PackageList::new(runtime_packages);
        validate_packages(&entry, &dev_packages)?;
        validate_packages(&entry, &runtime_packages)?;

        Ok(Self {
            name: name.to_string(),
            base_image: base_image.to_string(),
            install_command,
            dev_packages,
            runtime_packages,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn base_image(&self) -> &str {
        &self.base_image
    }

    #[must_use]
    pub const fn install_command(&self) -> &InstallCommandShape {
        &self.install_command
    }

    /// Build-time packages declared by the platform, without any compiler.
    #[must_use]
    pub const fn dev_packages(&self) -> &PackageList {
        &self.dev_packages
    }

    /// Run-time packages; never includes a compiler.
    #[must_use]
    pub const fn runtime_packages(&self) -> &PackageList {
        &self.runtime_packages
    }

    /// The build-stage package list for one compiler: a fresh copy of the
    /// declared dev packages with `compiler_package` last.
    #[must_use]
    pub fn effective_dev_packages(&self, compiler_package: &str) -> PackageList {
        self.dev_packages.with_appended(compiler_package)
    }

    /// The full build-stage install command for one compiler package.
    #[must_use]
    pub fn install_dev_command(&self, compiler_package: &str) -> String {
        self.install_command.render(&self.effective_dev_packages(compiler_package))
    }

    /// The full runtime-stage install command.
    #[must_use]
    pub fn install_runtime_command(&self) -> String {
        self.install_command.render(&self.runtime_packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debian() -> PlatformDefinition {
        PlatformDefinition::new(
            "debian",
            "debian:bookworm",
            "apt update && apt install {deps} --no-install-recommends -y  && rm -rf /var/lib/apt/lists/*",
            [
                "libvips-dev",
                "libmagic-dev",
                "libboost-dev",
                "cmake",
                "make",
                "git",
                "ca-certificates",
            ],
            ["libvips", "libmagic1"],
        )
        .unwrap()
    }

    #[test]
    fn test_install_dev_command_appends_compiler_last() {
        assert_eq!(
            debian().install_dev_command("g++"),
            "apt update && apt install libvips-dev libmagic-dev libboost-dev cmake make git ca-certificates g++ --no-install-recommends -y  && rm -rf /var/lib/apt/lists/*"
        );
    }

    #[test]
    fn test_install_runtime_command_has_no_compiler() {
        let command = debian().install_runtime_command();
        assert_eq!(
            command,
            "apt update && apt install libvips libmagic1 --no-install-recommends -y  && rm -rf /var/lib/apt/lists/*"
        );
        assert!(!command.split_whitespace().any(|token| token == "g++"));
    }

    #[test]
    fn test_effective_dev_packages_does_not_touch_platform() {
        let platform = debian();
        let before = platform.dev_packages().clone();

        let gcc = platform.effective_dev_packages("g++");
        let clang = platform.effective_dev_packages("clang");

        assert_eq!(platform.dev_packages(), &before);
        assert_eq!(gcc.len(), before.len() + 1);
        assert!(!clang.contains("g++"));
        assert_eq!(clang.as_slice().last().map(String::as_str), Some("clang"));
    }

    #[test]
    fn test_empty_image_rejected() {
        let err = PlatformDefinition::new("x", "  ", "pm {deps}", ["a"], ["b"]).unwrap_err();
        assert!(matches!(err, DockgenError::EmptyField { ref field, .. } if field == "image"));
    }

    #[test]
    fn test_empty_install_command_rejected() {
        let err = PlatformDefinition::new("x", "img", "", ["a"], ["b"]).unwrap_err();
        assert!(
            matches!(err, DockgenError::EmptyField { ref field, .. } if field == "install-command")
        );
    }

    #[test]
    fn test_package_with_space_rejected() {
        let err =
            PlatformDefinition::new("x", "img", "pm {deps}", ["good", "two words"], ["b"])
                .unwrap_err();
        assert!(
            matches!(err, DockgenError::InvalidPackage { ref package, .. } if package == "two words")
        );
    }

    #[test]
    fn test_bad_name_rejected() {
        let err = PlatformDefinition::new("../etc", "img", "pm {deps}", ["a"], ["b"]).unwrap_err();
        assert!(matches!(err, DockgenError::InvalidName { .. }));
    }
}
