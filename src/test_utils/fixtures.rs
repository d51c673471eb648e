//! Test fixtures for manifests and catalogs.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, CompilerDefinition, PlatformDefinition};
use crate::manifest::MANIFEST_FILE;

/// Test fixture for creating sample dockgen.toml files
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub content: String,
    pub name: String,
}

impl ManifestFixture {
    /// Two platforms, two compilers, output into `out/`
    pub fn basic() -> Self {
        Self {
            name: "basic".to_string(),
            content: r#"
[generator]
output-dir = "out"

[[platforms]]
name = "debian"
image = "debian:bookworm"
install-command = "apt update && apt install {deps} --no-install-recommends -y  && rm -rf /var/lib/apt/lists/*"
dev-deps = ["libvips-dev", "cmake"]
runtime-deps = ["libvips", "libmagic1"]

[[platforms]]
name = "alpine"
image = "alpine:3"
install-command = "apk add --no-cache {deps}"
dev-deps = ["vips-dev", "cmake"]
runtime-deps = ["vips"]

[[compilers]]
name = "gcc"
package = "g++"

[[compilers]]
name = "clang"
package = "clang"
"#
            .trim()
            .to_string(),
        }
    }

    /// Manifest with broken TOML syntax
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: r#"
[[platforms]
name = "debian"
"#
            .trim()
            .to_string(),
        }
    }

    /// Install command without the `{deps}` placeholder
    pub fn missing_placeholder() -> Self {
        Self {
            name: "missing_placeholder".to_string(),
            content: r#"
[[platforms]]
name = "alpine"
image = "alpine:3"
install-command = "apk add --no-cache"

[[compilers]]
name = "gcc"
package = "g++"
"#
            .trim()
            .to_string(),
        }
    }

    /// Platforms but no compilers
    pub fn no_compilers() -> Self {
        Self {
            name: "no_compilers".to_string(),
            content: r#"
[[platforms]]
name = "alpine"
image = "alpine:3"
install-command = "apk add --no-cache {deps}"
"#
            .trim()
            .to_string(),
        }
    }

    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let manifest_path = dir.join(MANIFEST_FILE);
        fs::write(&manifest_path, &self.content)?;
        Ok(manifest_path)
    }
}

/// A small valid catalog: alpine × (gcc, clang).
///
/// # Panics
///
/// Never, the entries are valid.
#[must_use]
pub fn sample_catalog() -> Catalog {
    let platform = PlatformDefinition::new(
        "alpine",
        "alpine:3",
        "apk add --no-cache {deps}",
        ["cmake", "make"],
        ["vips"],
    )
    .expect("valid platform");
    let compilers = vec![
        CompilerDefinition::new("gcc", "g++").expect("valid compiler"),
        CompilerDefinition::new("clang", "clang").expect("valid compiler"),
    ];
    Catalog::new(vec![platform], compilers).expect("valid catalog")
}
