//! The built-in catalog used when no `dockgen.toml` exists.

use super::{CompilerEntry, Manifest, PlatformEntry};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Manifest {
    /// The default asset-server catalog: debian, alpine and fedora crossed
    /// with gcc and clang.
    #[must_use]
    pub fn builtin() -> Self {
        let platforms = vec![
            PlatformEntry {
                name: "debian".to_string(),
                image: "debian:bookworm".to_string(),
                // The double space before "&&" is part of the shape
                install_command: "apt update && apt install {deps} --no-install-recommends -y  && rm -rf /var/lib/apt/lists/*".to_string(),
                dev_deps: strings(&[
                    "libvips-dev",
                    "libmagic-dev",
                    "libboost-dev",
                    "cmake",
                    "make",
                    "git",
                    "ca-certificates",
                ]),
                runtime_deps: strings(&["libvips", "libmagic1"]),
            },
            PlatformEntry {
                name: "alpine".to_string(),
                image: "alpine:3".to_string(),
                install_command: "apk add --no-cache {deps}".to_string(),
                dev_deps: strings(&[
                    "openssl-dev",
                    "vips-dev",
                    "boost-dev",
                    "file-dev",
                    "cmake",
                    "make",
                    "git",
                ]),
                runtime_deps: strings(&["vips", "openssl", "libmagic"]),
            },
            PlatformEntry {
                name: "fedora".to_string(),
                image: "fedora:41".to_string(),
                install_command:
                    "dnf install --setopt=install_weak_deps=False -y {deps} && dnf clean all"
                        .to_string(),
                dev_deps: strings(&[
                    "openssl-devel",
                    "vips-devel",
                    "boost-devel",
                    "file-devel",
                    "cmake",
                    "make",
                    "git",
                ]),
                runtime_deps: strings(&["vips", "openssl"]),
            },
        ];

        let compilers = vec![
            CompilerEntry {
                name: "gcc".to_string(),
                package: "g++".to_string(),
            },
            CompilerEntry {
                name: "clang".to_string(),
                package: "clang".to_string(),
            },
        ];

        Self {
            generator: None,
            platforms,
            compilers,
            manifest_dir: None,
        }
    }
}
