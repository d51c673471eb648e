//! dockgen - Dockerfile matrix generator for asset-server
//!
//! dockgen takes a catalog of base platforms (image, package-manager command,
//! build and runtime packages) and a catalog of C++ compilers, and writes one
//! two-stage Dockerfile per (platform, compiler) pair:
//!
//! ```text
//! Dockerfile.debian-gcc   Dockerfile.debian-clang
//! Dockerfile.alpine-gcc   Dockerfile.alpine-clang
//! Dockerfile.fedora-gcc   Dockerfile.fedora-clang
//! ```
//!
//! The build stage installs the platform's development packages followed by
//! the compiler package. The runtime stage installs only the runtime packages.
//!
//! # Core Modules
//!
//! - [`catalog`] - Validated platform and compiler definitions
//! - [`manifest`] - `dockgen.toml` parsing and the built-in catalog
//! - [`templating`] - The recipe template and its Tera renderer
//! - [`matrix`] - Matrix expansion, change detection and atomic output
//! - [`cli`] - Command-line interface
//! - [`core`] - Error types and user-facing error formatting
//! - [`utils`] - File system helpers
//!
//! # Manifest Format (dockgen.toml)
//!
//! ```toml
//! [generator]
//! output-dir = "docker"
//!
//! [[platforms]]
//! name = "debian"
//! image = "debian:bookworm"
//! install-command = "apt update && apt install {deps} --no-install-recommends -y  && rm -rf /var/lib/apt/lists/*"
//! dev-deps = ["libvips-dev", "libmagic-dev", "libboost-dev", "cmake", "make", "git", "ca-certificates"]
//! runtime-deps = ["libvips", "libmagic1"]
//!
//! [[compilers]]
//! name = "gcc"
//! package = "g++"
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Write every recipe (same as `dockgen generate`)
//! dockgen
//!
//! # Verify committed recipes in CI
//! dockgen generate --check
//!
//! # Start a manifest from the built-in catalog
//! dockgen init
//! ```

pub mod catalog;
pub mod cli;
pub mod core;
pub mod manifest;
pub mod matrix;
pub mod templating;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
