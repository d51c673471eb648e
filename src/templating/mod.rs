//! Recipe template and substitution record
//!
//! The recipe body is one static two-stage Dockerfile. Only three values vary
//! between matrix cells and they are supplied as a typed record,
//! [`RecipeContext`], rather than as loose key/value pairs:
//!
//! | Placeholder | Value |
//! |---|---|
//! | `{{ image }}` | platform base image |
//! | `{{ install_dev }}` | build-stage install command (dev packages + compiler) |
//! | `{{ install_runtime }}` | runtime-stage install command |
//!
//! Substitution is literal: no escaping is applied and the template contains
//! no control flow.

pub mod renderer;

pub use renderer::RecipeRenderer;

use serde::Serialize;
use std::borrow::Cow;

/// Name written into the header comment of every recipe.
pub const GENERATOR_NAME: &str = "dockgen";

/// Name of the binary the recipes build and run.
pub const ENTRYPOINT_BINARY: &str = "asset-server";

/// The recipe body shared by every (platform, compiler) pair.
pub const RECIPE_TEMPLATE: &str = r#"### Do not modify manually, generated by dockgen ###
FROM {{ image }} AS builder

RUN {{ install_dev }}

WORKDIR /app
COPY CMakeLists.txt .
COPY src src

WORKDIR /app/build
RUN cmake -DCMAKE_BUILD_TYPE=Release .. && make -j

FROM {{ image }}

RUN {{ install_runtime }}


WORKDIR /app
COPY --from=builder /app/build/asset-server .

ENTRYPOINT [ "./asset-server" ]
"#;

/// The values substituted into the recipe template for one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeContext<'a> {
    /// Platform base image, used for both stages
    pub image: &'a str,
    /// Fully-formed build-stage install command
    pub install_dev: String,
    /// Fully-formed runtime-stage install command
    pub install_runtime: String,
}

/// A recipe template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeTemplate {
    source: Cow<'static, str>,
}

impl RecipeTemplate {
    /// The built-in two-stage recipe.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            source: Cow::Borrowed(RECIPE_TEMPLATE),
        }
    }

    /// A template from arbitrary source text.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: Cow::Owned(source.into()),
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Default for RecipeTemplate {
    fn default() -> Self {
        Self::builtin()
    }
}
