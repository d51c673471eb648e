//! One rendered matrix cell.

use serde::Serialize;

use crate::catalog::{self, CompilerDefinition, PackageList, PlatformDefinition};
use crate::core::DockgenError;
use crate::templating::{RecipeContext, RecipeRenderer};

/// The fully rendered recipe for one (platform, compiler) pair.
///
/// Derived on demand and never stored back into the catalog. The rendered
/// text always ends with a newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveRecipe {
    pub platform: String,
    pub compiler: String,
    /// Platform dev packages followed by the compiler package
    pub effective_dev_packages: PackageList,
    /// `Dockerfile.<platform>-<compiler>`
    pub output_name: String,
    #[serde(skip)]
    pub rendered_text: String,
}

impl EffectiveRecipe {
    /// Render the recipe for `platform` built with `compiler`.
    ///
    /// # Errors
    ///
    /// Returns [`DockgenError::TemplateError`] if rendering fails.
    pub fn render(
        platform: &PlatformDefinition,
        compiler: &CompilerDefinition,
        renderer: &RecipeRenderer,
    ) -> Result<Self, DockgenError> {
        let effective_dev_packages = platform.effective_dev_packages(compiler.package_name());

        let context = RecipeContext {
            image: platform.base_image(),
            install_dev: platform.install_command().render(&effective_dev_packages),
            install_runtime: platform.install_runtime_command(),
        };

        let mut rendered_text = renderer.render(&context, platform.name(), compiler.name())?;
        if !rendered_text.ends_with('\n') {
            rendered_text.push('\n');
        }

        Ok(Self {
            platform: platform.name().to_string(),
            compiler: compiler.name().to_string(),
            effective_dev_packages,
            output_name: catalog::output_name(platform, compiler),
            rendered_text,
        })
    }
}
