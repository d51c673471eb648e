//! Error handling for dockgen
//!
//! This module provides the error taxonomy used by the catalog, template and
//! matrix layers, plus the user-facing [`ErrorContext`] that the CLI prints.
//!
//! # Error Categories
//!
//! - **Configuration errors**: a catalog entry is malformed (missing `{deps}`
//!   placeholder, empty field, duplicate name, colliding output name). These are
//!   static-data defects and always abort the run before anything is written.
//! - **Manifest errors**: `dockgen.toml` cannot be found or parsed.
//! - **Selection errors**: a `--platform`/`--compiler` filter names an entry
//!   that is not in the catalog.
//! - **Template errors**: the recipe template references a value the renderer
//!   did not supply. This is a programming error, not a user error.
//! - **Write errors**: an output file cannot be created or renamed into place.
//!   Reported per artifact.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dockgen_cli::core::{DockgenError, user_friendly_error};
//!
//! let error = DockgenError::DuplicatePlatform {
//!     name: "debian".to_string(),
//! };
//! let context = user_friendly_error(error.into());
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for dockgen operations
///
/// Each variant carries enough context (platform name, compiler name, failing
/// step) to diagnose the problem without re-running the whole matrix.
#[derive(Error, Debug)]
pub enum DockgenError {
    /// A platform's install command has no `{deps}` substitution point
    #[error("Install command for platform '{platform}' has no {{deps}} placeholder: {shape}")]
    MissingPlaceholder {
        /// Platform whose install command is malformed
        platform: String,
        /// The offending install command
        shape: String,
    },

    /// A platform's install command has more than one `{deps}` substitution point
    #[error(
        "Install command for platform '{platform}' has {count} {{deps}} placeholders, expected exactly one"
    )]
    MultiplePlaceholders {
        /// Platform whose install command is malformed
        platform: String,
        /// Number of placeholders found
        count: usize,
    },

    /// A required catalog field is empty
    #[error("Field '{field}' of {entry} must not be empty")]
    EmptyField {
        /// Catalog entry description, e.g. `platform 'debian'`
        entry: String,
        /// Field name as written in `dockgen.toml`
        field: String,
    },

    /// A platform or compiler name cannot be used in an output file name
    #[error("Invalid {kind} name '{name}': {reason}")]
    InvalidName {
        /// `platform` or `compiler`
        kind: String,
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A package name is empty or contains whitespace
    #[error("Invalid package name '{package}' in {entry}")]
    InvalidPackage {
        /// Catalog entry description
        entry: String,
        /// The rejected package name
        package: String,
    },

    /// Two platforms share a name
    #[error("Platform '{name}' is defined more than once")]
    DuplicatePlatform {
        /// The duplicated name
        name: String,
    },

    /// Two compilers share a name
    #[error("Compiler '{name}' is defined more than once")]
    DuplicateCompiler {
        /// The duplicated name
        name: String,
    },

    /// Two different matrix cells would write the same file
    #[error("Output '{output}' would be produced by both {first} and {second}")]
    OutputNameCollision {
        /// The colliding output file name
        output: String,
        /// First `platform/compiler` pair
        first: String,
        /// Second `platform/compiler` pair
        second: String,
    },

    /// A compiler package is listed as a runtime dependency of a platform
    #[error("Runtime dependencies of platform '{platform}' include compiler package '{package}'")]
    CompilerInRuntime {
        /// Platform whose runtime list is wrong
        platform: String,
        /// The compiler package found there
        package: String,
    },

    /// No manifest could be located
    #[error("Manifest file dockgen.toml not found in current directory or any parent directory")]
    ManifestNotFound,

    /// The manifest could not be parsed
    #[error("Invalid manifest file syntax in {file}")]
    ManifestParseError {
        /// Manifest path
        file: String,
        /// Parser message
        reason: String,
    },

    /// A `--platform` filter does not match any platform
    #[error("Platform '{name}' is not in the catalog")]
    UnknownPlatform {
        /// Requested name
        name: String,
        /// Close matches from the catalog
        suggestions: Vec<String>,
    },

    /// A `--compiler` filter does not match any compiler
    #[error("Compiler '{name}' is not in the catalog")]
    UnknownCompiler {
        /// Requested name
        name: String,
        /// Close matches from the catalog
        suggestions: Vec<String>,
    },

    /// The recipe template itself does not parse
    #[error("Invalid recipe template: {message}")]
    TemplateSyntax {
        /// Parser message
        message: String,
    },

    /// The recipe template could not be rendered
    #[error("Failed to render recipe for {platform}/{compiler}: {message}")]
    TemplateError {
        /// Platform being rendered
        platform: String,
        /// Compiler being rendered
        compiler: String,
        /// Renderer message
        message: String,
    },

    /// One recipe could not be written
    #[error("Failed to write recipe for {platform}/{compiler} to {path}: {reason}")]
    WriteFailed {
        /// Platform of the failed artifact
        platform: String,
        /// Compiler of the failed artifact
        compiler: String,
        /// Target path
        path: String,
        /// Underlying I/O message
        reason: String,
    },

    /// Some recipes could not be written; the others were
    #[error("Failed to write {failed} of {total} recipes")]
    GenerationFailed {
        /// Number of failed artifacts
        failed: usize,
        /// Number of attempted artifacts
        total: usize,
        /// One line per failure
        details: Vec<String>,
    },

    /// `--check` found missing or stale recipes
    #[error("{} recipe(s) are missing or out of date", .stale.len())]
    RecipesOutOfDate {
        /// Output names that differ from what would be generated
        stale: Vec<String>,
    },

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl DockgenError {
    /// Whether this error describes a defect in the catalog data.
    ///
    /// Configuration errors are never transient, so callers abort instead of
    /// retrying or skipping the affected pair.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingPlaceholder { .. }
                | Self::MultiplePlaceholders { .. }
                | Self::EmptyField { .. }
                | Self::InvalidName { .. }
                | Self::InvalidPackage { .. }
                | Self::DuplicatePlatform { .. }
                | Self::DuplicateCompiler { .. }
                | Self::OutputNameCollision { .. }
                | Self::CompilerInRuntime { .. }
        )
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`DockgenError`] and adds an optional suggestion and
/// details. This is how the CLI presents errors.
///
/// # Display Format
///
/// 1. **Error**: the main message in red
/// 2. **Details**: additional context in yellow (optional)
/// 3. **Suggestion**: actionable steps in green (optional)
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DockgenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: DockgenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`DockgenError`] anywhere in the `anyhow` chain, then a
/// permission-denied [`std::io::Error`]. Anything else is reported with its
/// full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(dockgen_error) = cause.downcast_ref::<DockgenError>() {
            let context = create_error_context(dockgen_error);
            // Keep outer anyhow context (e.g. "while loading dockgen.toml")
            if error.chain().count() > 1 && context.details.is_none() {
                return context.with_details(error.to_string());
            }
            return context;
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        if io_error.kind() == std::io::ErrorKind::PermissionDenied {
            return ErrorContext::new(DockgenError::Other {
                message: error.to_string(),
            })
            .with_suggestion("Check write permissions on the output directory");
        }
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(DockgenError::Other {
        message,
    })
}

/// Map each [`DockgenError`] to a context with a tailored suggestion.
fn create_error_context(error: &DockgenError) -> ErrorContext {
    let rebuilt = clone_error(error);
    match error {
        DockgenError::MissingPlaceholder { .. } | DockgenError::MultiplePlaceholders { .. } => {
            ErrorContext::new(rebuilt)
                .with_suggestion("Write the install command with exactly one {deps} placeholder, e.g. \"apk add --no-cache {deps}\"")
        }
        DockgenError::EmptyField { .. } | DockgenError::InvalidPackage { .. } => {
            ErrorContext::new(rebuilt)
                .with_suggestion("Fill in the field in dockgen.toml; package names cannot contain spaces")
        }
        DockgenError::InvalidName { .. } => ErrorContext::new(rebuilt)
            .with_suggestion("Use only letters, digits, '.', '_' and '-' in platform and compiler names"),
        DockgenError::DuplicatePlatform { .. } | DockgenError::DuplicateCompiler { .. } => {
            ErrorContext::new(rebuilt)
                .with_details("Output files are named after platform and compiler, so duplicate names would overwrite each other")
                .with_suggestion("Rename or remove one of the duplicate entries")
        }
        DockgenError::OutputNameCollision { .. } => ErrorContext::new(rebuilt)
            .with_details("Output names join platform and compiler with '-', so names containing '-' can collide")
            .with_suggestion("Rename one of the platforms or compilers"),
        DockgenError::CompilerInRuntime { .. } => ErrorContext::new(rebuilt)
            .with_suggestion("Remove the compiler package from runtime-deps; compilers are only installed in the build stage"),
        DockgenError::ManifestNotFound => ErrorContext::new(rebuilt)
            .with_suggestion("Run 'dockgen init' to create a dockgen.toml, or pass --manifest-path"),
        DockgenError::ManifestParseError { reason, .. } => {
            let details = reason.clone();
            ErrorContext::new(rebuilt)
                .with_details(details)
                .with_suggestion("Check the TOML syntax and field names in dockgen.toml")
        }
        DockgenError::UnknownPlatform { suggestions, .. }
        | DockgenError::UnknownCompiler { suggestions, .. } => {
            let context = ErrorContext::new(rebuilt);
            if suggestions.is_empty() {
                context.with_suggestion("Run 'dockgen list' to see the available entries")
            } else {
                context.with_suggestion(format!("Did you mean: {}?", suggestions.join(", ")))
            }
        }
        DockgenError::TemplateError { .. } => ErrorContext::new(rebuilt)
            .with_details("The recipe template referenced a value that was not supplied"),
        DockgenError::TemplateSyntax { .. } => ErrorContext::new(rebuilt)
            .with_details("The recipe template must be valid Tera syntax"),
        DockgenError::GenerationFailed { details, .. } => {
            let joined = details.join("\n  ");
            ErrorContext::new(rebuilt)
                .with_details(format!("\n  {joined}"))
                .with_suggestion("Check write permissions and free space in the output directory")
        }
        DockgenError::RecipesOutOfDate { stale } => {
            let joined = stale.join(", ");
            ErrorContext::new(rebuilt)
                .with_details(joined)
                .with_suggestion("Run 'dockgen generate' to regenerate the recipes")
        }
        DockgenError::WriteFailed { .. } => ErrorContext::new(rebuilt)
            .with_suggestion("Check write permissions and free space in the output directory"),
        _ => ErrorContext::new(rebuilt),
    }
}

/// Rebuild an error from a borrowed one.
///
/// The wrapped `toml` serializer error does not implement `Clone`, so it is
/// flattened to [`DockgenError::Other`].
fn clone_error(error: &DockgenError) -> DockgenError {
    match error {
        DockgenError::MissingPlaceholder {
            platform,
            shape,
        } => DockgenError::MissingPlaceholder {
            platform: platform.clone(),
            shape: shape.clone(),
        },
        DockgenError::MultiplePlaceholders {
            platform,
            count,
        } => DockgenError::MultiplePlaceholders {
            platform: platform.clone(),
            count: *count,
        },
        DockgenError::EmptyField {
            entry,
            field,
        } => DockgenError::EmptyField {
            entry: entry.clone(),
            field: field.clone(),
        },
        DockgenError::InvalidName {
            kind,
            name,
            reason,
        } => DockgenError::InvalidName {
            kind: kind.clone(),
            name: name.clone(),
            reason: reason.clone(),
        },
        DockgenError::InvalidPackage {
            entry,
            package,
        } => DockgenError::InvalidPackage {
            entry: entry.clone(),
            package: package.clone(),
        },
        DockgenError::DuplicatePlatform {
            name,
        } => DockgenError::DuplicatePlatform {
            name: name.clone(),
        },
        DockgenError::DuplicateCompiler {
            name,
        } => DockgenError::DuplicateCompiler {
            name: name.clone(),
        },
        DockgenError::OutputNameCollision {
            output,
            first,
            second,
        } => DockgenError::OutputNameCollision {
            output: output.clone(),
            first: first.clone(),
            second: second.clone(),
        },
        DockgenError::CompilerInRuntime {
            platform,
            package,
        } => DockgenError::CompilerInRuntime {
            platform: platform.clone(),
            package: package.clone(),
        },
        DockgenError::ManifestNotFound => DockgenError::ManifestNotFound,
        DockgenError::ManifestParseError {
            file,
            reason,
        } => DockgenError::ManifestParseError {
            file: file.clone(),
            reason: reason.clone(),
        },
        DockgenError::UnknownPlatform {
            name,
            suggestions,
        } => DockgenError::UnknownPlatform {
            name: name.clone(),
            suggestions: suggestions.clone(),
        },
        DockgenError::UnknownCompiler {
            name,
            suggestions,
        } => DockgenError::UnknownCompiler {
            name: name.clone(),
            suggestions: suggestions.clone(),
        },
        DockgenError::TemplateSyntax {
            message,
        } => DockgenError::TemplateSyntax {
            message: message.clone(),
        },
        DockgenError::TemplateError {
            platform,
            compiler,
            message,
        } => DockgenError::TemplateError {
            platform: platform.clone(),
            compiler: compiler.clone(),
            message: message.clone(),
        },
        DockgenError::WriteFailed {
            platform,
            compiler,
            path,
            reason,
        } => DockgenError::WriteFailed {
            platform: platform.clone(),
            compiler: compiler.clone(),
            path: path.clone(),
            reason: reason.clone(),
        },
        DockgenError::GenerationFailed {
            failed,
            total,
            details,
        } => DockgenError::GenerationFailed {
            failed: *failed,
            total: *total,
            details: details.clone(),
        },
        DockgenError::RecipesOutOfDate {
            stale,
        } => DockgenError::RecipesOutOfDate {
            stale: stale.clone(),
        },
        DockgenError::TomlSerError(e) => DockgenError::Other {
            message: format!("TOML serialization error: {e}"),
        },
        DockgenError::Other {
            message,
        } => DockgenError::Other {
            message: message.clone(),
        },
    }
}
