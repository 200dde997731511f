//! Error handling for scriptseq
//!
//! This module provides the error type shared by the resolver, the manifest
//! loader and the renderer, plus user-friendly error reporting for the CLI.
//! The error system follows two principles:
//! 1. **Strongly-typed errors** for precise handling in library code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`ScriptseqError`] - Enumerated failure modes
//! - [`ErrorContext`] - Wrapper that adds details and a suggestion
//! - [`user_friendly_error`] - Converts any [`anyhow::Error`] into an [`ErrorContext`]
//!
//! # Error Categories
//!
//! - **Resolution**: [`ScriptseqError::MissingDependency`]
//! - **Input validation**: [`ScriptseqError::InvalidNameList`], [`ScriptseqError::InvalidFragment`]
//! - **Configuration**: [`ScriptseqError::ManifestNotFound`], [`ScriptseqError::ManifestParseError`],
//!   [`ScriptseqError::ConfigError`]
//! - **Rendering**: [`ScriptseqError::TemplateError`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use scriptseq::core::{ErrorContext, ScriptseqError};
//!
//! let error = ScriptseqError::MissingDependency {
//!     script: "app".to_string(),
//!     dependency: "jquery".to_string(),
//! };
//! let context = ErrorContext::new(error)
//!     .with_suggestion("Register a script named or aliased 'jquery'");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::constants::SUGGESTION_MAX_DISTANCE;

/// The main error type for scriptseq operations
///
/// Only [`MissingDependency`] crosses the resolver boundary, and only under
/// the `require-dependencies` policy. The remaining variants come from the
/// layers around the resolver: manifest loading, name-list parsing and
/// rendering.
///
/// [`MissingDependency`]: ScriptseqError::MissingDependency
#[derive(Error, Debug)]
pub enum ScriptseqError {
    /// A declared dependency is not exposed by any fragment in the set
    ///
    /// # Fields
    /// - `script`: Name of the fragment that declared the dependency
    /// - `dependency`: The dependency token that could not be located
    #[error("Script '{script}' depends on '{dependency}', which is not registered")]
    MissingDependency {
        /// Name of the dependent fragment
        script: String,
        /// The unresolved dependency token
        dependency: String,
    },

    /// A delimiter-separated name list contains characters outside the token
    /// and delimiter sets
    #[error("Invalid name list '{input}': {reason}")]
    InvalidNameList {
        /// The raw list as supplied
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// A fragment definition is incomplete or contradictory
    #[error("Invalid script '{name}': {reason}")]
    InvalidFragment {
        /// Name (or position) of the offending fragment
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Manifest file not found at the requested location
    #[error("Manifest file not found: {path}")]
    ManifestNotFound {
        /// Path that was looked up
        path: String,
    },

    /// Manifest parsing error
    #[error("Invalid manifest file syntax in {file}")]
    ManifestParseError {
        /// Path to the manifest file that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// A markup template failed to compile or render
    #[error("Template '{template}' failed: {reason}")]
    TemplateError {
        /// Logical template name (`inline` or `external`)
        template: String,
        /// Underlying tera message
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for ScriptseqError {
    fn clone(&self) -> Self {
        match self {
            Self::MissingDependency {
                script,
                dependency,
            } => Self::MissingDependency {
                script: script.clone(),
                dependency: dependency.clone(),
            },
            Self::InvalidNameList {
                input,
                reason,
            } => Self::InvalidNameList {
                input: input.clone(),
                reason: reason.clone(),
            },
            Self::InvalidFragment {
                name,
                reason,
            } => Self::InvalidFragment {
                name: name.clone(),
                reason: reason.clone(),
            },
            Self::ManifestNotFound {
                path,
            } => Self::ManifestNotFound {
                path: path.clone(),
            },
            Self::ManifestParseError {
                file,
                reason,
            } => Self::ManifestParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::TemplateError {
                template,
                reason,
            } => Self::TemplateError {
                template: template.clone(),
                reason: reason.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            // io::Error and toml errors are not Clone
            Self::IoError(e) => Self::IoError(std::io::Error::new(e.kind(), e.to_string())),
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context in yellow (optional)
/// 3. **Suggestion**: Actionable steps in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use scriptseq::core::{ErrorContext, ScriptseqError};
///
/// let context = ErrorContext::new(ScriptseqError::ManifestNotFound {
///     path: "scriptseq.toml".to_string(),
/// })
/// .with_suggestion("Create a scriptseq.toml file or pass --manifest-path");
///
/// println!("{}", context);
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ScriptseqError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ScriptseqError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
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

/// Extension trait for converting [`ScriptseqError`] to [`anyhow::Error`] with context
///
/// # Examples
///
/// ```rust,no_run
/// use scriptseq::core::{ErrorContext, IntoAnyhowWithContext, ScriptseqError};
///
/// let error = ScriptseqError::MissingDependency {
///     script: "app".to_string(),
///     dependency: "jqeury".to_string(),
/// };
/// let context = ErrorContext::new(error.clone()).with_suggestion("Did you mean 'jquery'?");
/// let anyhow_error = error.into_anyhow_with_context(context);
/// ```
pub trait IntoAnyhowWithContext {
    /// Convert the error to an [`anyhow::Error`] with the provided context
    fn into_anyhow_with_context(self, context: ErrorContext) -> anyhow::Error;
}

impl IntoAnyhowWithContext for ScriptseqError {
    fn into_anyhow_with_context(self, context: ErrorContext) -> anyhow::Error {
        anyhow::Error::new(ErrorContext {
            error: self,
            suggestion: context.suggestion,
            details: context.details,
        })
    }
}

/// Find the registered name closest to `target`, for "did you mean" hints.
///
/// Returns `None` when nothing is within [`SUGGESTION_MAX_DISTANCE`] edits or
/// when the only candidates are exact matches.
pub fn closest_name<'a, I>(target: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|candidate| (candidate, strsim::levenshtein(target, candidate)))
        .filter(|(_, distance)| *distance > 0 && *distance <= SUGGESTION_MAX_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes, in order: an [`ErrorContext`] already attached by the caller,
/// [`ScriptseqError`] variants, [`std::io::Error`] and [`toml::de::Error`].
/// Anything else is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(context) = error.downcast_ref::<ErrorContext>() {
        return ErrorContext {
            error: context.error.clone(),
            suggestion: context.suggestion.clone(),
            details: context.details.clone(),
        };
    }

    if let Some(scriptseq_error) = error.downcast_ref::<ScriptseqError>() {
        return create_error_context(scriptseq_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(ScriptseqError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion("Check file ownership and read permissions");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(ScriptseqError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(ScriptseqError::ManifestParseError {
            file: "scriptseq.toml".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in your manifest. Verify quotes, brackets, and table headers");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(ScriptseqError::Other {
        message,
    })
}

/// Map each [`ScriptseqError`] variant to a context with tailored suggestions.
fn create_error_context(error: ScriptseqError) -> ErrorContext {
    match &error {
        ScriptseqError::MissingDependency {
            dependency,
            ..
        } => {
            let suggestion = format!(
                "Register a script named or aliased '{dependency}', or resolve with --policy skip-problems to drop scripts with unmet dependencies"
            );
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("The require-dependencies policy aborts on the first dependency that no registered script exposes")
        }
        ScriptseqError::InvalidNameList {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Separate names with spaces, tabs, commas, pipes or semicolons")
            .with_details("Names may not contain whitespace, quotes or angle brackets"),
        ScriptseqError::InvalidFragment {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Give every [[scripts]] entry a 'name' or a 'src'"),
        ScriptseqError::ManifestNotFound {
            ..
        } => ErrorContext::new(error).with_suggestion(
            "Create a scriptseq.toml file, pass --manifest-path, or set SCRIPTSEQ_MANIFEST",
        ),
        ScriptseqError::ManifestParseError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check the TOML syntax in your manifest")
                .with_details(details)
        }
        ScriptseqError::TemplateError {
            ..
        } => ErrorContext::new(error).with_suggestion(
            "Check the inline_template / external_template settings. Variables use {{ var }}",
        ),
        _ => ErrorContext::new(error),
    }
}
