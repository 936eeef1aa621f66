//! Error handling for sls-deps
//!
//! This module provides the error types and user-facing error reporting for the
//! shared dependency tool. The error system follows two principles:
//! 1. **Strongly-typed errors** so commands and tests can match on failure modes
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`SlsDepsError`] - Enumerated error types for every failure case
//! - [`ErrorContext`] - Wrapper that adds details and a suggestion for display
//!
//! # Error Categories
//!
//! - **Validation**: [`SlsDepsError::InvalidDependencyName`], [`SlsDepsError::NameRequired`],
//!   [`SlsDepsError::UnknownFunction`]
//! - **Project**: [`SlsDepsError::ProjectNotFound`], [`SlsDepsError::ConfigError`]
//! - **Manifests**: [`SlsDepsError::ManifestParseError`], [`SlsDepsError::ManifestInvalid`],
//!   [`SlsDepsError::AttachFailed`]
//! - **Installation**: [`SlsDepsError::SharedRootMissing`],
//!   [`SlsDepsError::SharedDependencyNotFound`], [`SlsDepsError::InstallFailed`]
//! - **Prompting**: [`SlsDepsError::PromptCancelled`], [`SlsDepsError::PromptFailed`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use sls_deps::core::{SlsDepsError, user_friendly_error};
//!
//! let error = SlsDepsError::NameRequired;
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Prints a colored error with a suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::core::file_error::FileOperationError;

/// The main error type for sls-deps operations.
///
/// Each variant carries the context (names, paths, counts) needed to explain
/// the failure without consulting logs.
#[derive(Error, Debug, Clone)]
pub enum SlsDepsError {
    /// Dependency name failed validation
    #[error(
        "Invalid dependency name '{name}': {reason}. Names must be 1-20 characters of letters, digits, '-' or '_'"
    )]
    InvalidDependencyName {
        /// The rejected name
        name: String,
        /// Which part of the naming rule was violated
        reason: String,
    },

    /// No name was supplied and prompting is not possible
    #[error("A dependency name is required when running non-interactively")]
    NameRequired,

    /// A function selected on the command line does not exist in the project
    #[error("Function '{name}' not found in project")]
    UnknownFunction {
        /// Requested function name
        name: String,
        /// Functions that do exist
        available: Vec<String>,
    },

    /// No project root could be located
    #[error("No serverless project found in {start} or any parent directory")]
    ProjectNotFound {
        /// Directory the search started from
        start: String,
    },

    /// Configuration file or flag problem
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// A manifest could not be parsed as JSON
    #[error("Invalid manifest syntax in {file}")]
    ManifestParseError {
        /// Manifest path
        file: String,
        /// Parser message
        reason: String,
    },

    /// A manifest parsed but has an unexpected shape
    #[error("Invalid manifest {file}: {reason}")]
    ManifestInvalid {
        /// Manifest path
        file: String,
        /// Structural problem
        reason: String,
    },

    /// One or more manifests could not be updated during attach
    #[error("Failed to attach '{dependency}' to {failed} of {total} function(s)")]
    AttachFailed {
        /// Dependency being attached
        dependency: String,
        /// Number of functions that failed
        failed: usize,
        /// Number of functions selected
        total: usize,
    },

    /// The shared root directory does not exist
    #[error("Shared dependency directory not found: {path}")]
    SharedRootMissing {
        /// Expected shared root
        path: String,
    },

    /// A function declares a shared dependency that is not in the shared root
    #[error("Shared dependency '{name}' not found at {path}")]
    SharedDependencyNotFound {
        /// Dependency name
        name: String,
        /// Expected location
        path: String,
    },

    /// The dependency installer reported a failure
    #[error("Dependency installation failed: {reason}")]
    InstallFailed {
        /// Installer-provided reason
        reason: String,
    },

    /// The operator dismissed an interactive prompt
    #[error("Prompt cancelled by user")]
    PromptCancelled,

    /// The interactive prompt could not be shown
    #[error("Prompt failed: {reason}")]
    PromptFailed {
        /// Underlying prompt error
        reason: String,
    },

    /// File system operation failed
    #[error("File system error: {operation} {path}")]
    FileSystemError {
        /// Operation being performed
        operation: String,
        /// Path involved
        path: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error context wrapper that provides user-friendly error information.
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context in yellow (optional)
/// 3. **Suggestion**: Actionable next step in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use sls_deps::core::{ErrorContext, SlsDepsError};
///
/// let context = ErrorContext::new(SlsDepsError::NameRequired)
///     .with_suggestion("Pass --name <NAME>")
///     .with_details("Prompting is disabled in non-interactive mode");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SlsDepsError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: SlsDepsError) -> Self {
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

    /// Display the error context to stderr with terminal colors.
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
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

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions.
///
/// Recognizes, in order:
/// - [`SlsDepsError`] anywhere in the chain, with tailored suggestions
/// - [`FileOperationError`] with the operation and path that failed
/// - [`std::io::Error`] with filesystem-specific guidance
/// - Anything else, keeping the full `anyhow` context chain as the message
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(sls_error) = cause.downcast_ref::<SlsDepsError>() {
            return create_error_context(sls_error.clone());
        }
    }

    for cause in error.chain() {
        if let Some(file_error) = cause.downcast_ref::<FileOperationError>() {
            return ErrorContext::new(SlsDepsError::FileSystemError {
                operation: file_error.operation.to_string(),
                path: file_error.file_path.display().to_string(),
            })
            .with_details(file_error.user_message());
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(SlsDepsError::Other {
                    message: format!("{error:#}"),
                })
                .with_suggestion("Check file ownership and permissions in the project directory");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(SlsDepsError::Other {
                    message: format!("{error:#}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    ErrorContext::new(SlsDepsError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: SlsDepsError) -> ErrorContext {
    match &error {
        SlsDepsError::InvalidDependencyName { .. } => ErrorContext::new(error)
            .with_suggestion("Choose a name like 'utils', 'db-client' or 'auth_helpers'"),

        SlsDepsError::NameRequired => ErrorContext::new(error)
            .with_suggestion("Pass the name with --name <NAME>")
            .with_details("Prompting is disabled because --non-interactive was given or stdin is not a terminal"),

        SlsDepsError::UnknownFunction { available, .. } => {
            let details = if available.is_empty() {
                "The project does not contain any functions".to_string()
            } else {
                format!("Available functions: {}", available.join(", "))
            };
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Check the spelling of --function values")
        }

        SlsDepsError::ProjectNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Run the command inside a serverless project or pass --project-root <DIR>")
            .with_details(
                "A project root contains one of: sls-deps.toml, s-project.json, serverless.yml, serverless.yaml",
            ),

        SlsDepsError::ConfigError { .. } => ErrorContext::new(error)
            .with_suggestion("Check sls-deps.toml at the project root"),

        SlsDepsError::ManifestParseError {
            file,
            reason,
        } => {
            let details = format!("{file}: {reason}");
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Fix the JSON syntax in the manifest and try again")
        }

        SlsDepsError::AttachFailed { .. } => ErrorContext::new(error)
            .with_details("Manifests listed above were left untouched; the others were updated")
            .with_suggestion("Fix the reported manifests and run attach again"),

        SlsDepsError::SharedRootMissing { .. } => ErrorContext::new(error)
            .with_suggestion("Create a shared dependency first with 'sls-deps create --name <NAME>'"),

        SlsDepsError::SharedDependencyNotFound { name, .. } => {
            let suggestion = format!("Run 'sls-deps create --name {name}' or remove it from customDependencies");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        SlsDepsError::PromptCancelled => {
            ErrorContext::new(error).with_details("No changes were made")
        }

        SlsDepsError::PromptFailed { .. } => ErrorContext::new(error)
            .with_suggestion("Use --non-interactive together with --name and --function"),

        _ => ErrorContext::new(error),
    }
}
