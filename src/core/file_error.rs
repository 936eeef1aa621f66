//! Filesystem errors that remember what was being done, and to which path.
//!
//! A bare `No such file or directory` does not say whether the shared root, a
//! manifest or a copy target was missing. Wrapping the [`std::io::Error`] with
//! the operation, the path and a short purpose lets
//! [`user_friendly_error`](crate::core::user_friendly_error) print a useful
//! message.
//!
//! ```rust,no_run
//! use sls_deps::core::{FileOperation, FileResultExt};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), sls_deps::core::FileOperationError> {
//! let path = Path::new("hello/package.json");
//! let _manifest = std::fs::read_to_string(path)
//!     .with_file_context(FileOperation::Read, path, "loading function manifest")?;
//! # Ok(())
//! # }
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filesystem operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// Reading a file
    Read,
    /// Writing a file
    Write,
    /// Creating a directory
    CreateDir,
    /// Copying a file
    Copy,
    /// Removing a directory tree
    Remove,
    /// Listing a directory
    ReadDir,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            Self::Read => "reading",
            Self::Write => "writing",
            Self::CreateDir => "creating directory",
            Self::Copy => "copying",
            Self::Remove => "removing",
            Self::ReadDir => "listing directory",
        };
        f.write_str(verb)
    }
}

/// An I/O error annotated with operation, path and purpose.
#[derive(Error, Debug)]
#[error("Failed {operation} {} while {purpose}", file_path.display())]
pub struct FileOperationError {
    /// Operation that failed
    pub operation: FileOperation,
    /// Path being accessed
    pub file_path: PathBuf,
    /// What the command was doing, e.g. "installing 'utils'"
    pub purpose: String,
    /// Underlying error
    #[source]
    pub source: io::Error,
}

impl FileOperationError {
    /// Wrap `source` with its operation context.
    pub fn new(
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self {
            operation,
            file_path: file_path.into(),
            purpose: purpose.into(),
            source,
        }
    }

    /// Multi-line explanation for the `details:` line of the CLI error output.
    pub fn user_message(&self) -> String {
        let mut message = format!("{}: {}", self, self.source);

        match self.source.kind() {
            io::ErrorKind::NotFound => {
                message.push_str("\nThe path does not exist.");
                if is_manifest(&self.file_path) {
                    message.push_str("\nCreate the function's package.json (e.g. with 'npm init -y') first.");
                }
            }
            io::ErrorKind::PermissionDenied => {
                message.push_str(&format!(
                    "\nCheck the permissions of {}",
                    self.file_path.display()
                ));
            }
            io::ErrorKind::AlreadyExists => {
                message.push_str("\nMove or delete the existing entry and try again.");
            }
            io::ErrorKind::InvalidData => {
                message.push_str("\nThe file is not valid UTF-8 text.");
            }
            _ => {}
        }

        message
    }
}

fn is_manifest(path: &Path) -> bool {
    path.file_name().and_then(|s| s.to_str()) == Some("package.json")
}

/// Attach [`FileOperationError`] context to an `io::Result`.
pub trait FileResultExt<T> {
    /// Map the error into a [`FileOperationError`].
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError>;
}

impl<T> FileResultExt<T> for io::Result<T> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError> {
        self.map_err(|source| FileOperationError::new(operation, file_path, purpose, source))
    }
}
