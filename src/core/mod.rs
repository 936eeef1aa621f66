//! Core types for sls-deps
//!
//! This module holds the types every command depends on:
//!
//! ## Error Management
//! - [`SlsDepsError`] - Enumerated error types covering all failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to the user-friendly format
//! - [`file_error`] - Operation/path context for filesystem failures
//!
//! ## Naming
//! - [`DependencyName`] - A shared dependency name that already passed validation
//!
//! # Example
//!
//! ```rust
//! use sls_deps::core::{DependencyName, SlsDepsError};
//!
//! match DependencyName::parse("bad name") {
//!     Err(SlsDepsError::InvalidDependencyName { reason, .. }) => {
//!         assert_eq!(reason, "contains invalid character ' '");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod error;
pub mod file_error;
mod name;

pub use error::{ErrorContext, SlsDepsError, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileResultExt};
pub use name::{DependencyName, MAX_NAME_LEN, validation_failure};
