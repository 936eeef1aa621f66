//! Utilities shared by all commands
//!
//! # Modules
//!
//! - [`fs`] - File system operations with atomic writes and safe copying
//! - [`progress`] - Spinners for long-running operations
//!
//! # Example
//!
//! ```rust,no_run
//! use sls_deps::utils::{atomic_write, ensure_dir};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("shared/utils"))?;
//! atomic_write(Path::new("shared/utils/index.js"), b"module.exports = {};\n")?;
//! # Ok(())
//! # }
//! ```

pub mod fs;
pub mod progress;

pub use fs::{atomic_write, copy_dir, ensure_dir, safe_write};
pub use progress::Spinner;
