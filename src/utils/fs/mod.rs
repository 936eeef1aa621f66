//! File system utilities
//!
//! Safe file operations used by every command:
//!
//! - **Atomic writes**: files are written to a temp file and renamed into place
//! - **Directory helpers**: recursive creation, copy and removal with path context
//! - **Structured formats**: TOML reading and npm-style pretty JSON writing
//! - **Project discovery**: locating the project root from any subdirectory
//!
//! # Examples
//!
//! ```rust,no_run
//! use sls_deps::utils::fs::{ensure_dir, safe_write};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("shared/utils"))?;
//! safe_write(Path::new("shared/utils/index.js"), "module.exports = {};\n")?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod dirs;
pub mod formats;
pub mod paths;

pub use atomic::{atomic_write, safe_write};
pub use dirs::{copy_dir, ensure_dir, remove_dir_all};
pub use formats::{read_text_file, read_toml_file, to_pretty_json, write_json_file};
pub use paths::{PROJECT_MARKERS, find_project_root, resolve_against};
