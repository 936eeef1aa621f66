//! Configuration management for sls-deps
//!
//! A serverless project may carry an optional `sls-deps.toml` at its root.
//! It only tunes where things live; every key has a default so most projects
//! never need the file.
//!
//! # Configuration File (`sls-deps.toml`)
//!
//! ```toml
//! # Shared root, relative to the project root unless absolute
//! shared-dir = "shared"
//!
//! # "standard" keeps shared code in shared/, "legacy" in libs/
//! layout = "standard"
//!
//! # Scaffolded entry file is index.<entry-extension>
//! entry-extension = "js"
//!
//! # Function discovery and manifest names
//! function-marker = "s-function.json"
//! manifest-file = "package.json"
//! ```
//!
//! # Precedence
//!
//! The shared root resolves in this order:
//!
//! 1. `--shared-dir` flag or `SLS_DEPS_SHARED_DIR`
//! 2. `shared-dir` in `sls-deps.toml`
//! 3. The layout default (`shared` or `libs`)

pub mod project;

pub use project::{CONFIG_FILE_NAME, DEFAULT_SHARED_DIR, LEGACY_SHARED_DIR, Layout, ProjectConfig};
