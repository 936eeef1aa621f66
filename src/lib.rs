//! sls-deps - shared dependencies for serverless functions
//!
//! A serverless project often has several functions that need the same helper
//! code. sls-deps keeps that code once, under a shared root, and copies it into
//! every function that declares it before deployment.
//!
//! # Architecture Overview
//!
//! - Shared dependencies are directories under `<project>/shared/` (or `libs/`
//!   for the legacy layout), each with an entry file `index.<ext>`
//! - A function declares that it uses one with
//!   `"customDependencies": { "<name>": "local" }` in its `package.json`
//! - Installation copies `<shared>/<name>` to `<function>/node_modules/<name>`
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface (`create`, `attach`, `install`)
//! - [`config`] - Optional project configuration (`sls-deps.toml`)
//! - [`core`] - Error types and validated dependency names
//! - [`project`] - Function discovery
//! - [`manifest`] - Reading and updating function manifests
//! - [`shared`] - Scaffolding shared dependencies
//! - [`installer`] - Copying shared dependencies into functions
//! - [`prompt`] - Interactive prompts behind a trait
//! - [`utils`] - Atomic file writes, directory helpers, spinners
//!
//! # Example
//!
//! ```bash
//! sls-deps create --name utils
//! sls-deps attach --name utils --function hello
//! sls-deps install
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod installer;
pub mod manifest;
pub mod project;
pub mod prompt;
pub mod shared;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
