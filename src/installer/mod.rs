//! Materializing shared dependencies into functions.
//!
//! The install command owns no logic of its own: it hands the shared root and
//! the project root(s) to a [`DependencyInstaller`] and awaits the returned
//! future. That future is the completion signal; a failed install resolves to
//! an error that the command propagates.
//!
//! [`LocalInstaller`] is the built-in implementation. For every function
//! whose manifest declares `"<name>": "local"` under `customDependencies`, it
//! replaces `<function>/node_modules/<name>` with a fresh copy of
//! `<shared_root>/<name>`.
//!
//! # Example
//!
//! ```rust,no_run
//! use sls_deps::installer::{DependencyInstaller, LocalInstaller};
//! use std::path::{Path, PathBuf};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let installer = LocalInstaller::default();
//! let report = installer
//!     .install(Path::new("/project/shared"), &[PathBuf::from("/project")])
//!     .await?;
//! println!("{} dependencies copied", report.installed);
//! # Ok(())
//! # }
//! ```

mod local;

pub use local::LocalInstaller;

use anyhow::Result;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Directory inside a function that receives installed dependencies.
pub const INSTALL_DIR: &str = "node_modules";

/// Counts describing a finished installation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Project roots processed
    pub projects: usize,
    /// Functions found across all project roots
    pub functions: usize,
    /// Functions skipped because they have no manifest
    pub skipped: usize,
    /// Functions that received at least one copy
    pub updated: usize,
    /// Dependency copies made
    pub installed: usize,
}

impl InstallReport {
    /// Add the counts of `other` to `self`.
    pub fn merge(&mut self, other: Self) {
        self.projects += other.projects;
        self.functions += other.functions;
        self.skipped += other.skipped;
        self.updated += other.updated;
        self.installed += other.installed;
    }
}

/// Installs shared dependencies into the functions of one or more projects.
pub trait DependencyInstaller: Send + Sync {
    /// Install everything declared by the functions under `project_roots`,
    /// sourcing shared code from `shared_root`.
    ///
    /// The returned future completes once installation has finished or
    /// failed.
    fn install(
        &self,
        shared_root: &Path,
        project_roots: &[PathBuf],
    ) -> impl Future<Output = Result<InstallReport>> + Send;
}
