//! Install shared dependencies into functions.
//!
//! # Examples
//!
//! ```bash
//! sls-deps install
//! sls-deps --shared-dir libs install
//! ```
//!
//! The command checks that the shared root exists, hands it together with the
//! project root to the installer once, and reports the result.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::slice;
use tracing::debug;

use super::common::CommandContext;
use crate::core::SlsDepsError;
use crate::installer::DependencyInstaller;
use crate::utils::progress::Spinner;

/// Command to materialize shared dependencies in every function.
#[derive(Args, Debug, Default)]
pub struct InstallCommand {}

impl InstallCommand {
    /// Create an install command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute the install command with the given installer.
    pub async fn execute<I: DependencyInstaller>(
        self,
        ctx: &CommandContext,
        installer: &I,
    ) -> Result<()> {
        if !ctx.shared_root.is_dir() {
            return Err(SlsDepsError::SharedRootMissing {
                path: ctx.shared_root.display().to_string(),
            }
            .into());
        }

        debug!(
            "Installing from {} into {}",
            ctx.shared_root.display(),
            ctx.project_root.display()
        );
        let spinner = Spinner::new("Installing shared dependencies...", ctx.show_progress());
        let result = installer.install(&ctx.shared_root, slice::from_ref(&ctx.project_root)).await;
        spinner.finish_and_clear();
        let report = result?;

        println!(
            "{} Dependencies installed successfully ({} copied into {} function(s))",
            "✓".green(),
            report.installed,
            report.updated
        );
        Ok(())
    }
}
