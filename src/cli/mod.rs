//! Command-line interface for sls-deps.
//!
//! # Available Commands
//!
//! - `create` - Scaffold a new shared dependency under the shared root
//! - `attach` - Record a shared dependency in selected function manifests
//! - `install` - Copy declared shared dependencies into each function
//!
//! # Basic Workflow
//!
//! ```bash
//! # 1. Create the shared code
//! sls-deps create --name utils
//!
//! # 2. Declare which functions use it
//! sls-deps attach --name utils --function hello
//!
//! # 3. Materialize it before packaging
//! sls-deps install
//! ```
//!
//! # Global Options
//!
//! All commands support these global options:
//! - `--verbose` / `--quiet` - Log level (mutually exclusive)
//! - `--project-root` - Skip project root discovery
//! - `--shared-dir` - Override the shared root
//! - `--non-interactive` - Never prompt; missing input is an error or a no-op

mod attach;
pub mod common;
mod create;
mod install;

pub use attach::AttachCommand;
pub use common::{CommandContext, GlobalOptions};
pub use create::CreateCommand;
pub use install::InstallCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::prompt::InquirePrompter;

/// Main CLI structure for sls-deps.
#[derive(Parser, Debug)]
#[command(
    name = "sls-deps",
    about = "Manage shared dependencies across serverless functions",
    version,
    long_about = "sls-deps scaffolds shared code, records which functions depend on it, \
                  and copies it into each function before deployment."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors; no spinners.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Project root to use instead of searching upward for a project marker.
    #[arg(long, global = true, env = "SLS_DEPS_PROJECT_ROOT", value_name = "DIR")]
    project_root: Option<PathBuf>,

    /// Shared dependency directory, relative to the project root unless absolute.
    #[arg(long, global = true, env = "SLS_DEPS_SHARED_DIR", value_name = "DIR")]
    shared_dir: Option<PathBuf>,

    /// Never prompt, even on a terminal.
    #[arg(long, global = true)]
    non_interactive: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new shared dependency.
    Create(CreateCommand),

    /// Attach a shared dependency to functions.
    Attach(AttachCommand),

    /// Install shared dependencies into every function.
    Install(InstallCommand),
}

impl Cli {
    /// Log filter implied by the verbosity flags.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    /// Global options as passed to [`CommandContext::resolve`].
    #[must_use]
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            project_root: self.project_root.clone(),
            shared_dir: self.shared_dir.clone(),
            non_interactive: self.non_interactive,
            quiet: self.quiet,
        }
    }

    /// Resolve the command context from the working directory and run the
    /// selected command with the terminal prompter and built-in installer.
    pub async fn execute(self) -> Result<()> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        let ctx = CommandContext::resolve(&self.global_options(), &cwd)?;
        let prompter = InquirePrompter;

        match self.command {
            Commands::Create(cmd) => cmd.execute(&ctx, &prompter).await,
            Commands::Attach(cmd) => cmd.execute(&ctx, &prompter).await,
            Commands::Install(cmd) => cmd.execute(&ctx, &ctx.installer()).await,
        }
    }
}
