//! Scaffold a new shared dependency.
//!
//! # Examples
//!
//! ```bash
//! sls-deps create --name utils
//! sls-deps create            # prompts for the name
//! ```
//!
//! Creates `<shared root>/utils/index.<ext>`. Running it again for an existing
//! dependency changes nothing.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::CommandContext;
use crate::prompt::{Prompter, resolve_name};
use crate::shared::{CreateOutcome, create_dependency};

/// Command to create a shared dependency directory with an entry file.
#[derive(Args, Debug, Default)]
pub struct CreateCommand {
    /// Name of the new shared dependency
    #[arg(short, long)]
    name: Option<String>,
}

impl CreateCommand {
    /// Command creating dependency `name`, or prompting when `None`.
    #[must_use]
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
        }
    }

    /// Execute the create command.
    pub async fn execute(self, ctx: &CommandContext, prompter: &dyn Prompter) -> Result<()> {
        let name = resolve_name(
            self.name.as_deref(),
            ctx.interactive,
            prompter,
            "Name of the new shared dependency:",
        )?;

        match create_dependency(&ctx.shared_root, &name, &ctx.entry_extension)? {
            CreateOutcome::Created {
                entry_file,
                ..
            } => {
                println!(
                    "{} Created shared dependency '{}' at {}",
                    "✓".green(),
                    name,
                    ctx.display_path(&entry_file)
                );
            }
            CreateOutcome::AlreadyExists {
                path,
            } => {
                println!(
                    "{} Shared dependency '{}' already exists at {}",
                    "!".yellow(),
                    name,
                    ctx.display_path(&path)
                );
            }
        }
        Ok(())
    }
}
