//! Record a shared dependency in function manifests.
//!
//! # Examples
//!
//! ```bash
//! # Pick functions interactively
//! sls-deps attach --name utils
//!
//! # Select functions up front
//! sls-deps attach --name utils --function hello --function users-get
//! ```
//!
//! Each selected function's manifest gains `"utils": "local"` under
//! `customDependencies`. Manifests are updated concurrently and independently:
//! a broken manifest is reported and the others are still updated, after which
//! the command fails.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use futures::future::join_all;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::common::CommandContext;
use crate::core::{DependencyName, SlsDepsError};
use crate::manifest::{AttachOutcome, attach_dependency};
use crate::project::{Function, function_names};
use crate::prompt::{Prompter, resolve_name};

/// Command to attach a shared dependency to functions.
#[derive(Args, Debug, Default)]
pub struct AttachCommand {
    /// Name of the shared dependency to attach
    #[arg(short, long)]
    name: Option<String>,

    /// Function to attach to (repeatable); skips the selection prompt
    #[arg(short, long = "function", value_name = "FUNCTION")]
    functions: Vec<String>,
}

/// Outcome of attaching to a single function.
#[derive(Debug)]
struct FunctionResult {
    function: String,
    manifest_path: PathBuf,
    outcome: Result<AttachOutcome>,
}

impl AttachCommand {
    /// Command attaching `name` to `functions`.
    #[must_use]
    pub fn new(name: Option<String>, functions: Vec<String>) -> Self {
        Self {
            name,
            functions,
        }
    }

    /// Execute the attach command.
    pub async fn execute(self, ctx: &CommandContext, prompter: &dyn Prompter) -> Result<()> {
        let name = resolve_name(
            self.name.as_deref(),
            ctx.interactive,
            prompter,
            "Name of the shared dependency to attach:",
        )?;

        let functions = ctx.functions()?;
        if functions.is_empty() && self.functions.is_empty() {
            println!(
                "{} No functions found in {}; nothing to attach",
                "!".yellow(),
                ctx.project_root.display()
            );
            return Ok(());
        }

        let selected = self.select(ctx, prompter, &name, &functions)?;
        if selected.is_empty() {
            println!("{} No functions selected; '{}' was not attached", "!".yellow(), name);
            return Ok(());
        }

        let results = attach_all(&name, &selected).await;
        summarize(ctx, &name, &results)
    }

    /// Functions to update, in project order for prompts and flag order
    /// otherwise.
    fn select<'a>(
        &self,
        ctx: &CommandContext,
        prompter: &dyn Prompter,
        name: &DependencyName,
        functions: &'a [Function],
    ) -> Result<Vec<&'a Function>> {
        if self.functions.is_empty() {
            if !ctx.interactive {
                debug!("No --function given and prompting disabled");
                return Ok(Vec::new());
            }
            let chosen = prompter.select_functions(
                &format!("Functions that should use '{name}':"),
                &function_names(functions),
            )?;
            return Ok(functions.iter().filter(|f| chosen.contains(&f.name)).collect());
        }

        let mut selected: Vec<&Function> = Vec::new();
        for requested in &self.functions {
            let function = functions.iter().find(|f| &f.name == requested).ok_or_else(|| {
                SlsDepsError::UnknownFunction {
                    name: requested.clone(),
                    available: function_names(functions),
                }
            })?;
            if !selected.iter().any(|f| f.name == function.name) {
                selected.push(function);
            }
        }
        Ok(selected)
    }
}

/// Attach `name` to every function concurrently, collecting each result.
async fn attach_all(name: &DependencyName, functions: &[&Function]) -> Vec<FunctionResult> {
    let tasks = functions.iter().map(|function| {
        let name = name.clone();
        let path = function.manifest_path.clone();
        let function = function.name.clone();
        async move {
            let task_path = path.clone();
            let outcome = tokio::task::spawn_blocking(move || attach_dependency(&task_path, &name))
                .await
                .unwrap_or_else(|e| Err(anyhow::anyhow!("manifest update task failed: {e}")));
            FunctionResult {
                function,
                manifest_path: path,
                outcome,
            }
        }
    });
    join_all(tasks).await
}

fn summarize(ctx: &CommandContext, name: &DependencyName, results: &[FunctionResult]) -> Result<()> {
    let mut changed = 0;
    let mut unchanged = 0;
    let mut failed = 0;

    for result in results {
        match &result.outcome {
            Ok(AttachOutcome::Unchanged) => unchanged += 1,
            Ok(AttachOutcome::Updated {
                previous,
            }) => {
                debug!("'{}' in '{}' was {}, now local", name, result.function, previous);
                changed += 1;
            }
            Ok(AttachOutcome::Added) => changed += 1,
            Err(e) => {
                failed += 1;
                warn!("Failed to update manifest of '{}': {:#}", result.function, e);
                eprintln!(
                    "{} {} ({}): {:#}",
                    "✗".red(),
                    result.function,
                    ctx.display_path(&result.manifest_path),
                    e
                );
            }
        }
    }

    if failed > 0 {
        return Err(SlsDepsError::AttachFailed {
            dependency: name.to_string(),
            failed,
            total: results.len(),
        }
        .into());
    }

    if changed == 0 {
        println!("{} '{}' is already attached to {} function(s)", "✓".green(), name, unchanged);
    } else if unchanged == 0 {
        println!("{} Attached '{}' to {} function(s)", "✓".green(), name, changed);
    } else {
        println!(
            "{} Attached '{}' to {} function(s) ({} already attached)",
            "✓".green(),
            name,
            changed,
            unchanged
        );
    }
    Ok(())
}
