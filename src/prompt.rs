//! Interactive prompts.
//!
//! Commands never talk to the terminal directly; they ask a [`Prompter`].
//! [`InquirePrompter`] drives a real terminal, while tests substitute a
//! scripted implementation (see `test_utils::ScriptedPrompter`).

use anyhow::Result;
use inquire::validator::Validation;
use inquire::{CustomUserError, InquireError, MultiSelect, Text};
use tracing::debug;

use crate::core::{DependencyName, MAX_NAME_LEN, SlsDepsError, validation_failure};

/// Source of operator answers.
pub trait Prompter: Send + Sync {
    /// Ask for a dependency name, re-asking until it passes validation.
    fn dependency_name(&self, message: &str) -> Result<DependencyName>;

    /// Let the operator toggle any subset of `options`.
    ///
    /// The result keeps the order of `options`.
    fn select_functions(&self, message: &str, options: &[String]) -> Result<Vec<String>>;
}

/// [`Prompter`] backed by `inquire` terminal widgets.
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn dependency_name(&self, message: &str) -> Result<DependencyName> {
        let help = format!("1-{MAX_NAME_LEN} characters: letters, digits, '-' or '_'");
        let answer = Text::new(message)
            .with_help_message(&help)
            .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
                Ok(match validation_failure(input) {
                    Some(reason) => Validation::Invalid(reason.into()),
                    None => Validation::Valid,
                })
            })
            .prompt()
            .map_err(prompt_error)?;

        Ok(DependencyName::parse(&answer)?)
    }

    fn select_functions(&self, message: &str, options: &[String]) -> Result<Vec<String>> {
        let selected = MultiSelect::new(message, options.to_vec())
            .with_help_message("space to toggle, enter to confirm")
            .prompt()
            .map_err(prompt_error)?;

        debug!("Selected {} of {} function(s)", selected.len(), options.len());
        Ok(selected)
    }
}

fn prompt_error(error: InquireError) -> SlsDepsError {
    match error {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            SlsDepsError::PromptCancelled
        }
        other => SlsDepsError::PromptFailed {
            reason: other.to_string(),
        },
    }
}

/// Resolve the dependency name for a command.
///
/// A name given on the command line is validated and used as is; otherwise
/// the operator is asked when `interactive`, and the command fails with
/// [`SlsDepsError::NameRequired`] when not.
pub fn resolve_name(
    flag: Option<&str>,
    interactive: bool,
    prompter: &dyn Prompter,
    message: &str,
) -> Result<DependencyName> {
    match flag {
        Some(raw) => Ok(DependencyName::parse(raw)?),
        None if interactive => prompter.dependency_name(message),
        None => Err(SlsDepsError::NameRequired.into()),
    }
}
