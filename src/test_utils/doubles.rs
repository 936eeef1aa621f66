//! Stand-ins for the terminal and the installer

use anyhow::Result;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::{DependencyName, SlsDepsError};
use crate::installer::{DependencyInstaller, InstallReport};
use crate::prompt::Prompter;

/// A [`Prompter`] that replays scripted answers.
///
/// Running out of answers fails the prompt, so a test that prompts more often
/// than expected fails loudly.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    names: Mutex<VecDeque<String>>,
    selections: Mutex<VecDeque<Vec<String>>>,
    offered: Mutex<Vec<Vec<String>>>,
}

impl ScriptedPrompter {
    /// A prompter with no answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer to a name prompt.
    pub fn with_name(self, name: &str) -> Self {
        self.names.lock().unwrap().push_back(name.to_string());
        self
    }

    /// Queue an answer to a selection prompt.
    pub fn with_selection(self, selection: &[&str]) -> Self {
        self.selections
            .lock()
            .unwrap()
            .push_back(selection.iter().map(ToString::to_string).collect());
        self
    }

    /// Whether every queued answer has been used.
    pub fn is_exhausted(&self) -> bool {
        self.names.lock().unwrap().is_empty() && self.selections.lock().unwrap().is_empty()
    }

    /// Options shown by each selection prompt so far.
    pub fn offered_options(&self) -> Vec<Vec<String>> {
        self.offered.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn dependency_name(&self, _message: &str) -> Result<DependencyName> {
        let answer = self.names.lock().unwrap().pop_front().ok_or_else(|| {
            SlsDepsError::PromptFailed {
                reason: "no scripted name answer left".to_string(),
            }
        })?;
        Ok(DependencyName::parse(&answer)?)
    }

    fn select_functions(&self, _message: &str, options: &[String]) -> Result<Vec<String>> {
        self.offered.lock().unwrap().push(options.to_vec());
        let chosen = self.selections.lock().unwrap().pop_front().ok_or_else(|| {
            SlsDepsError::PromptFailed {
                reason: "no scripted selection left".to_string(),
            }
        })?;
        Ok(options.iter().filter(|o| chosen.contains(o)).cloned().collect())
    }
}

/// A [`DependencyInstaller`] that records its calls.
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    calls: Mutex<Vec<(PathBuf, Vec<PathBuf>)>>,
    failure: Option<String>,
}

impl RecordingInstaller {
    /// An installer that always succeeds with an empty report.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// An installer that always fails with [`SlsDepsError::InstallFailed`].
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// Arguments of every `install` call, in order.
    pub fn calls(&self) -> Vec<(PathBuf, Vec<PathBuf>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl DependencyInstaller for RecordingInstaller {
    async fn install(&self, shared_root: &Path, project_roots: &[PathBuf]) -> Result<InstallReport> {
        self.calls.lock().unwrap().push((shared_root.to_path_buf(), project_roots.to_vec()));
        match &self.failure {
            Some(reason) => Err(SlsDepsError::InstallFailed {
                reason: reason.clone(),
            }
            .into()),
            None => Ok(InstallReport {
                projects: project_roots.len(),
                ..InstallReport::default()
            }),
        }
    }
}
