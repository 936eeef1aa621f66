//! Context shared by every command

use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ProjectConfig;
use crate::core::SlsDepsError;
use crate::installer::LocalInstaller;
use crate::project::{Discovery, Function};
use crate::utils::fs::{find_project_root, resolve_against};

/// Global options that influence how the context is resolved.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit project root
    pub project_root: Option<PathBuf>,
    /// Explicit shared root
    pub shared_dir: Option<PathBuf>,
    /// Never prompt
    pub non_interactive: bool,
    /// Suppress spinners
    pub quiet: bool,
}

/// Read-only settings for one command invocation.
///
/// Built once in [`CommandContext::resolve`] and passed by reference to the
/// command, so nothing below the CLI layer reads flags, environment or the
/// working directory itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// Project root directory
    pub project_root: PathBuf,
    /// Directory holding shared dependencies
    pub shared_root: PathBuf,
    /// Whether prompts may be shown
    pub interactive: bool,
    /// Whether spinners are suppressed
    pub quiet: bool,
    /// Extension of scaffolded entry files
    pub entry_extension: String,
    /// Marker file identifying function directories
    pub function_marker: String,
    /// Per-function manifest file name
    pub manifest_file: String,
}

impl CommandContext {
    /// Resolve the context from global options, starting at `cwd`.
    ///
    /// # Errors
    ///
    /// - [`SlsDepsError::ProjectNotFound`] when no project root can be located
    /// - configuration errors from `sls-deps.toml`
    pub fn resolve(options: &GlobalOptions, cwd: &Path) -> Result<Self> {
        let project_root = match &options.project_root {
            Some(root) => {
                let root = resolve_against(cwd, root);
                if !root.is_dir() {
                    return Err(SlsDepsError::ProjectNotFound {
                        start: root.display().to_string(),
                    }
                    .into());
                }
                root.canonicalize()
                    .with_context(|| format!("Failed to resolve project root {}", root.display()))?
            }
            None => find_project_root(cwd).ok_or_else(|| SlsDepsError::ProjectNotFound {
                start: cwd.display().to_string(),
            })?,
        };

        let config = ProjectConfig::load(&project_root)?;
        Ok(Self::from_config(&project_root, &config, options))
    }

    /// Build the context for a known project root and configuration.
    ///
    /// Interactivity also requires stdin to be a terminal.
    #[must_use]
    pub fn from_config(
        project_root: &Path,
        config: &ProjectConfig,
        options: &GlobalOptions,
    ) -> Self {
        let shared_dir = options.shared_dir.clone().unwrap_or_else(|| config.shared_dir());
        let shared_root = resolve_against(project_root, &shared_dir);
        let interactive = !options.non_interactive && std::io::stdin().is_terminal();

        let ctx = Self {
            project_root: project_root.to_path_buf(),
            shared_root,
            interactive,
            quiet: options.quiet,
            entry_extension: config.entry_extension().to_string(),
            function_marker: config.function_marker().to_string(),
            manifest_file: config.manifest_file().to_string(),
        };
        debug!("Command context: {:?}", ctx);
        ctx
    }

    /// Every function in the project, sorted by name.
    pub fn functions(&self) -> Result<Vec<Function>> {
        Discovery {
            root: &self.project_root,
            shared_root: &self.shared_root,
            marker: &self.function_marker,
            manifest_file: &self.manifest_file,
        }
        .functions()
    }

    /// The built-in installer configured for this project.
    #[must_use]
    pub fn installer(&self) -> LocalInstaller {
        LocalInstaller::new(&self.function_marker, &self.manifest_file)
    }

    /// Whether to draw spinners on stderr.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        !self.quiet && std::io::stderr().is_terminal()
    }

    /// `path` relative to the project root when it lies inside it.
    #[must_use]
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.project_root).unwrap_or(path).display().to_string()
    }
}
