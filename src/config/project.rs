//! Project-level configuration (`sls-deps.toml`).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::SlsDepsError;
use crate::utils::fs::read_toml_file;

/// File name of the optional project configuration.
pub const CONFIG_FILE_NAME: &str = "sls-deps.toml";

/// Shared root used by the standard layout.
pub const DEFAULT_SHARED_DIR: &str = "shared";

/// Shared root used by the legacy layout.
pub const LEGACY_SHARED_DIR: &str = "libs";

/// Directory layout of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Shared dependencies live in `shared/`
    #[default]
    Standard,
    /// Shared dependencies live in `libs/`
    Legacy,
}

impl Layout {
    /// The shared directory this layout uses when none is configured.
    #[must_use]
    pub const fn default_shared_dir(self) -> &'static str {
        match self {
            Self::Standard => DEFAULT_SHARED_DIR,
            Self::Legacy => LEGACY_SHARED_DIR,
        }
    }
}

/// Settings read from `sls-deps.toml` at the project root.
///
/// Every key is optional; a project without the file uses the defaults.
///
/// ```toml
/// shared-dir = "lib/shared"
/// layout = "standard"
/// entry-extension = "ts"
/// function-marker = "s-function.json"
/// manifest-file = "package.json"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Shared root, relative to the project root unless absolute
    pub shared_dir: Option<PathBuf>,
    /// Directory layout
    #[serde(default)]
    pub layout: Layout,
    /// Extension of scaffolded entry files, without the dot
    pub entry_extension: Option<String>,
    /// File whose presence marks a function directory
    pub function_marker: Option<String>,
    /// Per-function manifest file name
    pub manifest_file: Option<String>,
}

impl ProjectConfig {
    /// Default entry file extension
    pub const DEFAULT_ENTRY_EXTENSION: &'static str = "js";
    /// Default function marker file
    pub const DEFAULT_FUNCTION_MARKER: &'static str = "s-function.json";
    /// Default manifest file name
    pub const DEFAULT_MANIFEST_FILE: &'static str = "package.json";
    /// Longest accepted `entry-extension`
    pub const MAX_EXTENSION_LEN: usize = 16;

    /// Load the configuration of the project rooted at `project_root`.
    ///
    /// A missing `sls-deps.toml` yields the defaults; an unreadable or
    /// malformed one is an error.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, project_root.display());
            return Ok(Self::default());
        }

        let config: Self = read_toml_file(&path)
            .with_context(|| format!("Failed to load project configuration: {}", path.display()))?;
        config.validate()?;
        debug!("Loaded project configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), SlsDepsError> {
        if let Some(ext) = &self.entry_extension {
            if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(SlsDepsError::ConfigError {
                    message: format!(
                        "entry-extension '{ext}' must be a bare extension such as 'js' or 'ts'"
                    ),
                });
            }
            if ext.len() > Self::MAX_EXTENSION_LEN {
                return Err(SlsDepsError::ConfigError {
                    message: format!(
                        "entry-extension is {} characters long (maximum {})",
                        ext.len(),
                        Self::MAX_EXTENSION_LEN
                    ),
                });
            }
        }

        for (key, value) in [
            ("function-marker", &self.function_marker),
            ("manifest-file", &self.manifest_file),
        ] {
            if let Some(name) = value {
                if name.is_empty() || name.contains(['/', '\\']) {
                    return Err(SlsDepsError::ConfigError {
                        message: format!("{key} '{name}' must be a plain file name"),
                    });
                }
            }
        }

        Ok(())
    }

    /// Shared root relative to (or absolute over) the project root.
    #[must_use]
    pub fn shared_dir(&self) -> PathBuf {
        self.shared_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.layout.default_shared_dir()))
    }

    /// Extension of scaffolded entry files.
    #[must_use]
    pub fn entry_extension(&self) -> &str {
        self.entry_extension.as_deref().unwrap_or(Self::DEFAULT_ENTRY_EXTENSION)
    }

    /// Marker file identifying function directories.
    #[must_use]
    pub fn function_marker(&self) -> &str {
        self.function_marker.as_deref().unwrap_or(Self::DEFAULT_FUNCTION_MARKER)
    }

    /// Per-function manifest file name.
    #[must_use]
    pub fn manifest_file(&self) -> &str {
        self.manifest_file.as_deref().unwrap_or(Self::DEFAULT_MANIFEST_FILE)
    }
}
