//! Function manifests (`package.json`).
//!
//! A [`FunctionManifest`] is kept as an ordered JSON object rather than a typed
//! struct: sls-deps only ever touches the `customDependencies` key and every
//! other key must survive a read/write cycle untouched and in place.
//!
//! ```json
//! {
//!   "name": "hello",
//!   "version": "1.0.0",
//!   "customDependencies": {
//!     "utils": "local"
//!   }
//! }
//! ```
//!
//! Writes use two-space indentation with a trailing newline and go through an
//! atomic rename, so a manifest is never left half written.

mod mutations;

pub use mutations::{AttachOutcome, attach_dependency};

use anyhow::Result;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::SlsDepsError;
use crate::utils::fs::{read_text_file, write_json_file};

/// Key holding the shared dependency map.
pub const CUSTOM_DEPENDENCIES_KEY: &str = "customDependencies";

/// Source descriptor recorded for dependencies living in the shared root.
pub const LOCAL_SOURCE: &str = "local";

/// Where a declared custom dependency comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencySource {
    /// `"local"`: copied from the shared root
    Local,
    /// Any other value, kept verbatim
    Other(String),
}

impl From<&Value> for DependencySource {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) if s == LOCAL_SOURCE => Self::Local,
            Value::String(s) => Self::Other(s.clone()),
            other => Self::Other(other.to_string()),
        }
    }
}

/// A parsed function manifest.
#[derive(Debug, Clone)]
pub struct FunctionManifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl FunctionManifest {
    /// Read and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// - the file cannot be read (carries a [`crate::core::FileOperationError`])
    /// - [`SlsDepsError::ManifestParseError`] for malformed JSON
    /// - [`SlsDepsError::ManifestInvalid`] when the top level is not an object
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_text_file(path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| SlsDepsError::ManifestParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let Value::Object(document) = value else {
            return Err(SlsDepsError::ManifestInvalid {
                file: path.display().to_string(),
                reason: "top-level value is not a JSON object".to_string(),
            }
            .into());
        };

        debug!("Loaded manifest {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Declared custom dependencies in manifest order.
    ///
    /// A manifest without `customDependencies` declares none.
    pub fn custom_dependencies(&self) -> Result<Vec<(String, DependencySource)>, SlsDepsError> {
        match self.document.get(CUSTOM_DEPENDENCIES_KEY) {
            None => Ok(Vec::new()),
            Some(Value::Object(map)) => {
                Ok(map.iter().map(|(name, source)| (name.clone(), source.into())).collect())
            }
            Some(_) => Err(self.not_an_object()),
        }
    }

    /// Write the manifest back to where it was loaded from.
    pub fn save(&self) -> Result<()> {
        write_json_file(&self.path, &self.document)?;
        debug!("Saved manifest {}", self.path.display());
        Ok(())
    }

    fn not_an_object(&self) -> SlsDepsError {
        SlsDepsError::ManifestInvalid {
            file: self.path.display().to_string(),
            reason: format!("'{CUSTOM_DEPENDENCIES_KEY}' is not a JSON object"),
        }
    }
}
