//! Function discovery within a serverless project.
//!
//! A function is any directory below the project root that contains the
//! function marker file (`s-function.json` by default). The walk never follows
//! symlinks and never descends into hidden directories, `node_modules`, the
//! shared root, or a function directory once it has been recognised.

use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::SlsDepsError;
use crate::utils::fs::read_text_file;

/// A serverless function found in the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// Function name, from the marker's `name` field or the directory name
    pub name: String,
    /// Directory holding the function
    pub dir: PathBuf,
    /// Path of the function's manifest (`package.json` by default)
    pub manifest_path: PathBuf,
}

impl Function {
    /// Whether the function has a manifest on disk.
    #[must_use]
    pub fn has_manifest(&self) -> bool {
        self.manifest_path.is_file()
    }
}

#[derive(Debug, Default, Deserialize)]
struct FunctionMarker {
    name: Option<String>,
}

/// Where and how to look for functions.
#[derive(Debug, Clone, Copy)]
pub struct Discovery<'a> {
    /// Project root to walk
    pub root: &'a Path,
    /// Shared root, never treated as containing functions
    pub shared_root: &'a Path,
    /// Marker file name
    pub marker: &'a str,
    /// Manifest file name inside each function directory
    pub manifest_file: &'a str,
}

impl Discovery<'_> {
    /// Walk the project and return every function, sorted by name.
    ///
    /// Two directories resolving to the same function name are a
    /// [`SlsDepsError::ConfigError`] naming both directories.
    pub fn functions(&self) -> Result<Vec<Function>> {
        debug!("Discovering functions under {}", self.root.display());

        let mut found: BTreeMap<String, Function> = BTreeMap::new();
        let mut walker = WalkDir::new(self.root).min_depth(1).follow_links(false).into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable path during function discovery: {e}");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }
            if self.is_excluded(&entry) {
                trace!("Not descending into {}", entry.path().display());
                walker.skip_current_dir();
                continue;
            }

            let marker_path = entry.path().join(self.marker);
            if !marker_path.is_file() {
                continue;
            }

            let function = self.load_function(entry.path(), &marker_path)?;
            debug!("Found function '{}' in {}", function.name, function.dir.display());

            if let Some(existing) = found.get(&function.name) {
                return Err(SlsDepsError::ConfigError {
                    message: format!(
                        "function name '{}' is used by both {} and {}",
                        function.name,
                        existing.dir.display(),
                        function.dir.display()
                    ),
                }
                .into());
            }
            found.insert(function.name.clone(), function);
            walker.skip_current_dir();
        }

        debug!("Discovered {} function(s)", found.len());
        Ok(found.into_values().collect())
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || name == "node_modules" || entry.path() == self.shared_root
    }

    fn load_function(&self, dir: &Path, marker_path: &Path) -> Result<Function> {
        let content = read_text_file(marker_path)?;
        let marker: FunctionMarker = serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(
                "Ignoring malformed function marker {}: {e}; using the directory name",
                marker_path.display()
            );
            FunctionMarker::default()
        });

        let name = marker.name.filter(|n| !n.is_empty()).unwrap_or_else(|| {
            dir.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
        });

        Ok(Function {
            name,
            dir: dir.to_path_buf(),
            manifest_path: dir.join(self.manifest_file),
        })
    }
}

/// Names of `functions`, in order.
#[must_use]
pub fn function_names(functions: &[Function]) -> Vec<String> {
    functions.iter().map(|f| f.name.clone()).collect()
}
