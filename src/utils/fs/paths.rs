//! Path helpers.

use std::path::{Path, PathBuf};

/// Files whose presence marks a serverless project root.
pub const PROJECT_MARKERS: &[&str] =
    &["sls-deps.toml", "s-project.json", "serverless.yml", "serverless.yaml"];

/// Finds the project root by searching upward for a project marker.
///
/// # Behavior
///
/// - Starts from the given directory and searches upward
/// - Returns the first directory containing any of [`PROJECT_MARKERS`]
/// - Canonicalizes the starting path to handle symlinks
/// - Returns `None` once the filesystem root has been checked
///
/// # Examples
///
/// ```rust,no_run
/// use sls_deps::utils::fs::find_project_root;
///
/// let cwd = std::env::current_dir().unwrap();
/// if let Some(root) = find_project_root(&cwd) {
///     println!("Project root: {}", root.display());
/// }
/// ```
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    loop {
        if PROJECT_MARKERS.iter().any(|marker| current.join(marker).is_file()) {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Resolves `path` against `base` unless it is already absolute.
#[must_use]
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
