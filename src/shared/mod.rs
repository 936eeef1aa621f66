//! The shared root and the dependencies living in it.
//!
//! Each shared dependency is a directory `<shared_root>/<name>` holding at
//! least an entry file `index.<ext>`. Dependencies are created once and never
//! renamed or removed by sls-deps.

mod templates;

pub use templates::EntryTemplates;

use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::{DependencyName, FileOperation, FileOperationError};
use crate::utils::fs::{ensure_dir, remove_dir_all, safe_write};

/// Result of [`create_dependency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new dependency directory and entry file were written
    Created {
        /// The dependency directory
        path: PathBuf,
        /// The scaffolded entry file
        entry_file: PathBuf,
    },
    /// The directory already existed; nothing was touched
    AlreadyExists {
        /// The existing dependency directory
        path: PathBuf,
    },
}

/// Entry file name for a given extension, e.g. `index.js`.
#[must_use]
pub fn entry_file_name(extension: &str) -> String {
    format!("index.{extension}")
}

/// Directory of dependency `name` under `shared_root`.
#[must_use]
pub fn dependency_dir(shared_root: &Path, name: &str) -> PathBuf {
    shared_root.join(name)
}

/// Scaffold dependency `name` under `shared_root`.
///
/// Missing parents of the dependency directory are created. Running this
/// twice with the same name is a no-op the second time.
///
/// # Errors
///
/// Fails when the target path exists but is not a directory, or when the
/// directory or entry file cannot be written.
///
/// # Examples
///
/// ```rust,no_run
/// use sls_deps::core::DependencyName;
/// use sls_deps::shared::{CreateOutcome, create_dependency};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let name = DependencyName::parse("utils")?;
/// match create_dependency(Path::new("shared"), &name, "js")? {
///     CreateOutcome::Created { entry_file, .. } => println!("wrote {}", entry_file.display()),
///     CreateOutcome::AlreadyExists { path } => println!("{} exists", path.display()),
/// }
/// # Ok(())
/// # }
/// ```
pub fn create_dependency(
    shared_root: &Path,
    name: &DependencyName,
    extension: &str,
) -> Result<CreateOutcome> {
    let path = dependency_dir(shared_root, name.as_str());

    if path.is_dir() {
        debug!("Shared dependency '{}' already exists at {}", name, path.display());
        return Ok(CreateOutcome::AlreadyExists {
            path,
        });
    }
    if path.exists() {
        let source = io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory");
        return Err(FileOperationError::new(
            FileOperation::CreateDir,
            &path,
            format!("creating shared dependency '{name}'"),
            source,
        )
        .into());
    }

    let content = EntryTemplates::new()?.render(extension, name.as_str())?;

    ensure_dir(&path)?;
    let entry_file = path.join(entry_file_name(extension));
    if let Err(e) = safe_write(&entry_file, &content) {
        // `path` did not exist before this call; an empty dependency must not outlive it.
        if let Err(cleanup) = remove_dir_all(&path) {
            warn!("Failed to remove incomplete dependency {}: {:#}", path.display(), cleanup);
        }
        return Err(e);
    }

    info!("Created shared dependency '{}' at {}", name, path.display());
    Ok(CreateOutcome::Created {
        path,
        entry_file,
    })
}
