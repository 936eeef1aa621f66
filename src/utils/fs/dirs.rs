//! Directory creation, tree copies and removal.

use crate::core::file_error::{FileOperation, FileOperationError, FileResultExt};
use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Create `path` and any missing parents.
///
/// Succeeds if the directory already exists; fails if something other than a
/// directory is in the way.
///
/// ```rust,no_run
/// use sls_deps::utils::fs::ensure_dir;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// ensure_dir(Path::new("shared/utils"))?;
/// # Ok(())
/// # }
/// ```
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(FileOperationError::new(
            FileOperation::CreateDir,
            path,
            "preparing directory",
            io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
        )
        .into());
    }
    fs::create_dir_all(path).with_file_context(FileOperation::CreateDir, path, "preparing directory")?;
    Ok(())
}

/// Copy the tree at `src` into `dst`, creating `dst` as needed.
///
/// Regular files are copied and existing files in `dst` overwritten.
/// Symlinks and special files are skipped.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    ensure_dir(dst)?;

    let purpose = format!("copying {}", src.display());
    for entry in fs::read_dir(src).with_file_context(FileOperation::ReadDir, src, &purpose)? {
        let entry = entry.with_file_context(FileOperation::ReadDir, src, &purpose)?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let file_type = entry.file_type().with_file_context(FileOperation::Read, &src_path, &purpose)?;

        if file_type.is_dir() {
            copy_dir(&src_path, &dst_path)?;
        } else if file_type.is_file() {
            fs::copy(&src_path, &dst_path).with_file_context(
                FileOperation::Copy,
                &src_path,
                format!("copying to {}", dst_path.display()),
            )?;
        }
    }

    Ok(())
}

/// Remove the tree at `path`. A missing directory is not an error.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        result => Ok(result.with_file_context(FileOperation::Remove, path, "replacing stale copy")?),
    }
}
