//! Atomic file write operations using temp-and-rename strategy.
//!
//! Manifests are read by the deployment pipeline, so a half-written
//! `package.json` must never be observable.

use crate::core::file_error::{FileOperation, FileResultExt};
use crate::utils::fs::dirs::ensure_dir;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Safely writes a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`].
///
/// # Examples
///
/// ```rust,no_run
/// use sls_deps::utils::fs::safe_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// safe_write(Path::new("shared/utils/index.js"), "module.exports = {};\n")?;
/// # Ok(())
/// # }
/// ```
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Writes content to a temporary file in the target's directory
/// 2. Syncs the temporary file to disk
/// 3. Renames the temporary file over the target path
///
/// The temporary file lives next to the target so the rename never crosses a
/// filesystem boundary. On failure the temporary file is removed and the
/// target keeps its previous content.
///
/// # Guarantees
///
/// - **Atomicity**: readers see either the old or the new content
/// - **Durability**: content is synced to disk before rename
/// - **Safety**: parent directories are created automatically
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::Builder::new()
        .prefix(".sls-deps-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;

    temp.write_all(content).with_file_context(FileOperation::Write, path, "writing temp file")?;
    temp.as_file().sync_all().with_file_context(FileOperation::Write, path, "syncing to disk")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
