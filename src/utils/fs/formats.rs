//! Reading and writing structured data files.
//!
//! All write operations go through [`super::atomic::safe_write`].
//!
//! JSON output follows the npm convention for `package.json`: two-space
//! indentation and a trailing newline. With `serde_json`'s `preserve_order`
//! feature, object keys keep their on-disk order across a read/write cycle so
//! version-control diffs only show the keys that actually changed.

use crate::core::file_error::{FileOperation, FileResultExt};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::atomic::safe_write;

/// Reads a text file with proper error handling and context.
pub fn read_text_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path).with_file_context(FileOperation::Read, path, "reading text file")?)
}

/// Reads and parses a TOML file.
pub fn read_toml_file<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = read_text_file(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Serializes `data` as pretty JSON with a trailing newline.
pub fn to_pretty_json<T>(data: &T) -> Result<String>
where
    T: serde::Serialize,
{
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}

/// Writes data as pretty JSON to a file atomically.
///
/// # Examples
///
/// ```rust,no_run
/// use sls_deps::utils::fs::write_json_file;
/// use serde_json::json;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// write_json_file(Path::new("hello/package.json"), &json!({ "name": "hello" }))?;
/// # Ok(())
/// # }
/// ```
pub fn write_json_file<T>(path: &Path, data: &T) -> Result<()>
where
    T: serde::Serialize,
{
    let json = to_pretty_json(data)?;
    safe_write(path, &json).with_context(|| format!("Failed to write JSON file: {}", path.display()))
}
