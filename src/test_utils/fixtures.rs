//! On-disk project fixtures

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::utils::fs::to_pretty_json;

/// A temporary serverless project.
///
/// The root holds an `s-project.json` marker. Functions live directly under
/// the root, shared dependencies under `shared/`. Everything is removed when
/// the value is dropped.
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    /// Create an empty project with an `s-project.json` marker.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp project")?;
        fs::write(temp_dir.path().join("s-project.json"), "{\n  \"name\": \"test-project\"\n}\n")?;
        Ok(Self {
            temp_dir,
        })
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Default shared root (`<root>/shared`).
    pub fn shared_root(&self) -> PathBuf {
        self.root().join("shared")
    }

    /// Directory of function `name`.
    pub fn function_dir(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Add a function with a marker and a minimal `package.json`.
    pub fn add_function(&self, name: &str) -> Result<PathBuf> {
        let dir = self.add_function_without_manifest(name)?;
        let manifest = json!({
            "name": name,
            "version": "1.0.0",
            "main": "handler.js",
        });
        fs::write(dir.join("package.json"), to_pretty_json(&manifest)?)?;
        Ok(dir)
    }

    /// Add a function with only its marker.
    pub fn add_function_without_manifest(&self, name: &str) -> Result<PathBuf> {
        let dir = self.function_dir(name);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("s-function.json"), to_pretty_json(&json!({ "name": name }))?)?;
        fs::write(dir.join("handler.js"), "module.exports.handler = async () => ({});\n")?;
        Ok(dir)
    }

    /// Add shared dependency `name` with an `index.js` under the default
    /// shared root.
    pub fn add_shared(&self, name: &str) -> Result<PathBuf> {
        let dir = self.shared_root().join(name);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("index.js"), format!("module.exports = '{name}';\n"))?;
        Ok(dir)
    }

    /// Write `sls-deps.toml` at the root.
    pub fn write_config(&self, content: &str) -> Result<()> {
        self.write_file("sls-deps.toml", content)
    }

    /// Write a file relative to the root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}
