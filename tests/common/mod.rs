//! Common test utilities for sls-deps integration tests
//!
//! Fixture building lives in `sls_deps::test_utils`; this module adds what only
//! makes sense against the compiled binary: running it and asserting on files.

// Not every helper is used by every test file
#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

pub use sls_deps::test_utils::TestProject;

/// Run `sls-deps` non-interactively inside `dir`.
///
/// Colors and spinners are disabled so output can be matched verbatim.
pub fn run_sls_deps(dir: &Path, args: &[&str]) -> Result<CommandOutput> {
    let binary = env!("CARGO_BIN_EXE_sls-deps");
    let output = Command::new(binary)
        .arg("--non-interactive")
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("SLS_DEPS_NO_PROGRESS", "1")
        .env_remove("SLS_DEPS_PROJECT_ROOT")
        .env_remove("SLS_DEPS_SHARED_DIR")
        .env_remove("RUST_LOG")
        .output()
        .context("Failed to run sls-deps")?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
        code: output.status.code(),
    })
}

/// Run `sls-deps` at the root of `project`.
pub fn run_in(project: &TestProject, args: &[&str]) -> Result<CommandOutput> {
    run_sls_deps(project.root(), args)
}

/// Command output helper
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "Command failed with code {:?}\nStdout: {}\nStderr: {}",
            self.code, self.stdout, self.stderr
        );
        self
    }

    /// Assert the command failed with exit code 1
    pub fn assert_failure(&self) -> &Self {
        assert_eq!(
            self.code,
            Some(1),
            "Expected exit code 1\nStdout: {}\nStderr: {}",
            self.stdout,
            self.stderr
        );
        self
    }

    /// Assert stdout contains the given text
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    /// Assert stderr contains the given text
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }

    /// Assert stdout is exactly one line
    pub fn assert_single_status_line(&self) -> &Self {
        assert_eq!(
            self.stdout.lines().count(),
            1,
            "Expected exactly one status line\nActual stdout: {}",
            self.stdout
        );
        self
    }
}

/// File assertion helpers
pub struct FileAssert;

impl FileAssert {
    /// Assert a file exists
    pub fn exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(path.is_file(), "Expected file to exist: {}", path.display());
    }

    /// Assert a path does not exist
    pub fn not_exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(!path.exists(), "Expected path to not exist: {}", path.display());
    }

    /// Assert a file contains specific content
    pub fn contains(path: impl AsRef<Path>, expected: &str) {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
        assert!(
            content.contains(expected),
            "Expected file {} to contain '{}'\nActual content: {}",
            path.display(),
            expected,
            content
        );
    }

    /// Assert a file has exact content
    pub fn equals(path: impl AsRef<Path>, expected: &str) {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
        assert_eq!(content, expected, "File {} content mismatch", path.display());
    }

    /// Parse a JSON file
    pub fn json(path: impl AsRef<Path>) -> serde_json::Value {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Invalid JSON in {}: {}", path.display(), e))
    }
}

/// Directory assertion helpers
pub struct DirAssert;

impl DirAssert {
    /// Assert a directory exists
    pub fn exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(path.is_dir(), "Expected directory to exist: {}", path.display());
    }

    /// Assert a directory holds exactly the given entry names
    pub fn entries(path: impl AsRef<Path>, expected: &[&str]) {
        let path = path.as_ref();
        let mut names: Vec<String> = fs::read_dir(path)
            .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", path.display(), e))
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        let mut expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
        expected.sort();
        assert_eq!(names, expected, "Unexpected entries in {}", path.display());
    }
}
