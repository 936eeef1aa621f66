//! Copy-based installer for `"local"` shared dependencies.

use anyhow::{Context, Result};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{DependencyInstaller, INSTALL_DIR, InstallReport};
use crate::config::ProjectConfig;
use crate::core::{DependencyName, SlsDepsError};
use crate::manifest::{DependencySource, FunctionManifest};
use crate::project::Discovery;
use crate::shared::dependency_dir;
use crate::utils::fs::{copy_dir, remove_dir_all};

/// Installs `"local"` custom dependencies by copying them out of the shared
/// root into each function's `node_modules`.
#[derive(Debug, Clone)]
pub struct LocalInstaller {
    function_marker: String,
    manifest_file: String,
}

impl Default for LocalInstaller {
    fn default() -> Self {
        Self::new(ProjectConfig::DEFAULT_FUNCTION_MARKER, ProjectConfig::DEFAULT_MANIFEST_FILE)
    }
}

impl LocalInstaller {
    /// Installer recognising functions by `function_marker` and reading
    /// declarations from `manifest_file`.
    pub fn new(function_marker: impl Into<String>, manifest_file: impl Into<String>) -> Self {
        Self {
            function_marker: function_marker.into(),
            manifest_file: manifest_file.into(),
        }
    }

    async fn install_project(&self, shared_root: &Path, root: &Path) -> Result<InstallReport> {
        let plan = {
            let shared_root = shared_root.to_path_buf();
            let root = root.to_path_buf();
            let marker = self.function_marker.clone();
            let manifest_file = self.manifest_file.clone();
            tokio::task::spawn_blocking(move || {
                plan_project(&shared_root, &root, &marker, &manifest_file)
            })
            .await
            .map_err(|e| SlsDepsError::InstallFailed {
                reason: format!("planning task failed: {e}"),
            })??
        };

        let mut report = InstallReport {
            projects: 1,
            functions: plan.functions,
            skipped: plan.skipped,
            updated: plan.updated,
            installed: 0,
        };

        let tasks = plan
            .copies
            .into_iter()
            .map(|copy| tokio::task::spawn_blocking(move || copy.run()));
        for result in join_all(tasks).await {
            result.map_err(|e| SlsDepsError::InstallFailed {
                reason: format!("copy task failed: {e}"),
            })??;
            report.installed += 1;
        }

        info!(
            "Installed {} shared dependency copies into {} function(s) under {}",
            report.installed,
            report.updated,
            root.display()
        );
        Ok(report)
    }
}

impl DependencyInstaller for LocalInstaller {
    async fn install(&self, shared_root: &Path, project_roots: &[PathBuf]) -> Result<InstallReport> {
        let mut report = InstallReport::default();
        for root in project_roots {
            let project = self
                .install_project(shared_root, root)
                .await
                .with_context(|| format!("Failed to install dependencies for {}", root.display()))?;
            report.merge(project);
        }
        Ok(report)
    }
}

/// One dependency directory to copy into one function.
#[derive(Debug)]
struct CopyJob {
    name: String,
    source: PathBuf,
    target: PathBuf,
}

impl CopyJob {
    fn run(&self) -> Result<()> {
        debug!("Installing '{}' into {}", self.name, self.target.display());
        remove_dir_all(&self.target)?;
        copy_dir(&self.source, &self.target).with_context(|| {
            format!(
                "Failed to copy shared dependency '{}' from {} to {}",
                self.name,
                self.source.display(),
                self.target.display()
            )
        })
    }
}

#[derive(Debug, Default)]
struct ProjectPlan {
    functions: usize,
    skipped: usize,
    updated: usize,
    copies: Vec<CopyJob>,
}

/// Read every function manifest under `root` and work out what to copy.
///
/// Nothing is copied until the whole project has been checked, so a missing
/// shared dependency leaves every function untouched.
fn plan_project(
    shared_root: &Path,
    root: &Path,
    marker: &str,
    manifest_file: &str,
) -> Result<ProjectPlan> {
    let functions = Discovery {
        root,
        shared_root,
        marker,
        manifest_file,
    }
    .functions()?;

    let mut plan = ProjectPlan {
        functions: functions.len(),
        ..ProjectPlan::default()
    };

    for function in functions {
        if !function.has_manifest() {
            debug!("Function '{}' has no {}, skipping", function.name, manifest_file);
            plan.skipped += 1;
            continue;
        }

        let manifest = FunctionManifest::load(&function.manifest_path)?;
        let planned = plan.copies.len();
        for (name, source) in manifest.custom_dependencies()? {
            match source {
                DependencySource::Local => {
                    let name = DependencyName::parse(&name).with_context(|| {
                        format!("in {}", function.manifest_path.display())
                    })?;
                    let source = dependency_dir(shared_root, name.as_str());
                    if !source.is_dir() {
                        return Err(SlsDepsError::SharedDependencyNotFound {
                            name: name.to_string(),
                            path: source.display().to_string(),
                        }
                        .into());
                    }
                    plan.copies.push(CopyJob {
                        target: function.dir.join(INSTALL_DIR).join(name.as_str()),
                        name: name.to_string(),
                        source,
                    });
                }
                DependencySource::Other(other) => {
                    debug!(
                        "Ignoring '{}' in function '{}': source '{}' is not local",
                        name, function.name, other
                    );
                }
            }
        }
        if plan.copies.len() > planned {
            plan.updated += 1;
        }
    }

    Ok(plan)
}
