//! Recording shared dependencies in a manifest.

use anyhow::Result;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

use super::{CUSTOM_DEPENDENCIES_KEY, FunctionManifest, LOCAL_SOURCE};
use crate::core::DependencyName;

/// What attaching a dependency did to one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachOutcome {
    /// The dependency was not declared before
    Added,
    /// The dependency was declared with another source, now `"local"`
    Updated {
        /// The replaced source descriptor
        previous: Value,
    },
    /// Already declared as `"local"`; nothing was written
    Unchanged,
}

impl AttachOutcome {
    /// Whether the manifest content changed.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl FunctionManifest {
    /// Set `customDependencies[name] = "local"` in memory.
    ///
    /// Creates an empty `customDependencies` object first when the key is
    /// absent. An existing non-object value is left alone and reported as
    /// [`crate::core::SlsDepsError::ManifestInvalid`].
    pub fn attach(&mut self, name: &DependencyName) -> Result<AttachOutcome> {
        let not_an_object = self.not_an_object();
        let entry = self
            .document
            .entry(CUSTOM_DEPENDENCIES_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(deps) = entry else {
            return Err(not_an_object.into());
        };

        let local = Value::String(LOCAL_SOURCE.to_string());
        let outcome = match deps.insert(name.to_string(), local.clone()) {
            None => AttachOutcome::Added,
            Some(previous) if previous == local => AttachOutcome::Unchanged,
            Some(previous) => AttachOutcome::Updated {
                previous,
            },
        };
        Ok(outcome)
    }
}

/// Load the manifest at `path`, attach `name` and save it if anything changed.
///
/// An [`AttachOutcome::Unchanged`] manifest is not rewritten, so its bytes on
/// disk stay exactly as they were.
///
/// # Examples
///
/// ```rust,no_run
/// use sls_deps::core::DependencyName;
/// use sls_deps::manifest::attach_dependency;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let name = DependencyName::parse("utils")?;
/// let outcome = attach_dependency(Path::new("functions/hello/package.json"), &name)?;
/// println!("{outcome:?}");
/// # Ok(())
/// # }
/// ```
pub fn attach_dependency(path: &Path, name: &DependencyName) -> Result<AttachOutcome> {
    let mut manifest = FunctionManifest::load(path)?;
    let outcome = manifest.attach(name)?;

    if outcome.is_change() {
        manifest.save()?;
    }
    debug!("Attach '{}' to {}: {:?}", name, path.display(), outcome);
    Ok(outcome)
}
