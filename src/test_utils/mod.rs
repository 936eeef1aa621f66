//! Test utilities for sls-deps
//!
//! Helpers shared by unit tests and the integration suite:
//! - [`TestProject`] builds a throwaway serverless project on disk
//! - [`ScriptedPrompter`] answers prompts from a script instead of a terminal
//! - [`RecordingInstaller`] records installer calls and can simulate failure
//!
//! # Example
//!
//! ```rust,no_run
//! use sls_deps::test_utils::TestProject;
//!
//! let project = TestProject::new().unwrap();
//! project.add_function("hello").unwrap();
//! project.add_shared("utils").unwrap();
//! assert!(project.function_dir("hello").join("package.json").is_file());
//! ```

pub mod doubles;
pub mod fixtures;

pub use doubles::{RecordingInstaller, ScriptedPrompter};
pub use fixtures::TestProject;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. With `level` set, that level is used;
/// otherwise `RUST_LOG` is honored, and without either nothing is logged.
///
/// ```bash
/// RUST_LOG=sls_deps=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
