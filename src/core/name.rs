//! Shared dependency names.
//!
//! A [`DependencyName`] doubles as a directory name under the shared root and
//! as a key in every function manifest's `customDependencies` map, so it uses
//! the same rule the serverless framework applies to function names:
//! 1 to 20 characters drawn from `[A-Za-z0-9_-]`.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::core::error::SlsDepsError;

/// Longest accepted dependency name, in characters.
pub const MAX_NAME_LEN: usize = 20;

fn invalid_char_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]").expect("static regex is valid"))
}

/// A validated shared dependency name.
///
/// The only way to obtain one is [`DependencyName::parse`] (or `FromStr`),
/// so holding a value means validation already happened.
///
/// # Examples
///
/// ```rust
/// use sls_deps::core::DependencyName;
///
/// let name = DependencyName::parse("db-client").unwrap();
/// assert_eq!(name.as_str(), "db-client");
///
/// assert!(DependencyName::parse("has space").is_err());
/// assert!(DependencyName::parse("this-name-is-way-too-long").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyName(String);

impl DependencyName {
    /// Validate `raw` and wrap it.
    ///
    /// Leading and trailing whitespace is not trimmed; `" utils"` is rejected
    /// like any other invalid character.
    pub fn parse(raw: &str) -> Result<Self, SlsDepsError> {
        if let Some(reason) = validation_failure(raw) {
            return Err(SlsDepsError::InvalidDependencyName {
                name: raw.to_string(),
                reason,
            });
        }
        Ok(Self(raw.to_string()))
    }

    /// Borrow the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Describe why `raw` is not a valid dependency name, or `None` if it is.
///
/// Shared by [`DependencyName::parse`] and the interactive prompt validator so
/// both report the same reason.
#[must_use]
pub fn validation_failure(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return Some("name is empty".to_string());
    }

    let len = raw.chars().count();
    if len > MAX_NAME_LEN {
        return Some(format!("name is {len} characters long (maximum {MAX_NAME_LEN})"));
    }

    invalid_char_pattern()
        .find(raw)
        .map(|m| format!("contains invalid character '{}'", m.as_str()))
}

impl fmt::Display for DependencyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DependencyName {
    type Err = SlsDepsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DependencyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
