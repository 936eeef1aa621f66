//! Entry file templates for new shared dependencies.

use anyhow::{Context, Result};
use tera::{Context as TeraContext, Tera};

const JS_TEMPLATE: &str = r#"'use strict';

/**
 * Shared dependency: {{ name }}
 *
 * Functions that declare "{{ name }}": "local" under customDependencies
 * receive a copy of this directory when dependencies are installed.
 */
module.exports = {};
"#;

const ESM_TEMPLATE: &str = r#"/**
 * Shared dependency: {{ name }}
 *
 * Functions that declare "{{ name }}": "local" under customDependencies
 * receive a copy of this directory when dependencies are installed.
 */
export default {};
"#;

const PY_TEMPLATE: &str = r#""""Shared dependency: {{ name }}

Functions that declare "{{ name }}": "local" under customDependencies
receive a copy of this directory when dependencies are installed.
"""
"#;

const GENERIC_TEMPLATE: &str = r#"Shared dependency: {{ name }}
"#;

/// Template registered for each known entry file extension.
const TEMPLATES: &[(&str, &str)] = &[
    ("js", JS_TEMPLATE),
    ("cjs", JS_TEMPLATE),
    ("ts", ESM_TEMPLATE),
    ("mjs", ESM_TEMPLATE),
    ("py", PY_TEMPLATE),
];

const GENERIC_NAME: &str = "generic";

/// Renders the entry file of a freshly created shared dependency.
pub struct EntryTemplates {
    tera: Tera,
}

impl EntryTemplates {
    /// Build the renderer with every built-in template registered.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(
            TEMPLATES.iter().copied().chain(std::iter::once((GENERIC_NAME, GENERIC_TEMPLATE))),
        )
        .context("Failed to register entry file templates")?;
        Ok(Self {
            tera,
        })
    }

    /// Whether `extension` has a dedicated template.
    #[must_use]
    pub fn is_known(extension: &str) -> bool {
        TEMPLATES.iter().any(|(ext, _)| *ext == extension)
    }

    /// Render the entry file for dependency `name` with the given extension.
    ///
    /// Unknown extensions get a plain-text template holding only the
    /// dependency name.
    pub fn render(&self, extension: &str, name: &str) -> Result<String> {
        let template = if Self::is_known(extension) {
            extension
        } else {
            GENERIC_NAME
        };

        let mut context = TeraContext::new();
        context.insert("name", name);

        self.tera
            .render(template, &context)
            .with_context(|| format!("Failed to render '{template}' entry template for '{name}'"))
    }
}
