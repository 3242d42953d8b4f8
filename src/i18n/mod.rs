//! Translation catalog with verbatim fallback
//!
//! Every user-facing string (labels, warnings, diagnostics) is looked up by
//! its source string within a fixed text domain. A missing translation falls
//! back to the source string, so an empty catalog is always valid.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Text domain for all strings owned by this crate.
pub const TEXT_DOMAIN: &str = "contact-data";

/// Source-string keyed translation catalog.
#[derive(Debug, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty (untranslated) catalog
    pub fn new() -> Self {
        Self {
            messages: HashMap::new(),
        }
    }

    /// Load translations from a TOML file of `"source" = "translation"` pairs
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let messages: HashMap<String, String> = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

        log::debug!(
            "Loaded {} translations for domain '{}'",
            messages.len(),
            TEXT_DOMAIN
        );
        Ok(Self { messages })
    }

    /// Translate a source string, falling back to it verbatim
    pub fn t<'a>(&'a self, source: &'a str) -> &'a str {
        self.messages
            .get(source)
            .map(String::as_str)
            .unwrap_or(source)
    }
}

/// Substitute `{0}`, `{1}`, ... placeholders in a message template
pub fn fill(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{}}}", i), arg);
    }
    out
}
