//! Per-invocation formatting options

use std::collections::HashMap;

/// Token replaced by the resolved value inside `pattern`
pub const VALUE_TOKEN: &str = "%value%";

/// Formatting options for one render call.
///
/// Constructed fresh per call; omitted options take the defaults below.
/// `pattern` takes precedence over `link`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrapped around non-empty output
    pub before: String,
    pub after: String,

    /// Wrap the value in a protocol-appropriate hyperlink
    pub link: bool,

    /// Also emit the output in place, in addition to returning it
    pub print: bool,

    /// Template containing a `%value%` token; overrides `link`
    pub pattern: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            before: String::new(),
            after: String::new(),
            link: true,
            print: true,
            pattern: None,
        }
    }
}

impl RenderOptions {
    /// Parse options from a placeholder's textual attribute bag
    ///
    /// Unknown attributes are ignored; unparsable booleans keep the default.
    pub fn from_attrs(attrs: &HashMap<String, String>) -> Self {
        let mut options = Self::default();

        if let Some(v) = attrs.get("before") {
            options.before = v.clone();
        }
        if let Some(v) = attrs.get("after") {
            options.after = v.clone();
        }
        if let Some(v) = attrs.get("link") {
            options.link = parse_bool(v).unwrap_or(options.link);
        }
        if let Some(v) = attrs.get("print") {
            options.print = parse_bool(v).unwrap_or(options.print);
        }
        if let Some(v) = attrs.get("pattern") {
            if !v.is_empty() {
                options.pattern = Some(v.clone());
            }
        }

        options
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
