//! Core types for the field registry

/// One named, independently stored contact attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Unique short identifier (e.g. "email", "phone")
    pub key: String,

    /// Human-readable label for the settings UI
    pub label: String,
}

impl FieldDefinition {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}
