//! The persisted contact data record

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The single persisted map of field values.
///
/// Stored as one opaque JSON unit under a single storage key. Keys not
/// present in the field registry may exist here but are never rendered;
/// absent keys read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsRecord(HashMap<String, String>);

impl SettingsRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Stored value for a field key; absent keys read as empty
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    /// Set the value for a field key
    pub fn set(&mut self, key: &str, value: String) {
        self.0.insert(key.to_string(), value);
    }

    /// Check if a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over all stored pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
