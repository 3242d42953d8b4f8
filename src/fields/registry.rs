//! Ordered registry of contact field definitions

use super::types::FieldDefinition;
use anyhow::Result;
use std::sync::RwLock;

/// Thread-safe registry of field definitions.
///
/// Registration order is preserved: diagnostics and the settings panel list
/// fields in the order they were registered. The registry is frozen when the
/// service object is constructed; late registrations are rejected.
pub struct FieldRegistry {
    inner: RwLock<Inner>,
}

struct Inner {
    fields: Vec<FieldDefinition>,
    frozen: bool,
}

impl FieldRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                fields: Vec::new(),
                frozen: false,
            }),
        }
    }

    /// Register a field, overriding the label if the key already exists
    ///
    /// Returns an error once the registry has been frozen.
    pub fn register(&self, key: &str, label: &str) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        if inner.frozen {
            anyhow::bail!("Field registry is frozen, cannot register '{}'", key);
        }

        if let Some(existing) = inner.fields.iter_mut().find(|f| f.key == key) {
            log::debug!("Overriding field: {} ({})", key, label);
            existing.label = label.to_string();
        } else {
            log::debug!("Registered field: {} ({})", key, label);
            inner.fields.push(FieldDefinition::new(key, label));
        }
        Ok(())
    }

    /// Check if a field is registered
    pub fn contains(&self, key: &str) -> bool {
        self.inner.read().unwrap().fields.iter().any(|f| f.key == key)
    }

    /// Get a field definition by key
    pub fn get(&self, key: &str) -> Option<FieldDefinition> {
        self.inner
            .read()
            .unwrap()
            .fields
            .iter()
            .find(|f| f.key == key)
            .cloned()
    }

    /// List all field definitions in registration order
    pub fn list(&self) -> Vec<FieldDefinition> {
        self.inner.read().unwrap().fields.clone()
    }

    /// List all field keys in registration order
    pub fn keys(&self) -> Vec<String> {
        self.inner
            .read()
            .unwrap()
            .fields
            .iter()
            .map(|f| f.key.clone())
            .collect()
    }

    /// Get total number of registered fields
    pub fn count(&self) -> usize {
        self.inner.read().unwrap().fields.len()
    }

    /// Freeze the registry; further registrations are errors
    pub fn freeze(&self) {
        let mut inner = self.inner.write().unwrap();
        if !inner.frozen {
            inner.frozen = true;
            log::debug!("Field registry frozen with {} fields", inner.fields.len());
        }
    }

    /// Check if the registry has been frozen
    pub fn is_frozen(&self) -> bool {
        self.inner.read().unwrap().frozen
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}
