//! Settings storage abstraction
//!
//! The store operates against a [`SettingsBackend`]: a flat key-value map
//! with hierarchical `section/key` names. Backends are injected explicitly;
//! [`MemoryBackend`] serves tests and ephemeral sessions, while
//! [`crate::settings::FileBackend`] adds durability.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value kinds a settings backend can hold.
///
/// Serialized untagged, so on disk a value is just the plain TOML scalar or
/// string array. Variant order matters for untagged deserialization: `Bool`
/// and `Int` must come before `Float` so scalars keep their native kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingsValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

/// Flat key-value storage for settings.
///
/// Reads and writes are synchronous and infallible; durability, where a
/// backend offers it, is a separate explicit step on the concrete type.
pub trait SettingsBackend {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<SettingsValue>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: String, value: SettingsValue);

    /// Removes `key` and its value. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);

    /// Returns true if `key` has a stored value.
    fn contains(&self, key: &str) -> bool;
}

/// In-memory settings backend
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: BTreeMap<String, SettingsValue>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<SettingsValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: String, value: SettingsValue) {
        self.values.insert(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_cycle() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get("a/b"), None);
        assert!(!backend.contains("a/b"));

        backend.set("a/b".to_string(), SettingsValue::Int(3));
        assert_eq!(backend.get("a/b"), Some(SettingsValue::Int(3)));
        assert!(backend.contains("a/b"));

        backend.set("a/b".to_string(), SettingsValue::Text("x".to_string()));
        assert_eq!(backend.get("a/b"), Some(SettingsValue::Text("x".to_string())));

        backend.remove("a/b");
        assert_eq!(backend.get("a/b"), None);

        // Removing again stays silent.
        backend.remove("a/b");
    }
}
