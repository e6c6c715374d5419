//! Per-scope, per-category key→value storage.
//!
//! One `Registry` instance backs one category of one scope. Iteration order
//! is registration order (first registration of a key fixes its slot, a
//! later overwrite keeps it). Exclusivity is a property of the call site:
//! categories with overwrite semantics go through [`Registry::insert`],
//! exclusive categories through [`Registry::insert_unique`].

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::error::{Category, ConfigError, Result};

pub(crate) struct Registry<V> {
    category: Category,
    entries: RwLock<IndexMap<String, V>>,
}

impl<V: Clone> Registry<V> {
    pub(crate) fn new(category: Category) -> Self {
        Self {
            category,
            entries: RwLock::new(IndexMap::new()),
        }
    }

    pub(crate) fn category(&self) -> Category {
        self.category
    }

    /// Store `value` under `key`, silently replacing an earlier entry.
    pub(crate) fn insert(&self, key: impl Into<String>, value: V) {
        self.entries.write().insert(key.into(), value);
    }

    /// Store `value` under `key`, failing when `key` is already present in
    /// this registry. Entries in other scopes never count toward the check.
    pub(crate) fn insert_unique(&self, key: impl Into<String>, value: V) -> Result<()> {
        let key = key.into();
        let mut entries = self.entries.write();
        if entries.contains_key(&key) {
            return Err(ConfigError::DuplicateRegistration {
                category: self.category,
                key,
            });
        }
        entries.insert(key, value);
        Ok(())
    }

    pub(crate) fn get(&self, key: &str) -> Option<V> {
        self.entries.read().get(key).cloned()
    }

    /// Clone of the full mapping, in registration order.
    pub(crate) fn snapshot(&self) -> IndexMap<String, V> {
        self.entries.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites() {
        let registry: Registry<u32> = Registry::new(Category::Value);
        registry.insert("answer", 1);
        registry.insert("answer", 42);
        assert_eq!(registry.get("answer"), Some(42));
    }

    #[test]
    fn test_insert_unique_rejects_second_registration() {
        let registry: Registry<u32> = Registry::new(Category::Importer);
        registry.insert_unique("html", 1).unwrap();
        let err = registry.insert_unique("html", 2).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateRegistration {
                category: Category::Importer,
                key: "html".to_string(),
            }
        );
        // The first registration stays in place.
        assert_eq!(registry.get("html"), Some(1));
    }

    #[test]
    fn test_snapshot_preserves_registration_order() {
        let registry: Registry<u32> = Registry::new(Category::Value);
        registry.insert("c", 3);
        registry.insert("a", 1);
        registry.insert("b", 2);
        let snapshot = registry.snapshot();
        let keys: Vec<&str> = snapshot.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_get_missing_is_none() {
        let registry: Registry<u32> = Registry::new(Category::Value);
        assert_eq!(registry.get("missing"), None);
        assert!(registry.snapshot().is_empty());
    }
}
