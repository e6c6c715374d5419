//! Localized label sets.
//!
//! A label set maps language codes to display text. The engine stores and
//! resolves them by key; template evaluation and locale selection belong to
//! the embedding application's label provider.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::scope::ConfigScope;

/// Language used when a label is registered from a bare string.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Language → display text for one label key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet {
    pub translations: IndexMap<String, String>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(language.into(), text.into());
        self
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.translations.get(language).map(String::as_str)
    }
}

impl From<&str> for LabelSet {
    fn from(text: &str) -> Self {
        LabelSet::new().with(DEFAULT_LANGUAGE, text)
    }
}

impl From<String> for LabelSet {
    fn from(text: String) -> Self {
        LabelSet::new().with(DEFAULT_LANGUAGE, text)
    }
}

impl ConfigScope {
    /// Register the label set for `name` (overwrites in this scope). A bare
    /// string registers as the default language.
    pub fn add_label(&self, name: impl Into<String>, label: impl Into<LabelSet>) {
        let name = name.into();
        debug!(scope = %self.path(), label = %name, "add label");
        self.labels.insert(name, label.into());
    }

    /// Hierarchical label lookup.
    pub fn get_label_set(&self, name: &str) -> Option<LabelSet> {
        self.lookup(|scope| &scope.labels, name)
    }

    pub fn require_label_set(&self, name: &str) -> Result<LabelSet> {
        self.lookup_strict(|scope| &scope.labels, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_string_registers_default_language() {
        let root = ConfigScope::root();
        root.add_label("insert-figure", "Insert Figure");
        let label = root.get_label_set("insert-figure").unwrap();
        assert_eq!(label.get(DEFAULT_LANGUAGE), Some("Insert Figure"));
    }

    #[test]
    fn test_multilingual_label_set() {
        let root = ConfigScope::root();
        root.add_label(
            "insert-figure",
            LabelSet::new()
                .with("en", "Insert Figure")
                .with("de", "Abbildung einfügen"),
        );
        let label = root.get_label_set("insert-figure").unwrap();
        assert_eq!(label.get("de"), Some("Abbildung einfügen"));
        assert_eq!(label.get("fr"), None);
    }

    #[test]
    fn test_child_overrides_parent_label() {
        let root = ConfigScope::root();
        root.add_label("save", "Save");
        let child = root.create_child("metadata").unwrap();
        child.add_label("save", "Save Metadata");
        assert_eq!(
            child.get_label_set("save").unwrap().get(DEFAULT_LANGUAGE),
            Some("Save Metadata")
        );
        assert_eq!(
            root.get_label_set("save").unwrap().get(DEFAULT_LANGUAGE),
            Some("Save")
        );
    }
}
