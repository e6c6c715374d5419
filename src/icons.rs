//! Icon attribute mappings.
//!
//! The engine stores an attribute map per icon name (e.g. which fontawesome
//! class to use) and resolves it hierarchically for an external icon
//! provider. Rendering is not its business.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::scope::ConfigScope;

/// Attribute mapping for one icon name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconSpec {
    pub attributes: IndexMap<String, String>,
}

impl IconSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// The common case: an icon backed by a fontawesome class.
    pub fn fontawesome(class: impl Into<String>) -> Self {
        Self::new().with_attribute("fontawesome", class)
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

impl ConfigScope {
    /// Register the attribute mapping for `name`, replacing any previous
    /// mapping in this scope outright.
    pub fn add_icon(&self, name: impl Into<String>, icon: IconSpec) {
        let name = name.into();
        debug!(scope = %self.path(), icon = %name, "add icon");
        self.icons.insert(name, icon);
    }

    /// Hierarchical icon lookup.
    pub fn get_icon(&self, name: &str) -> Option<IconSpec> {
        self.lookup(|scope| &scope.icons, name)
    }

    pub fn require_icon(&self, name: &str) -> Result<IconSpec> {
        self.lookup_strict(|scope| &scope.icons, name)
    }
}
