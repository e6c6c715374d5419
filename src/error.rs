//! Error types for configuration composition.
//!
//! Every failure here is an authoring defect in a package or a panel
//! specification, raised synchronously at the offending call. Nothing is
//! retried or recovered internally; non-strict lookups return `Option`
//! instead of failing, which is the normal path for consumers that tolerate
//! missing configuration.

use std::fmt;

use thiserror::Error;

/// Registry categories, used in error messages and log fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Value,
    Command,
    Component,
    Converter,
    DocumentLoader,
    DocumentSerializer,
    Exporter,
    Icon,
    Importer,
    KeyboardShortcut,
    Label,
    NodeType,
    ToolPanel,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Value => "value",
            Category::Command => "command",
            Category::Component => "component",
            Category::Converter => "converter",
            Category::DocumentLoader => "document loader",
            Category::DocumentSerializer => "document serializer",
            Category::Exporter => "exporter",
            Category::Icon => "icon",
            Category::Importer => "importer",
            Category::KeyboardShortcut => "keyboard shortcut",
            Category::Label => "label",
            Category::NodeType => "node type",
            Category::ToolPanel => "tool panel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while composing or reading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A key was registered twice in the same scope for a category that
    /// requires per-scope exclusivity. Shadowing a parent's entry from a
    /// child scope is not a collision.
    #[error("{category} already registered for '{key}'")]
    DuplicateRegistration { category: Category, key: String },

    #[error("child scope '{name}' already exists")]
    DuplicateScope { name: String },

    #[error("converter for format '{format}' needs an associated type")]
    MissingConverterType { format: String },

    #[error("'{field}' is required for tool panel item type '{kind}'")]
    InvalidSpecification { kind: String, field: &'static str },

    #[error("unsupported tool panel item type '{kind}'")]
    UnsupportedItemType { kind: String },

    /// Strict lookup or strict panel retrieval found nothing, here or in any
    /// ancestor scope.
    #[error("no {category} registered for '{key}'")]
    NotFound { category: Category, key: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
