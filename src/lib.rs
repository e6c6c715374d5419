//! Folio configuration composition engine.
//!
//! An extensible application assembles its behavior (commands, tool panels,
//! file converters, icons, labels, document node types) at startup from
//! packages, each contributing entries into a shared configuration. This
//! crate is that configuration: a tree of [`ConfigScope`]s with one registry
//! per category, parent-delegating lookup so child scopes override their
//! ancestors, synchronous package imports, and a recursive tool-panel
//! compiler with a per-scope cache.
//!
//! # Bootstrap
//!
//! The embedding application creates the root scope once, imports its
//! packages, and keeps the root alive for its whole lifetime:
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_config::{ConfigScope, Options, Package, Result};
//!
//! struct EditorPackage;
//!
//! impl Package for EditorPackage {
//!     fn name(&self) -> &str {
//!         "editor"
//!     }
//!
//!     fn configure(&self, scope: &Arc<ConfigScope>, _options: &Options) -> Result<()> {
//!         scope.set_value("autosave-interval", serde_json::json!(30));
//!         scope.add_label("save", "Save");
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let root = ConfigScope::root();
//! root.import(&EditorPackage)?;
//! assert_eq!(root.get_value("autosave-interval"), Some(serde_json::json!(30)));
//! # Ok(())
//! # }
//! ```
//!
//! Composition is a single synchronous pass; afterwards the tree is read
//! concurrently through the lookup operations.

pub mod codecs;
pub mod commands;
pub mod components;
pub mod converters;
pub mod documents;
pub mod error;
pub mod icons;
pub mod labels;
pub mod logging;
pub mod package;
pub mod panels;
pub mod scope;
pub mod shortcuts;

/// Free-form options map handed to packages, codec factories and loaders.
pub type Options = serde_json::Map<String, serde_json::Value>;

pub use codecs::{
    CodecContext, CodecSpec, Exporter, ExporterFactory, Importer, ImporterFactory,
};
pub use commands::{Command, CommandOptions, ToolSpec};
pub use components::{Component, DropHandler};
pub use converters::{Converter, ConverterFactory, ConverterSource};
pub use documents::{
    Document, DocumentLoader, DocumentLoaderFactory, DocumentSerializer,
    DocumentSerializerFactory, NodeType,
};
pub use error::{Category, ConfigError, Result};
pub use icons::IconSpec;
pub use labels::LabelSet;
pub use package::Package;
pub use panels::{
    CommandItem, ContainerItem, ContainerKind, ToolPanelItem, ToolPanelItemSpec,
};
pub use scope::ConfigScope;
pub use shortcuts::{KeyboardShortcut, Platform, ShortcutBinding};
