//! Document-level collaborator shapes: loaders, serializers, node types.
//!
//! This module provides:
//! - `Document` - opaque handle for the document instances codecs work on
//! - `DocumentLoaderFactory` / `DocumentSerializerFactory` registration,
//!   exclusive per document type and scope
//! - `NodeType` - schema contributions keyed by their own type name
//!
//! Loader and serializer lookup is local-only and instantiates a fresh
//! instance per call from the options stored at registration.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::Result;
use crate::scope::ConfigScope;
use crate::Options;

/// Opaque document handle passed through to codec factories.
pub trait Document: Send + Sync {}

/// A document schema node contributed by a package.
pub trait NodeType: Send + Sync {
    /// Registry key; unique per scope.
    fn type_name(&self) -> &str;
}

/// A loader instance for one document type.
pub trait DocumentLoader: Send + Sync {}

/// A serializer instance for one document type.
pub trait DocumentSerializer: Send + Sync {}

pub trait DocumentLoaderFactory: Send + Sync {
    fn create(&self, options: &Options) -> Arc<dyn DocumentLoader>;
}

pub trait DocumentSerializerFactory: Send + Sync {
    fn create(&self, options: &Options) -> Arc<dyn DocumentSerializer>;
}

#[derive(Clone)]
pub(crate) struct LoaderRegistration {
    pub(crate) factory: Arc<dyn DocumentLoaderFactory>,
    pub(crate) options: Options,
}

#[derive(Clone)]
pub(crate) struct SerializerRegistration {
    pub(crate) factory: Arc<dyn DocumentSerializerFactory>,
    pub(crate) options: Options,
}

impl ConfigScope {
    /// Register a loader for `doc_type`. Exclusive per scope.
    pub fn register_document_loader(
        &self,
        doc_type: impl Into<String>,
        factory: Arc<dyn DocumentLoaderFactory>,
        options: Options,
    ) -> Result<()> {
        let doc_type = doc_type.into();
        debug!(scope = %self.path(), doc_type = %doc_type, "register document loader");
        self.document_loaders
            .insert_unique(doc_type, LoaderRegistration { factory, options })
    }

    /// Register a serializer for `doc_type`. Exclusive per scope.
    pub fn register_document_serializer(
        &self,
        doc_type: impl Into<String>,
        factory: Arc<dyn DocumentSerializerFactory>,
        options: Options,
    ) -> Result<()> {
        let doc_type = doc_type.into();
        debug!(scope = %self.path(), doc_type = %doc_type, "register document serializer");
        self.document_serializers
            .insert_unique(doc_type, SerializerRegistration { factory, options })
    }

    /// Instantiate a loader for `doc_type` from this scope's registration.
    /// Local-only; every call builds a fresh instance with the stored
    /// options.
    pub fn get_document_loader(&self, doc_type: &str) -> Option<Arc<dyn DocumentLoader>> {
        self.document_loaders
            .get(doc_type)
            .map(|registration| registration.factory.create(&registration.options))
    }

    /// Instantiate a serializer for `doc_type`. Local-only, fresh per call.
    pub fn get_document_serializer(&self, doc_type: &str) -> Option<Arc<dyn DocumentSerializer>> {
        self.document_serializers
            .get(doc_type)
            .map(|registration| registration.factory.create(&registration.options))
    }

    /// Register a schema node under its own type name. Exclusive per scope.
    pub fn add_node(&self, node: Arc<dyn NodeType>) -> Result<()> {
        let type_name = node.type_name().to_string();
        debug!(scope = %self.path(), node = %type_name, "add node type");
        self.nodes.insert_unique(type_name, node)
    }

    /// This scope's node-type catalogue, in registration order, for an
    /// external schema builder.
    pub fn get_nodes(&self) -> IndexMap<String, Arc<dyn NodeType>> {
        self.nodes.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use serde_json::Value;

    use super::*;
    use crate::error::{Category, ConfigError};

    struct NullLoader;

    impl DocumentLoader for NullLoader {}

    struct RecordingLoaderFactory {
        seen: Mutex<Option<Options>>,
    }

    impl DocumentLoaderFactory for RecordingLoaderFactory {
        fn create(&self, options: &Options) -> Arc<dyn DocumentLoader> {
            *self.seen.lock() = Some(options.clone());
            Arc::new(NullLoader)
        }
    }

    struct Node(&'static str);

    impl NodeType for Node {
        fn type_name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_loader_created_with_stored_options_per_call() {
        let root = ConfigScope::root();
        let factory = Arc::new(RecordingLoaderFactory {
            seen: Mutex::new(None),
        });
        let mut options = Options::new();
        options.insert("doc_type".to_string(), Value::from("article"));
        root.register_document_loader("article", factory.clone(), options.clone())
            .unwrap();

        let first = root.get_document_loader("article").unwrap();
        let second = root.get_document_loader("article").unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(factory.seen.lock().clone(), Some(options));
    }

    #[test]
    fn test_duplicate_loader_type_is_rejected() {
        let root = ConfigScope::root();
        let factory = Arc::new(RecordingLoaderFactory {
            seen: Mutex::new(None),
        });
        root.register_document_loader("article", factory.clone(), Options::new())
            .unwrap();
        let err = root
            .register_document_loader("article", factory, Options::new())
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateRegistration {
                category: Category::DocumentLoader,
                key: "article".to_string()
            }
        );
    }

    #[test]
    fn test_loader_lookup_is_scope_local() {
        let root = ConfigScope::root();
        let factory = Arc::new(RecordingLoaderFactory {
            seen: Mutex::new(None),
        });
        root.register_document_loader("article", factory, Options::new())
            .unwrap();
        let child = root.create_child("metadata").unwrap();
        assert!(child.get_document_loader("article").is_none());
        assert!(root.get_document_loader("article").is_some());
    }

    #[test]
    fn test_nodes_are_keyed_by_type_name_and_exclusive() {
        let root = ConfigScope::root();
        root.add_node(Arc::new(Node("paragraph"))).unwrap();
        root.add_node(Arc::new(Node("figure"))).unwrap();
        let err = root.add_node(Arc::new(Node("figure"))).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateRegistration {
                category: Category::NodeType,
                key: "figure".to_string()
            }
        );
        let nodes = root.get_nodes();
        let names: Vec<&str> = nodes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["paragraph", "figure"]);
    }

    #[test]
    fn test_child_may_shadow_parent_node_type() {
        let root = ConfigScope::root();
        root.add_node(Arc::new(Node("figure"))).unwrap();
        let child = root.create_child("metadata").unwrap();
        assert!(child.add_node(Arc::new(Node("figure"))).is_ok());
    }
}
