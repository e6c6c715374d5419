//! Converter registration.
//!
//! Converters are organized two levels deep: format → (sub-type →
//! converter). A scope's converter table for a format is local-only;
//! hierarchical fallback happens one level up, in importer/exporter
//! creation, not here.

use std::sync::Arc;

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::scope::ConfigScope;

/// A single node/format converter contributed by a package.
pub trait Converter: Send + Sync {
    /// Sub-type identifier this converter handles, e.g. a node type name.
    /// Must be non-empty; registration rejects converters without one.
    fn kind(&self) -> &str;
}

/// Builds converter instances at registration time.
pub trait ConverterFactory: Send + Sync {
    fn create(&self) -> Arc<dyn Converter>;
}

/// Either a ready converter instance or a factory to instantiate eagerly.
pub enum ConverterSource {
    Instance(Arc<dyn Converter>),
    Factory(Arc<dyn ConverterFactory>),
}

impl ConverterSource {
    pub fn instance(converter: Arc<dyn Converter>) -> Self {
        ConverterSource::Instance(converter)
    }

    pub fn factory(factory: Arc<dyn ConverterFactory>) -> Self {
        ConverterSource::Factory(factory)
    }
}

impl From<Arc<dyn Converter>> for ConverterSource {
    fn from(converter: Arc<dyn Converter>) -> Self {
        ConverterSource::Instance(converter)
    }
}

impl From<Arc<dyn ConverterFactory>> for ConverterSource {
    fn from(factory: Arc<dyn ConverterFactory>) -> Self {
        ConverterSource::Factory(factory)
    }
}

impl ConfigScope {
    /// Register a converter for `format` under the converter's own sub-type
    /// (overwrites a same-kind registration in this scope). Factories are
    /// instantiated here, once.
    pub fn add_converter(
        &self,
        format: impl Into<String>,
        source: impl Into<ConverterSource>,
    ) -> Result<()> {
        let format = format.into();
        let converter = match source.into() {
            ConverterSource::Instance(converter) => converter,
            ConverterSource::Factory(factory) => factory.create(),
        };
        let kind = converter.kind().to_string();
        if kind.is_empty() {
            return Err(ConfigError::MissingConverterType { format });
        }
        debug!(scope = %self.path(), format = %format, kind = %kind, "add converter");
        self.converters
            .write()
            .entry(format)
            .or_default()
            .insert(kind, converter);
        Ok(())
    }

    /// All converters registered for `format` in this scope, in registration
    /// order. Empty when the format is unknown locally; ancestors are never
    /// consulted.
    pub fn get_converters(&self, format: &str) -> Vec<Arc<dyn Converter>> {
        self.converters
            .read()
            .get(format)
            .map(|by_kind| by_kind.values().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KindConverter(&'static str);

    impl Converter for KindConverter {
        fn kind(&self) -> &str {
            self.0
        }
    }

    struct KindFactory(&'static str);

    impl ConverterFactory for KindFactory {
        fn create(&self) -> Arc<dyn Converter> {
            Arc::new(KindConverter(self.0))
        }
    }

    #[test]
    fn test_empty_kind_is_rejected() {
        let root = ConfigScope::root();
        let err = root
            .add_converter("article", ConverterSource::instance(Arc::new(KindConverter(""))))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingConverterType {
                format: "article".to_string()
            }
        );
        assert!(root.get_converters("article").is_empty());
    }

    #[test]
    fn test_same_kind_overwrites_within_scope() {
        let root = ConfigScope::root();
        let first: Arc<dyn Converter> = Arc::new(KindConverter("paragraph"));
        let second: Arc<dyn Converter> = Arc::new(KindConverter("paragraph"));
        root.add_converter("article", ConverterSource::instance(Arc::clone(&first)))
            .unwrap();
        root.add_converter("article", ConverterSource::instance(Arc::clone(&second)))
            .unwrap();
        let converters = root.get_converters("article");
        assert_eq!(converters.len(), 1);
        assert!(Arc::ptr_eq(&converters[0], &second));
    }

    #[test]
    fn test_factory_is_instantiated_at_registration() {
        let root = ConfigScope::root();
        root.add_converter("article", ConverterSource::factory(Arc::new(KindFactory("figure"))))
            .unwrap();
        let converters = root.get_converters("article");
        assert_eq!(converters.len(), 1);
        assert_eq!(converters[0].kind(), "figure");
    }

    #[test]
    fn test_lookup_is_scope_local() {
        let root = ConfigScope::root();
        root.add_converter(
            "article",
            ConverterSource::instance(Arc::new(KindConverter("paragraph"))),
        )
        .unwrap();
        let child = root.create_child("metadata").unwrap();
        assert!(child.get_converters("article").is_empty());
        assert_eq!(root.get_converters("article").len(), 1);
    }
}
