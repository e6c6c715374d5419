//! Importer and exporter wiring.
//!
//! This module provides:
//! - `ImporterFactory` / `ExporterFactory` - the collaborator traits codecs
//!   register with a scope
//! - `CodecSpec` - registration options, chiefly the converter-group list
//! - `CodecContext` - everything a factory receives when an instance is
//!   created
//! - `create_importer` / `create_exporter` with full parent delegation
//!
//! Unlike plain converter lookup, codec creation walks the scope chain: a
//! format unknown here is retried on the parent, and the scope that owns the
//! registration supplies the context (including its local converter tables).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::converters::Converter;
use crate::documents::Document;
use crate::error::Result;
use crate::scope::ConfigScope;
use crate::Options;

/// An import codec instance. Its reading API belongs to the embedding
/// application; the engine only constructs and hands it back.
pub trait Importer: Send + Sync {}

/// An export codec instance.
pub trait Exporter: Send + Sync {}

pub trait ImporterFactory: Send + Sync {
    fn create(&self, context: CodecContext) -> Arc<dyn Importer>;
}

pub trait ExporterFactory: Send + Sync {
    fn create(&self, context: CodecContext) -> Arc<dyn Exporter>;
}

/// Options recorded with an importer/exporter registration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CodecSpec {
    /// Converter-format keys to aggregate converters from, in listed order.
    /// Empty means: take the converters registered under the requested
    /// format itself.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub converter_groups: Vec<String>,
    /// Pass-through attributes for the factory.
    #[serde(flatten)]
    pub extra: Options,
}

impl CodecSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_converter_group(mut self, group: impl Into<String>) -> Self {
        self.converter_groups.push(group.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// What a codec factory is handed at creation time.
#[derive(Clone)]
pub struct CodecContext {
    /// The scope owning the registration (an ancestor of the requesting
    /// scope when creation was delegated).
    pub scope: Arc<ConfigScope>,
    pub document: Arc<dyn Document>,
    /// Caller-supplied options, passed through untouched.
    pub options: Options,
    /// Converters aggregated from the owning scope's local tables.
    pub converters: Vec<Arc<dyn Converter>>,
}

#[derive(Clone)]
pub(crate) struct ImporterRegistration {
    pub(crate) factory: Arc<dyn ImporterFactory>,
    pub(crate) spec: CodecSpec,
}

#[derive(Clone)]
pub(crate) struct ExporterRegistration {
    pub(crate) factory: Arc<dyn ExporterFactory>,
    pub(crate) spec: CodecSpec,
}

impl ConfigScope {
    /// Register an importer for `format`. Exclusive per scope; a child may
    /// still shadow an ancestor's registration for the same format.
    pub fn add_importer(
        &self,
        format: impl Into<String>,
        factory: Arc<dyn ImporterFactory>,
        spec: CodecSpec,
    ) -> Result<()> {
        let format = format.into();
        debug!(scope = %self.path(), format = %format, "add importer");
        self.importers
            .insert_unique(format, ImporterRegistration { factory, spec })
    }

    /// Register an exporter for `format`. Exclusive per scope.
    pub fn add_exporter(
        &self,
        format: impl Into<String>,
        factory: Arc<dyn ExporterFactory>,
        spec: CodecSpec,
    ) -> Result<()> {
        let format = format.into();
        debug!(scope = %self.path(), format = %format, "add exporter");
        self.exporters
            .insert_unique(format, ExporterRegistration { factory, spec })
    }

    /// Create an importer for `format`.
    ///
    /// The format is looked up strictly locally; on a miss the whole
    /// operation is delegated to the parent. `None` when no ancestor has the
    /// format registered - absence is a normal outcome the caller checks.
    pub fn create_importer(
        self: &Arc<Self>,
        format: &str,
        document: Arc<dyn Document>,
        options: Options,
    ) -> Option<Arc<dyn Importer>> {
        if let Some(registration) = self.importers.get(format) {
            let converters = self.collect_codec_converters(format, &registration.spec);
            debug!(
                scope = %self.path(),
                format = %format,
                converters = converters.len(),
                "create importer"
            );
            let context = CodecContext {
                scope: Arc::clone(self),
                document,
                options,
                converters,
            };
            Some(registration.factory.create(context))
        } else if let Some(parent) = self.parent() {
            parent.create_importer(format, document, options)
        } else {
            None
        }
    }

    /// Create an exporter for `format`. Same resolution rules as
    /// [`ConfigScope::create_importer`].
    pub fn create_exporter(
        self: &Arc<Self>,
        format: &str,
        document: Arc<dyn Document>,
        options: Options,
    ) -> Option<Arc<dyn Exporter>> {
        if let Some(registration) = self.exporters.get(format) {
            let converters = self.collect_codec_converters(format, &registration.spec);
            debug!(
                scope = %self.path(),
                format = %format,
                converters = converters.len(),
                "create exporter"
            );
            let context = CodecContext {
                scope: Arc::clone(self),
                document,
                options,
                converters,
            };
            Some(registration.factory.create(context))
        } else if let Some(parent) = self.parent() {
            parent.create_exporter(format, document, options)
        } else {
            None
        }
    }

    /// Converter aggregation for a codec registration: the listed converter
    /// groups in order, or the requested format's own converters when no
    /// groups are listed. Local tables only.
    fn collect_codec_converters(&self, format: &str, spec: &CodecSpec) -> Vec<Arc<dyn Converter>> {
        if spec.converter_groups.is_empty() {
            return self.get_converters(format);
        }
        let mut converters = Vec::new();
        for group in &spec.converter_groups {
            converters.extend(self.get_converters(group));
        }
        converters
    }
}
