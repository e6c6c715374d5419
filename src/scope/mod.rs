//! Configuration scopes - the tree at the heart of the engine.
//!
//! This module provides:
//! - `ConfigScope` - one node in the configuration tree, owning one registry
//!   per category plus its named child scopes
//! - Child creation and dot-path resolution
//! - Package import (the composition pass)
//! - The generic parent-delegating lookup shared by every hierarchical
//!   category
//! - The general-purpose value store
//!
//! # Ownership
//!
//! The embedding application creates the root once at bootstrap and keeps the
//! `Arc` alive for its whole lifetime. Scopes own their children; a child
//! holds only a `Weak` back-reference, so the tree is acyclic by
//! construction and a scope's parent never changes.
//!
//! # Concurrency
//!
//! Composition (imports, child creation, registration) is a single
//! synchronous bootstrap pass and must be serialized by the caller. After
//! bootstrap the registries are read-mostly; lookups may run from any number
//! of threads concurrently.

pub(crate) mod registry;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tracing::{debug, trace};

use crate::codecs::{ExporterRegistration, ImporterRegistration};
use crate::commands::Command;
use crate::components::{Component, DropHandler};
use crate::converters::Converter;
use crate::documents::{LoaderRegistration, NodeType, SerializerRegistration};
use crate::error::{Category, ConfigError, Result};
use crate::icons::IconSpec;
use crate::labels::LabelSet;
use crate::package::Package;
use crate::panels::{ToolPanelItem, ToolPanelItemSpec};
use crate::shortcuts::{KeyboardShortcut, Platform};
use crate::Options;

use registry::Registry;

/// One node in the configuration tree.
///
/// A scope owns one registry per contribution category and any named child
/// scopes created under it. Keys resolve against the scope itself first and
/// then against successive ancestors, so a child may shadow anything a
/// parent registered.
pub struct ConfigScope {
    name: String,
    platform: Platform,
    parent: Weak<ConfigScope>,
    children: RwLock<IndexMap<String, Arc<ConfigScope>>>,

    pub(crate) values: Registry<Value>,
    pub(crate) commands: Registry<Arc<dyn Command>>,
    pub(crate) command_groups: RwLock<IndexMap<String, Vec<String>>>,
    pub(crate) components: Registry<Arc<dyn Component>>,
    pub(crate) converters: RwLock<IndexMap<String, IndexMap<String, Arc<dyn Converter>>>>,
    pub(crate) document_loaders: Registry<LoaderRegistration>,
    pub(crate) document_serializers: Registry<SerializerRegistration>,
    pub(crate) drop_handlers: RwLock<Vec<Arc<dyn DropHandler>>>,
    pub(crate) exporters: Registry<ExporterRegistration>,
    pub(crate) icons: Registry<IconSpec>,
    pub(crate) importers: Registry<ImporterRegistration>,
    pub(crate) keyboard_shortcuts: RwLock<Vec<KeyboardShortcut>>,
    pub(crate) shortcuts_by_command: Registry<KeyboardShortcut>,
    pub(crate) labels: Registry<LabelSet>,
    pub(crate) nodes: Registry<Arc<dyn NodeType>>,
    pub(crate) tool_panels: Registry<Vec<ToolPanelItemSpec>>,
    pub(crate) compiled_panels: Mutex<HashMap<String, Arc<Vec<ToolPanelItem>>>>,
}

impl ConfigScope {
    fn new(name: String, platform: Platform, parent: Weak<ConfigScope>) -> Self {
        Self {
            name,
            platform,
            parent,
            children: RwLock::new(IndexMap::new()),
            values: Registry::new(Category::Value),
            commands: Registry::new(Category::Command),
            command_groups: RwLock::new(IndexMap::new()),
            components: Registry::new(Category::Component),
            converters: RwLock::new(IndexMap::new()),
            document_loaders: Registry::new(Category::DocumentLoader),
            document_serializers: Registry::new(Category::DocumentSerializer),
            drop_handlers: RwLock::new(Vec::new()),
            exporters: Registry::new(Category::Exporter),
            icons: Registry::new(Category::Icon),
            importers: Registry::new(Category::Importer),
            keyboard_shortcuts: RwLock::new(Vec::new()),
            shortcuts_by_command: Registry::new(Category::KeyboardShortcut),
            labels: Registry::new(Category::Label),
            nodes: Registry::new(Category::NodeType),
            tool_panels: Registry::new(Category::ToolPanel),
            compiled_panels: Mutex::new(HashMap::new()),
        }
    }

    /// Create the root scope for the current platform.
    pub fn root() -> Arc<ConfigScope> {
        Self::root_for_platform(Platform::current())
    }

    /// Create the root scope with an explicit platform target.
    ///
    /// Children inherit the platform; it only affects how keyboard shortcut
    /// labels are rendered.
    pub fn root_for_platform(platform: Platform) -> Arc<ConfigScope> {
        Arc::new(ConfigScope::new("root".to_string(), platform, Weak::new()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The parent scope, or `None` for the root.
    pub fn parent(&self) -> Option<Arc<ConfigScope>> {
        self.parent.upgrade()
    }

    /// Dot-joined path from the root, e.g. `root.article.metadata`.
    pub fn path(&self) -> String {
        let mut segments = vec![self.name.clone()];
        let mut ancestor = self.parent();
        while let Some(scope) = ancestor {
            segments.push(scope.name.clone());
            ancestor = scope.parent();
        }
        segments.reverse();
        segments.join(".")
    }

    /// Create a child scope named `name` under this scope and return it.
    pub fn create_child(self: &Arc<Self>, name: impl Into<String>) -> Result<Arc<ConfigScope>> {
        let name = name.into();
        let mut children = self.children.write();
        if children.contains_key(&name) {
            return Err(ConfigError::DuplicateScope { name });
        }
        let child = Arc::new(ConfigScope::new(
            name.clone(),
            self.platform,
            Arc::downgrade(self),
        ));
        children.insert(name, Arc::clone(&child));
        debug!(scope = %child.path(), "created child scope");
        Ok(child)
    }

    /// Direct child by name.
    pub fn child(&self, name: &str) -> Option<Arc<ConfigScope>> {
        self.children.read().get(name).cloned()
    }

    /// Resolve a dot-delimited path of child names, e.g. `article.metadata`.
    ///
    /// Only an exact, full-path match returns a scope. Any unresolved
    /// segment - including an empty path - yields `None`; a malformed path
    /// is indistinguishable from a missing scope by design.
    pub fn resolve_path(&self, path: &str) -> Option<Arc<ConfigScope>> {
        self.resolve_segments(path.split('.'))
    }

    /// Resolve a pre-split sequence of child names.
    pub fn resolve_segments<I, S>(&self, segments: I) -> Option<Arc<ConfigScope>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = segments.into_iter();
        let mut scope = self.child(segments.next()?.as_ref())?;
        for segment in segments {
            let next = scope.child(segment.as_ref())?;
            scope = next;
        }
        Some(scope)
    }

    /// Import a package with empty options.
    pub fn import(self: &Arc<Self>, package: &dyn Package) -> Result<()> {
        self.import_with(package, &Options::new())
    }

    /// Run a package's `configure` entry point against this scope.
    ///
    /// Composition is synchronous and single-pass: the package registers
    /// everything it has to say before this call returns, and it may create
    /// child scopes and import further packages into them. Imports are not
    /// transactional - when `configure` fails, registrations made before the
    /// failure stay in place and the error propagates to the caller.
    pub fn import_with(self: &Arc<Self>, package: &dyn Package, options: &Options) -> Result<()> {
        debug!(scope = %self.path(), package = package.name(), "importing package");
        package.configure(self, options)
    }

    // ------------------------------------------------------------------
    // Hierarchical lookup
    // ------------------------------------------------------------------

    /// Resolve `key` in this scope's registry, then in each ancestor's, until
    /// a match or the root is exhausted. The accessor selects the same
    /// category on every scope it visits.
    pub(crate) fn lookup<V: Clone>(
        &self,
        pick: fn(&ConfigScope) -> &Registry<V>,
        key: &str,
    ) -> Option<V> {
        if let Some(value) = pick(self).get(key) {
            return Some(value);
        }
        let mut ancestor = self.parent();
        while let Some(scope) = ancestor {
            if let Some(value) = pick(&scope).get(key) {
                return Some(value);
            }
            ancestor = scope.parent();
        }
        None
    }

    /// Strict variant of [`ConfigScope::lookup`]: exhaustion is an error.
    pub(crate) fn lookup_strict<V: Clone>(
        &self,
        pick: fn(&ConfigScope) -> &Registry<V>,
        key: &str,
    ) -> Result<V> {
        let category = pick(self).category();
        self.lookup(pick, key).ok_or_else(|| ConfigError::NotFound {
            category,
            key: key.to_string(),
        })
    }

    // ------------------------------------------------------------------
    // Values
    // ------------------------------------------------------------------

    /// Store a free-form value in this scope (overwrites).
    pub fn set_value(&self, key: impl Into<String>, value: Value) {
        let key = key.into();
        trace!(scope = %self.path(), key = %key, "set value");
        self.values.insert(key, value);
    }

    /// Hierarchical value lookup.
    pub fn get_value(&self, key: &str) -> Option<Value> {
        self.lookup(|scope| &scope.values, key)
    }

    pub fn require_value(&self, key: &str) -> Result<Value> {
        self.lookup_strict(|scope| &scope.values, key)
    }
}

impl fmt::Debug for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigScope")
            .field("path", &self.path())
            .field("children", &self.children.read().keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
