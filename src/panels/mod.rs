//! Tool-panel specifications and their compiler.
//!
//! This module provides:
//! - `ToolPanelItemSpec` - the open, data-shaped panel specification packages
//!   author (in code via builders, or as JSON via serde)
//! - `ToolPanelItem` and friends - the closed, typed model the compiler
//!   produces
//! - Panel registration, compilation and the per-scope compilation cache
//!
//! A specification is a tree of typed items; compiling resolves
//! `command-group` references through the scope-local group table and splices
//! each expansion flat into its surrounding sequence.

mod compiler;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Options;

pub use compiler::{CommandItem, ContainerItem, ContainerKind, ToolPanelItem};

/// One node of an authored tool-panel specification.
///
/// `kind` is open on purpose: unknown discriminants are an authoring error
/// caught at compile time, not at construction. Extra attributes (`style`
/// and the like) ride along untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolPanelItemSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ToolPanelItemSpec>,
    #[serde(flatten)]
    pub attrs: Options,
}

impl ToolPanelItemSpec {
    fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: None,
            items: Vec::new(),
            attrs: Options::new(),
        }
    }

    pub fn command(name: impl Into<String>) -> Self {
        Self::new("command").named(name)
    }

    /// Expands to one `command` item per member of the named group.
    pub fn command_group(name: impl Into<String>) -> Self {
        Self::new("command-group").named(name)
    }

    pub fn switcher(items: impl IntoIterator<Item = ToolPanelItemSpec>) -> Self {
        Self::new("switcher").with_items(items)
    }

    pub fn prompt(items: impl IntoIterator<Item = ToolPanelItemSpec>) -> Self {
        Self::new("prompt").with_items(items)
    }

    pub fn group(items: impl IntoIterator<Item = ToolPanelItemSpec>) -> Self {
        Self::new("group").with_items(items)
    }

    pub fn dropdown(items: impl IntoIterator<Item = ToolPanelItemSpec>) -> Self {
        Self::new("dropdown").with_items(items)
    }

    pub fn separator() -> Self {
        Self::new("separator")
    }

    pub fn spacer() -> Self {
        Self::new("spacer")
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = ToolPanelItemSpec>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
#[path = "panels_tests.rs"]
mod tests;
