//! The tool-panel compiler and its per-scope cache.

use std::sync::Arc;

use tracing::debug;

use crate::error::{Category, ConfigError, Result};
use crate::scope::ConfigScope;
use crate::Options;

use super::ToolPanelItemSpec;

/// A resolved `command` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandItem {
    pub name: String,
    pub attrs: Options,
}

/// The four container shapes a panel may nest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Switcher,
    Prompt,
    Group,
    Dropdown,
}

impl ContainerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerKind::Switcher => "switcher",
            ContainerKind::Prompt => "prompt",
            ContainerKind::Group => "group",
            ContainerKind::Dropdown => "dropdown",
        }
    }
}

/// A resolved container with its compiled, flattened children.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerItem {
    pub kind: ContainerKind,
    pub name: Option<String>,
    pub items: Vec<ToolPanelItem>,
    pub attrs: Options,
}

/// One item of a compiled tool panel.
///
/// The compiled model is closed: group references are already expanded, so
/// there is no nested-sequence item and every level is flat.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolPanelItem {
    Command(CommandItem),
    Container(ContainerItem),
    Separator { attrs: Options },
    Spacer { attrs: Options },
}

impl ConfigScope {
    /// Register the specification for panel `name` (overwrites in this
    /// scope). Registration does not validate; compilation does.
    pub fn add_tool_panel(&self, name: impl Into<String>, spec: Vec<ToolPanelItemSpec>) {
        let name = name.into();
        debug!(scope = %self.path(), panel = %name, items = spec.len(), "add tool panel");
        self.tool_panels.insert(name, spec);
    }

    /// Compile and return panel `name`, or `Ok(None)` when no specification
    /// is registered in this scope.
    ///
    /// The first successful compilation is cached; every later call returns
    /// the same `Arc`, even if the group table or the panel specification
    /// changed in between. Compilation errors are not cached and surface on
    /// every call.
    pub fn get_tool_panel(&self, name: &str) -> Result<Option<Arc<Vec<ToolPanelItem>>>> {
        let Some(spec) = self.tool_panels.get(name) else {
            return Ok(None);
        };
        let mut cache = self.compiled_panels.lock();
        if let Some(compiled) = cache.get(name) {
            return Ok(Some(Arc::clone(compiled)));
        }
        let mut items = Vec::new();
        for item_spec in &spec {
            items.extend(self.compile_item(item_spec)?);
        }
        let compiled = Arc::new(items);
        cache.insert(name.to_string(), Arc::clone(&compiled));
        debug!(scope = %self.path(), panel = %name, items = compiled.len(), "compiled tool panel");
        Ok(Some(compiled))
    }

    /// Strict variant of [`ConfigScope::get_tool_panel`].
    pub fn require_tool_panel(&self, name: &str) -> Result<Arc<Vec<ToolPanelItem>>> {
        self.get_tool_panel(name)?.ok_or_else(|| ConfigError::NotFound {
            category: Category::ToolPanel,
            key: name.to_string(),
        })
    }

    /// Compile one specification node into the item sequence it contributes
    /// to its surrounding level. Most kinds contribute exactly one item;
    /// `command-group` contributes one `command` per group member.
    fn compile_item(&self, spec: &ToolPanelItemSpec) -> Result<Vec<ToolPanelItem>> {
        match spec.kind.as_str() {
            "command" => {
                let name = require_name(spec)?;
                Ok(vec![ToolPanelItem::Command(CommandItem {
                    name,
                    attrs: spec.attrs.clone(),
                })])
            }
            "command-group" => {
                let name = require_name(spec)?;
                // unknown groups expand to nothing; that is not an error
                Ok(self
                    .get_command_group(&name)
                    .into_iter()
                    .map(|member| {
                        ToolPanelItem::Command(CommandItem {
                            name: member,
                            attrs: Options::new(),
                        })
                    })
                    .collect())
            }
            "switcher" => self.compile_container(ContainerKind::Switcher, spec),
            "prompt" => self.compile_container(ContainerKind::Prompt, spec),
            "group" => self.compile_container(ContainerKind::Group, spec),
            "dropdown" => self.compile_container(ContainerKind::Dropdown, spec),
            "separator" => Ok(vec![ToolPanelItem::Separator {
                attrs: spec.attrs.clone(),
            }]),
            "spacer" => Ok(vec![ToolPanelItem::Spacer {
                attrs: spec.attrs.clone(),
            }]),
            other => Err(ConfigError::UnsupportedItemType {
                kind: other.to_string(),
            }),
        }
    }

    fn compile_container(
        &self,
        kind: ContainerKind,
        spec: &ToolPanelItemSpec,
    ) -> Result<Vec<ToolPanelItem>> {
        let mut items = Vec::new();
        for child in &spec.items {
            // extend, not push: group expansions splice into this level
            items.extend(self.compile_item(child)?);
        }
        Ok(vec![ToolPanelItem::Container(ContainerItem {
            kind,
            name: spec.name.clone(),
            items,
            attrs: spec.attrs.clone(),
        })])
    }
}

fn require_name(spec: &ToolPanelItemSpec) -> Result<String> {
    spec.name
        .clone()
        .ok_or_else(|| ConfigError::InvalidSpecification {
            kind: spec.kind.clone(),
            field: "name",
        })
}
