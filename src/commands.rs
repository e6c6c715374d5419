//! Command registration and command groups.
//!
//! This module provides:
//! - The `Command` handle trait packages implement for executable actions
//! - `CommandOptions` for group membership and accelerator binding
//! - `ToolSpec`, a one-call bundle registering a command together with its
//!   icon, label and accelerator
//! - The scope operations for commands and ordered command groups

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::Result;
use crate::icons::IconSpec;
use crate::labels::LabelSet;
use crate::scope::ConfigScope;
use crate::shortcuts::ShortcutBinding;

/// Handle for an executable action contributed by a package.
///
/// The engine stores and resolves these by name; invoking them is the
/// embedding application's business.
pub trait Command: Send + Sync {}

/// Options accepted by [`ConfigScope::add_command`].
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    pub command_group: Option<String>,
    pub accelerator: Option<String>,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the command to the named ordered group (created on first use).
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.command_group = Some(group.into());
        self
    }

    /// Also register a keyboard shortcut bound to the command.
    pub fn with_accelerator(mut self, combo: impl Into<String>) -> Self {
        self.accelerator = Some(combo.into());
        self
    }
}

/// Everything a toolbar tool needs, registered in one call.
///
/// Bundles the command handle with the icon, label, group membership and
/// accelerator that UI surfaces expect to find under the same name.
#[derive(Clone)]
pub struct ToolSpec {
    pub name: String,
    pub command: Arc<dyn Command>,
    pub command_group: Option<String>,
    pub icon: Option<IconSpec>,
    pub label: Option<LabelSet>,
    pub accelerator: Option<String>,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, command: Arc<dyn Command>) -> Self {
        Self {
            name: name.into(),
            command,
            command_group: None,
            icon: None,
            label: None,
            accelerator: None,
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.command_group = Some(group.into());
        self
    }

    pub fn with_icon(mut self, icon: IconSpec) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_label(mut self, label: impl Into<LabelSet>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_accelerator(mut self, combo: impl Into<String>) -> Self {
        self.accelerator = Some(combo.into());
        self
    }
}

impl ConfigScope {
    /// Register a command under `name` (overwrites a previous registration in
    /// this scope). Group membership and accelerator binding are applied from
    /// `options` in the same call.
    pub fn add_command(
        &self,
        name: impl Into<String>,
        command: Arc<dyn Command>,
        options: CommandOptions,
    ) {
        let name = name.into();
        debug!(scope = %self.path(), command = %name, "add command");
        self.commands.insert(name.clone(), command);
        if let Some(group) = options.command_group {
            self.add_command_to_group(&name, &group);
        }
        if let Some(combo) = options.accelerator {
            self.add_keyboard_shortcut(combo, ShortcutBinding::for_command(name));
        }
    }

    /// Hierarchical command lookup.
    pub fn get_command(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.lookup(|scope| &scope.commands, name)
    }

    pub fn require_command(&self, name: &str) -> Result<Arc<dyn Command>> {
        self.lookup_strict(|scope| &scope.commands, name)
    }

    /// Snapshot of this scope's local command mapping, in registration order.
    pub fn get_commands(&self) -> IndexMap<String, Arc<dyn Command>> {
        self.commands.snapshot()
    }

    /// Members of a scope-local command group, in association order. Unknown
    /// groups are empty, not an error.
    pub fn get_command_group(&self, name: &str) -> Vec<String> {
        self.command_groups
            .read()
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    /// Register command, icon, label and accelerator for one tool name.
    pub fn add_tool(&self, tool: ToolSpec) {
        let ToolSpec {
            name,
            command,
            command_group,
            icon,
            label,
            accelerator,
        } = tool;
        let mut options = CommandOptions::new();
        if let Some(group) = command_group {
            options = options.in_group(group);
        }
        if let Some(combo) = accelerator {
            options = options.with_accelerator(combo);
        }
        self.add_command(name.clone(), command, options);
        if let Some(icon) = icon {
            self.add_icon(name.clone(), icon);
        }
        if let Some(label) = label {
            self.add_label(name, label);
        }
    }

    fn add_command_to_group(&self, command: &str, group: &str) {
        let mut groups = self.command_groups.write();
        groups
            .entry(group.to_string())
            .or_default()
            .push(command.to_string());
    }
}
