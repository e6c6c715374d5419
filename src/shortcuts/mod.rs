//! Keyboard shortcut registration.
//!
//! This module provides:
//! - `KeyboardShortcut` - a raw combo, its platform-rendered label, and the
//!   binding it triggers
//! - `ShortcutBinding` - what a shortcut is bound to (optionally a command)
//! - The scope operations for the ordered shortcut list and the
//!   command→shortcut index
//!
//! Shortcuts are scope-local on purpose: listing a scope's shortcuts never
//! merges ancestors, unlike command or icon lookup.

mod display;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scope::ConfigScope;

pub use display::Platform;

/// What a keyboard shortcut triggers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutBinding {
    /// Command key to invoke, if the shortcut maps to a registered command.
    pub command: Option<String>,
}

impl ShortcutBinding {
    pub fn for_command(name: impl Into<String>) -> Self {
        Self {
            command: Some(name.into()),
        }
    }
}

/// One registered keyboard shortcut.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardShortcut {
    /// The raw combo exactly as registered, e.g. `CommandOrControl+B`.
    pub combo: String,
    /// Display label rendered for the scope's platform at registration time.
    pub label: String,
    pub binding: ShortcutBinding,
}

impl ConfigScope {
    /// Register a shortcut for `combo`.
    ///
    /// The display label is derived once, from the scope's platform. The
    /// entry is appended to the ordered shortcut list; when the binding
    /// names a command, it also replaces that command's index entry.
    pub fn add_keyboard_shortcut(&self, combo: impl Into<String>, binding: ShortcutBinding) {
        let combo = combo.into();
        let label = display::render_label(&combo, self.platform());
        debug!(scope = %self.path(), combo = %combo, label = %label, "add keyboard shortcut");
        let entry = KeyboardShortcut {
            combo,
            label,
            binding,
        };
        self.keyboard_shortcuts.write().push(entry.clone());
        if let Some(command) = entry.binding.command.clone() {
            self.shortcuts_by_command.insert(command, entry);
        }
    }

    /// This scope's shortcuts, in registration order. No parent fallback.
    pub fn get_keyboard_shortcuts(&self) -> Vec<KeyboardShortcut> {
        self.keyboard_shortcuts.read().clone()
    }

    /// The latest shortcut bound to `command` in this scope, if any.
    pub fn get_keyboard_shortcut_for_command(&self, command: &str) -> Option<KeyboardShortcut> {
        self.shortcuts_by_command.get(command)
    }
}

#[cfg(test)]
#[path = "shortcuts_tests.rs"]
mod tests;
