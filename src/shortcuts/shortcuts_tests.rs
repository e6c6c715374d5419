use std::sync::Arc;

use super::*;
use crate::commands::{Command, CommandOptions};
use crate::scope::ConfigScope;

struct Noop;

impl Command for Noop {}

#[test]
fn test_mac_label_substitutes_symbols() {
    let root = ConfigScope::root_for_platform(Platform::MacOS);
    root.add_keyboard_shortcut("CommandOrControl+B", ShortcutBinding::for_command("bold"));
    let shortcuts = root.get_keyboard_shortcuts();
    assert_eq!(shortcuts.len(), 1);
    assert_eq!(shortcuts[0].combo, "CommandOrControl+B");
    assert_eq!(shortcuts[0].label, "⌘B");
}

#[test]
fn test_non_mac_label_keeps_words_and_joiner() {
    let root = ConfigScope::root_for_platform(Platform::Linux);
    root.add_keyboard_shortcut("CommandOrControl+B", ShortcutBinding::for_command("bold"));
    assert_eq!(root.get_keyboard_shortcuts()[0].label, "Ctrl+B");
}

#[test]
fn test_raw_combo_is_identical_across_platforms() {
    let mac = ConfigScope::root_for_platform(Platform::MacOS);
    let linux = ConfigScope::root_for_platform(Platform::Linux);
    for scope in [&mac, &linux] {
        scope.add_keyboard_shortcut("CommandOrControl+B", ShortcutBinding::default());
    }
    let mac_shortcuts = mac.get_keyboard_shortcuts();
    let linux_shortcuts = linux.get_keyboard_shortcuts();
    assert_eq!(mac_shortcuts[0].combo, linux_shortcuts[0].combo);
    assert_ne!(mac_shortcuts[0].label, linux_shortcuts[0].label);
}

#[test]
fn test_shortcut_list_preserves_registration_order() {
    let root = ConfigScope::root_for_platform(Platform::Linux);
    root.add_keyboard_shortcut("Ctrl+Z", ShortcutBinding::for_command("undo"));
    root.add_keyboard_shortcut("Ctrl+Shift+Z", ShortcutBinding::for_command("redo"));
    root.add_keyboard_shortcut("Ctrl+S", ShortcutBinding::for_command("save"));
    let shortcuts = root.get_keyboard_shortcuts();
    let combos: Vec<&str> = shortcuts.iter().map(|entry| entry.combo.as_str()).collect();
    assert_eq!(combos, vec!["Ctrl+Z", "Ctrl+Shift+Z", "Ctrl+S"]);
}

#[test]
fn test_command_index_keeps_latest_entry() {
    let root = ConfigScope::root_for_platform(Platform::Linux);
    root.add_keyboard_shortcut("Ctrl+B", ShortcutBinding::for_command("bold"));
    root.add_keyboard_shortcut("CommandOrControl+B", ShortcutBinding::for_command("bold"));
    let indexed = root.get_keyboard_shortcut_for_command("bold").unwrap();
    assert_eq!(indexed.combo, "CommandOrControl+B");
    // both registrations stay in the ordered list
    assert_eq!(root.get_keyboard_shortcuts().len(), 2);
}

#[test]
fn test_binding_without_command_skips_index() {
    let root = ConfigScope::root_for_platform(Platform::Linux);
    root.add_keyboard_shortcut("Ctrl+K", ShortcutBinding::default());
    assert_eq!(root.get_keyboard_shortcuts().len(), 1);
    assert!(root.get_keyboard_shortcut_for_command("anything").is_none());
}

#[test]
fn test_accelerator_option_registers_shortcut() {
    let root = ConfigScope::root_for_platform(Platform::MacOS);
    root.add_command(
        "bold",
        Arc::new(Noop),
        CommandOptions::new().with_accelerator("CommandOrControl+B"),
    );
    let indexed = root.get_keyboard_shortcut_for_command("bold").unwrap();
    assert_eq!(indexed.combo, "CommandOrControl+B");
    assert_eq!(indexed.label, "⌘B");
    assert_eq!(indexed.binding, ShortcutBinding::for_command("bold"));
}

#[test]
fn test_shortcuts_are_scope_local() {
    let root = ConfigScope::root_for_platform(Platform::Linux);
    root.add_keyboard_shortcut("Ctrl+B", ShortcutBinding::for_command("bold"));
    let child = root.create_child("article").unwrap();
    assert!(child.get_keyboard_shortcuts().is_empty());
    assert!(child.get_keyboard_shortcut_for_command("bold").is_none());
}
