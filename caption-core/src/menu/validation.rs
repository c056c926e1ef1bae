// SPDX-License-Identifier: MIT OR Apache-2.0
//! Menu entry validation
//!
//! Validation never rejects a menu: failures are reported per entry and the
//! entry is still rendered as far as its shape allows. Hotkeys are
//! registered as a side effect of validating the entry that declares them;
//! an empty hotkey string is ignored.

use crate::menu::entry::MenuEntry;
use crate::menu::hotkey::HotKeyRegistry;

/// Outcome of validating one menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuValidation {
    /// Whether the entry (and its whole subtree) is well formed
    pub success: bool,
    /// Human readable reason, `"success"` when valid
    pub message: String,
    /// The offending entry, or the validated entry on success
    pub entry: MenuEntry,
}

impl MenuValidation {
    fn success(entry: &MenuEntry) -> Self {
        Self {
            success: true,
            message: "success".to_string(),
            entry: entry.clone(),
        }
    }

    fn failure(message: impl Into<String>, entry: &MenuEntry) -> Self {
        Self {
            success: false,
            message: message.into(),
            entry: entry.clone(),
        }
    }
}

/// Validate an entry and its submenu, registering the hotkeys it declares.
///
/// The first failing rule wins; a failing child is reported as the result
/// of its ancestors.
pub fn validate(entry: &MenuEntry, hot_keys: &mut HotKeyRegistry) -> MenuValidation {
    let separator = entry.is_separator();

    if entry.label.is_none() && !separator {
        return MenuValidation::failure("menu entry needs 'label' or 'separator'", entry);
    }
    if entry.label.is_some() && separator {
        return MenuValidation::failure("menu entry can't have both 'label' and 'separator'", entry);
    }
    if entry.hot_key.is_some() && entry.sub_menu.is_some() {
        return MenuValidation::failure("menu entry can't have both 'hotKey' and 'subMenu'", entry);
    }

    if separator {
        return MenuValidation::success(entry);
    }

    if let Some(hot_key) = entry.hot_key.as_deref().filter(|hot_key| !hot_key.is_empty()) {
        let label = entry.label.clone().unwrap_or_default();
        if let Err(err) = hot_keys.register(hot_key, label) {
            return MenuValidation::failure(err.to_string(), entry);
        }
    }

    if let Some(children) = &entry.sub_menu {
        for child in children {
            let validation = validate(child, hot_keys);
            if !validation.success {
                return validation;
            }
        }
    }

    MenuValidation::success(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(entry: &MenuEntry) -> MenuValidation {
        validate(entry, &mut HotKeyRegistry::new())
    }

    #[test]
    fn test_label_or_separator_required() {
        let result = check(&MenuEntry::default().with_hot_key("Ctrl+A"));
        assert!(!result.success);
        assert!(result.message.contains("'label' or 'separator'"));
    }

    #[test]
    fn test_separator_false_counts_as_missing() {
        let entry = MenuEntry {
            separator: Some(false),
            ..Default::default()
        };
        assert!(!check(&entry).success);
    }

    #[test]
    fn test_label_and_separator_conflict() {
        let mut entry = MenuEntry::label("Line");
        entry.separator = Some(true);
        let result = check(&entry);
        assert!(!result.success);
        assert!(result.message.contains("both 'label' and 'separator'"));
    }

    #[test]
    fn test_hot_key_and_sub_menu_conflict() {
        let entry = MenuEntry {
            hot_key: Some("X".to_string()),
            sub_menu: Some(Vec::new()),
            label: Some("Broken".to_string()),
            ..Default::default()
        };
        let result = check(&entry);
        assert!(!result.success);
        assert!(result.message.contains("hotKey"));
        assert!(result.message.contains("subMenu"));
    }

    #[test]
    fn test_separator_skips_remaining_checks() {
        let mut entry = MenuEntry::separator();
        entry.hot_key = Some(String::new());
        let mut registry = HotKeyRegistry::new();
        assert!(validate(&entry, &mut registry).success);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_hot_key_is_not_registered() {
        let entry = MenuEntry::label("Quit").with_hot_key("");
        let mut registry = HotKeyRegistry::new();
        let result = validate(&entry, &mut registry);
        assert!(result.success);
        assert_eq!(result.message, "success");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_first_child_failure_propagates() {
        let entry = MenuEntry::label("Edit").with_sub_menu(vec![
            MenuEntry::label("Undo").with_hot_key("Ctrl+Z"),
            MenuEntry::default(),
            MenuEntry::separator().with_hot_key("Ctrl+Y"),
        ]);
        let mut registry = HotKeyRegistry::new();
        let result = validate(&entry, &mut registry);
        assert!(!result.success);
        assert_eq!(result.entry, MenuEntry::default());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_nested_hot_keys_are_registered() {
        let entry = MenuEntry::label("File").with_sub_menu(vec![
            MenuEntry::label("Save").with_hot_key("Ctrl+S"),
            MenuEntry::label("Export").with_sub_menu(vec![MenuEntry::label("PDF").with_hot_key("Ctrl+P")]),
        ]);
        let mut registry = HotKeyRegistry::new();
        assert!(validate(&entry, &mut registry).success);
        let labels: Vec<&str> = registry.bindings().iter().map(|(_, label)| label.as_str()).collect();
        assert_eq!(labels, vec!["Save", "PDF"]);
    }
}
