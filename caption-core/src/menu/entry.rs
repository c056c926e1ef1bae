// SPDX-License-Identifier: MIT OR Apache-2.0
//! Declarative menu description supplied by the host application.

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// One node of the menu tree: a leaf action, a separator or a submenu parent.
///
/// All fields are optional so that malformed descriptions can still be held,
/// logged and rendered. See [`validate`](crate::menu::validate) for the rules
/// a well-formed entry follows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Display label, also the value reported on selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Marks the entry as a visual separator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
    /// Keyboard shortcut (e.g., "Ctrl+Shift+S").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot_key: Option<String>,
    /// Nested entries opened from this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_menu: Option<Vec<MenuEntry>>,
    /// Set only on the synthetic overflow entry built by the root layout.
    #[serde(skip)]
    pub(crate) collapse: bool,
}

impl MenuEntry {
    /// Create an entry with a label.
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Create a separator entry.
    pub fn separator() -> Self {
        Self {
            separator: Some(true),
            ..Default::default()
        }
    }

    /// The overflow entry that bundles root entries which do not fit the bar.
    pub(crate) fn collapse(rest: Vec<MenuEntry>) -> Self {
        Self {
            label: Some(String::new()),
            sub_menu: Some(rest),
            collapse: true,
            ..Default::default()
        }
    }

    /// Set the keyboard shortcut
    pub fn with_hot_key(mut self, hot_key: impl Into<String>) -> Self {
        self.hot_key = Some(hot_key.into());
        self
    }

    /// Set the submenu entries
    pub fn with_sub_menu(mut self, entries: Vec<MenuEntry>) -> Self {
        self.sub_menu = Some(entries);
        self
    }

    /// Append a single submenu entry, creating the submenu if needed
    pub fn with_sub_menu_item(mut self, entry: MenuEntry) -> Self {
        self.sub_menu.get_or_insert_with(Vec::new).push(entry);
        self
    }

    /// Whether this entry is drawn as a separator.
    pub fn is_separator(&self) -> bool {
        self.separator.unwrap_or(false)
    }

    /// Whether this entry opens a submenu when activated.
    pub fn has_sub_menu(&self) -> bool {
        self.sub_menu.is_some()
    }

    /// Whether this is the synthetic overflow entry.
    pub fn is_collapse(&self) -> bool {
        self.collapse
    }

    /// Whether the entry reacts to clicks and hovers.
    ///
    /// Separators and entries without a non-empty label are inert, except for
    /// the collapse entry which is icon-only.
    pub fn is_interactive(&self) -> bool {
        if self.collapse {
            return true;
        }
        !self.is_separator() && self.label.as_deref().is_some_and(|label| !label.is_empty())
    }

    /// Parse an ordered list of entries from JSON.
    ///
    /// Anything other than an array of entry objects is rejected.
    pub fn list_from_json(json: &str) -> Result<Vec<MenuEntry>, MenuError> {
        serde_json::from_str(json).map_err(MenuError::InvalidMenuData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let entries = MenuEntry::list_from_json(
            r#"[{"label":"File","subMenu":[{"label":"Save","hotKey":"Ctrl+S"},{"separator":true}]}]"#,
        )
        .unwrap();

        let file = &entries[0];
        assert_eq!(file.label.as_deref(), Some("File"));
        let sub = file.sub_menu.as_ref().unwrap();
        assert_eq!(sub[0].hot_key.as_deref(), Some("Ctrl+S"));
        assert!(sub[1].is_separator());
        assert!(!sub[1].is_interactive());
    }

    #[test]
    fn test_non_array_is_rejected() {
        let err = MenuEntry::list_from_json(r#"{"label":"File"}"#).unwrap_err();
        assert!(matches!(err, MenuError::InvalidMenuData(_)));
    }

    #[test]
    fn test_collapse_flag_is_not_deserialized() {
        let entries = MenuEntry::list_from_json(r#"[{"label":"","collapse":true}]"#).unwrap();
        assert!(!entries[0].is_collapse());
        assert!(!entries[0].is_interactive());
    }
}
