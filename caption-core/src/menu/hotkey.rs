// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyboard shortcuts bound to menu entries

use std::fmt;

use winit::keyboard::{Key, ModifiersState, NamedKey, SmolStr};

use crate::error::HotKeyError;

/// A key-down event as seen by the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// The logical key that was pressed
    pub key: Key,
    /// Modifier keys held while pressing
    pub modifiers: ModifiersState,
}

impl KeyInput {
    /// Create a new key input
    pub fn new(key: Key, modifiers: ModifiersState) -> Self {
        Self { key, modifiers }
    }

    /// Key input for a character key (e.g., "q")
    pub fn character(text: &str, modifiers: ModifiersState) -> Self {
        Self::new(Key::Character(SmolStr::new(text)), modifiers)
    }

    /// Text used to compare against a hotkey's key token.
    ///
    /// Named keys use their W3C key value (`Enter`, `F5`, `ArrowUp`, `" "`).
    fn key_text(&self) -> Option<String> {
        match &self.key {
            Key::Character(text) => Some(text.to_string()),
            Key::Named(NamedKey::Space) => Some(" ".to_string()),
            Key::Named(named) => Some(format!("{:?}", named)),
            _ => None,
        }
    }
}

/// A parsed shortcut such as `Ctrl+Shift+S`.
///
/// Modifier requirements are exact: `Ctrl+S` does not match while Shift is held.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HotKey {
    /// Ctrl must be held
    pub ctrl: bool,
    /// Alt must be held
    pub alt: bool,
    /// Shift must be held
    pub shift: bool,
    /// Required key, `None` when the string only named modifiers
    pub key: Option<String>,
}

impl HotKey {
    /// Parse a '+'-delimited shortcut string.
    pub fn parse(source: &str) -> Result<Self, HotKeyError> {
        if source.is_empty() {
            return Err(HotKeyError::Empty);
        }

        let mut tokens: Vec<&str> = source.split('+').collect();
        let mut take = |modifier: &str| match tokens.iter().position(|token| *token == modifier) {
            Some(index) => {
                tokens.remove(index);
                true
            },
            None => false,
        };

        let ctrl = take("Ctrl");
        let alt = take("Alt");
        let shift = take("Shift");

        if tokens.is_empty() {
            log::warn!("hotkey {:?} doesn't have a key besides Ctrl, Alt, Shift", source);
        }

        Ok(Self {
            ctrl,
            alt,
            shift,
            key: tokens.first().map(|key| key.to_string()),
        })
    }

    /// Check if a key event matches this hotkey
    pub fn matches(&self, input: &KeyInput) -> bool {
        let Some(key) = &self.key else {
            return false;
        };

        input.modifiers.control_key() == self.ctrl
            && input.modifiers.alt_key() == self.alt
            && input.modifiers.shift_key() == self.shift
            && input
                .key_text()
                .is_some_and(|text| text.to_uppercase() == key.to_uppercase())
    }
}

impl fmt::Display for HotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if let Some(key) = &self.key {
            parts.push(key.as_str());
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Shortcuts registered by the entries of the current menu, in registration order.
#[derive(Debug, Clone, Default)]
pub struct HotKeyRegistry {
    bindings: Vec<(HotKey, String)>,
}

impl HotKeyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shortcut that selects `label` when pressed
    pub fn register(&mut self, hot_key: &str, label: impl Into<String>) -> Result<(), HotKeyError> {
        let parsed = HotKey::parse(hot_key)?;
        self.bindings.push((parsed, label.into()));
        Ok(())
    }

    /// Remove every registered shortcut
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Labels of every binding matching the key event
    pub fn matching<'a>(&'a self, input: &'a KeyInput) -> impl Iterator<Item = &'a str> + 'a {
        self.bindings
            .iter()
            .filter(move |(hot_key, _)| hot_key.matches(input))
            .map(|(_, label)| label.as_str())
    }

    /// Registered bindings
    pub fn bindings(&self) -> &[(HotKey, String)] {
        &self.bindings
    }

    /// Number of registered bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl() -> ModifiersState {
        ModifiersState::CONTROL
    }

    #[test]
    fn test_parse_modifiers_and_key() {
        let hot_key = HotKey::parse("Ctrl+Shift+S").unwrap();
        assert!(hot_key.ctrl);
        assert!(!hot_key.alt);
        assert!(hot_key.shift);
        assert_eq!(hot_key.key.as_deref(), Some("S"));
        assert_eq!(hot_key.to_string(), "Ctrl+Shift+S");
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(HotKey::parse(""), Err(HotKeyError::Empty));
    }

    #[test]
    fn test_modifier_only_never_matches() {
        let hot_key = HotKey::parse("Ctrl+Alt").unwrap();
        assert_eq!(hot_key.key, None);
        assert!(!hot_key.matches(&KeyInput::character("a", ctrl() | ModifiersState::ALT)));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let hot_key = HotKey::parse("Ctrl+q").unwrap();
        assert!(hot_key.matches(&KeyInput::character("Q", ctrl())));
        assert!(hot_key.matches(&KeyInput::character("q", ctrl())));
    }

    #[test]
    fn test_modifiers_must_match_exactly() {
        let hot_key = HotKey::parse("Ctrl+S").unwrap();
        assert!(!hot_key.matches(&KeyInput::character("S", ctrl() | ModifiersState::SHIFT)));
        assert!(!hot_key.matches(&KeyInput::character("s", ModifiersState::empty())));
        assert!(hot_key.matches(&KeyInput::character("s", ctrl())));
    }

    #[test]
    fn test_named_keys() {
        let hot_key = HotKey::parse("F5").unwrap();
        assert!(hot_key.matches(&KeyInput::new(Key::Named(NamedKey::F5), ModifiersState::empty())));
        assert!(!hot_key.matches(&KeyInput::new(Key::Named(NamedKey::F6), ModifiersState::empty())));
    }

    #[test]
    fn test_space_bar_uses_its_key_value() {
        let space = KeyInput::new(Key::Named(NamedKey::Space), ctrl());
        assert!(HotKey::parse("Ctrl+ ").unwrap().matches(&space));
        assert!(!HotKey::parse("Ctrl+Space").unwrap().matches(&space));
    }

    #[test]
    fn test_registry_matches_every_binding() {
        let mut registry = HotKeyRegistry::new();
        registry.register("Ctrl+N", "New").unwrap();
        registry.register("Ctrl+N", "New Window").unwrap();
        registry.register("Ctrl+O", "Open").unwrap();
        assert_eq!(registry.register("", "Broken"), Err(HotKeyError::Empty));
        assert_eq!(registry.len(), 3);

        let input = KeyInput::character("n", ctrl());
        let labels: Vec<&str> = registry.matching(&input).collect();
        assert_eq!(labels, vec!["New", "New Window"]);
    }
}
