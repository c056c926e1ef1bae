// SPDX-License-Identifier: MIT OR Apache-2.0
//! Menu input events and their dispatch results

use crate::menu::hotkey::KeyInput;
use crate::menu::layer::EntryId;

/// Input routed through [`MenuController::handle`](crate::menu::MenuController::handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuInput {
    /// A click (pointer press and release)
    Click(ClickTarget),
    /// The pointer entered an entry
    PointerOver(EntryId),
    /// A key was pressed anywhere in the window
    KeyDown(KeyInput),
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// An entry of a visible layer
    Entry(EntryId),
    /// The container of the layer at this depth, not one of its entries
    Layer(usize),
    /// Anything outside the menu
    Outside,
}

/// Event reported to the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// An entry was chosen by click or hotkey
    MenuClick(String),
}

impl MenuEvent {
    /// Event name as seen by the host
    pub fn name(&self) -> &'static str {
        match self {
            MenuEvent::MenuClick(_) => "onMenuClick",
        }
    }

    /// Label of the chosen entry
    pub fn label(&self) -> &str {
        match self {
            MenuEvent::MenuClick(label) => label,
        }
    }
}

/// Result of handling one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// The host should suppress its default handling of the input
    pub prevent_default: bool,
    /// Events emitted while handling the input, in order
    pub events: Vec<MenuEvent>,
}

impl Dispatch {
    /// Labels of the emitted events
    pub fn labels(&self) -> Vec<&str> {
        self.events.iter().map(MenuEvent::label).collect()
    }
}
