// SPDX-License-Identifier: MIT OR Apache-2.0
//! Open menu layers and entry addressing

use vello::kurbo::Point;

use crate::menu::entry::MenuEntry;

/// Address of an entry inside the currently visible layer of a depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    /// Layer depth, 0 being the root bar
    pub depth: usize,
    /// Position of the entry inside its layer
    pub index: usize,
}

impl EntryId {
    /// Create a new entry id
    pub fn new(depth: usize, index: usize) -> Self {
        Self { depth, index }
    }
}

/// The sibling entries rendered at one depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Depth of this layer
    pub depth: usize,
    /// Entries in display order
    pub entries: Vec<MenuEntry>,
    /// Index of the highlighted (open branch) entry
    pub selected: Option<usize>,
    /// Top-left corner for submenu layers, `None` for the root bar
    pub origin: Option<Point>,
}

impl Layer {
    /// Create the root bar layer
    pub fn root(entries: Vec<MenuEntry>) -> Self {
        Self {
            depth: 0,
            entries,
            selected: None,
            origin: None,
        }
    }

    /// Create a submenu layer placed at `origin`
    pub fn submenu(depth: usize, entries: Vec<MenuEntry>, origin: Point) -> Self {
        Self {
            depth,
            entries,
            selected: None,
            origin: Some(origin),
        }
    }

    /// Entry at `index`
    pub fn entry(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    /// The selected entry, if any
    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        self.selected.and_then(|index| self.entry(index))
    }
}
