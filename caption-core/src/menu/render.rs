// SPDX-License-Identifier: MIT OR Apache-2.0
//! Declarative visual tree for the layer stack
//!
//! The tree is toolkit agnostic: a widget layer walks [MenuTree] and draws
//! one group per visible layer.

use vello::kurbo::Point;

use crate::menu::entry::MenuEntry;
use crate::menu::layer::Layer;

/// Icons drawn by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Chevron marking an entry that opens a submenu
    ExpandSubMenu,
    /// Three dots on the collapse entry
    Collapse,
}

impl Icon {
    /// SVG `viewBox` the path data is drawn in
    pub const VIEW_BOX: (f64, f64, f64, f64) = (0.0, -960.0, 960.0, 960.0);

    /// SVG path data of the icon
    pub fn path_data(&self) -> &'static str {
        match self {
            Icon::ExpandSubMenu => "M543.846-480.231 353.538-671.308l22.231-22.231 212.539 213.308-212.539 212.539-22.231-22.231 190.308-190.308Z",
            Icon::Collapse => "M207.858-432Q188-432 174-446.142q-14-14.141-14-34Q160-500 174.142-514q14.141-14 34-14Q228-528 242-513.858q14 14.141 14 34Q256-460 241.858-446q-14.141 14-34 14Zm272 0Q460-432 446-446.142q-14-14.141-14-34Q432-500 446.142-514q14.141-14 34-14Q500-528 514-513.858q14 14.141 14 34Q528-460 513.858-446q-14.141 14-34 14Zm272 0Q732-432 718-446.142q-14-14.141-14-34Q704-500 718.142-514q14.141-14 34-14Q772-528 786-513.858q14 14.141 14 34Q800-460 785.858-446q-14.141 14-34 14Z",
        }
    }
}

/// Decoration drawn after an entry's label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trailing {
    /// Nothing
    None,
    /// An icon, e.g. the submenu chevron
    Icon(Icon),
    /// Hotkey text such as "Ctrl+S"
    HotKey(String),
}

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    /// Horizontal rule
    Separator,
    /// An entry without a usable label; drawn empty and inert
    Blank,
    /// The overflow entry of the root bar
    Collapse {
        /// Whether its submenu is the open branch
        selected: bool,
    },
    /// A labelled entry
    Item {
        /// Display label
        label: String,
        /// Whether its submenu is the open branch
        selected: bool,
        /// Decoration after the label
        trailing: Trailing,
    },
}

/// One rendered layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup {
    /// Layer depth
    pub level: usize,
    /// Position of submenu groups, `None` for the root bar
    pub origin: Option<Point>,
    /// Entries in display order
    pub items: Vec<MenuNode>,
}

/// The whole rendered menu, root bar first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuTree {
    /// One group per visible layer
    pub groups: Vec<MenuGroup>,
}

impl MenuTree {
    /// Group rendered for `level`
    pub fn group(&self, level: usize) -> Option<&MenuGroup> {
        self.groups.iter().find(|group| group.level == level)
    }
}

/// Build the visual tree for a layer stack.
pub fn render_tree(layers: &[Layer]) -> MenuTree {
    MenuTree {
        groups: layers.iter().map(render_group).collect(),
    }
}

fn render_group(layer: &Layer) -> MenuGroup {
    let items = layer
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| render_node(entry, layer.depth, layer.selected == Some(index)))
        .collect();

    MenuGroup {
        level: layer.depth,
        origin: layer.origin,
        items,
    }
}

fn render_node(entry: &MenuEntry, level: usize, selected: bool) -> MenuNode {
    if entry.is_collapse() {
        return MenuNode::Collapse { selected };
    }
    if entry.is_separator() {
        return MenuNode::Separator;
    }

    let label = match entry.label.as_deref() {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => return MenuNode::Blank,
    };

    // The root bar only shows labels.
    let trailing = if level == 0 {
        Trailing::None
    } else if entry.has_sub_menu() {
        Trailing::Icon(Icon::ExpandSubMenu)
    } else if let Some(hot_key) = &entry.hot_key {
        Trailing::HotKey(hot_key.clone())
    } else {
        Trailing::None
    };

    MenuNode::Item {
        label,
        selected,
        trailing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_decorations() {
        let layer = Layer::submenu(
            1,
            vec![
                MenuEntry::label("Save").with_hot_key("Ctrl+S"),
                MenuEntry::separator(),
                MenuEntry::label("Export").with_sub_menu(vec![MenuEntry::label("PDF")]),
                MenuEntry::default(),
            ],
            Point::new(0.0, 28.0),
        );
        let tree = render_tree(&[layer]);
        let group = tree.group(1).unwrap();

        assert_eq!(group.origin, Some(Point::new(0.0, 28.0)));
        assert_eq!(
            group.items,
            vec![
                MenuNode::Item {
                    label: "Save".to_string(),
                    selected: false,
                    trailing: Trailing::HotKey("Ctrl+S".to_string()),
                },
                MenuNode::Separator,
                MenuNode::Item {
                    label: "Export".to_string(),
                    selected: false,
                    trailing: Trailing::Icon(Icon::ExpandSubMenu),
                },
                MenuNode::Blank,
            ]
        );
    }

    #[test]
    fn test_root_bar_has_no_decorations() {
        let mut layer = Layer::root(vec![
            MenuEntry::label("File").with_sub_menu(Vec::new()),
            MenuEntry::label("Quit").with_hot_key("Ctrl+Q"),
            MenuEntry::collapse(vec![MenuEntry::label("Help")]),
        ]);
        layer.selected = Some(2);
        let tree = render_tree(&[layer]);

        assert_eq!(
            tree.group(0).unwrap().items,
            vec![
                MenuNode::Item {
                    label: "File".to_string(),
                    selected: false,
                    trailing: Trailing::None,
                },
                MenuNode::Item {
                    label: "Quit".to_string(),
                    selected: false,
                    trailing: Trailing::None,
                },
                MenuNode::Collapse { selected: true },
            ]
        );
    }
}
