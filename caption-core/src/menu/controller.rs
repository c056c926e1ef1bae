// SPDX-License-Identifier: MIT OR Apache-2.0
//! Menu interaction state machine
//!
//! The controller owns the layer stack: layer 0 is the root bar and layers
//! 1..N are the open submenus, one per depth. All input goes through
//! [MenuController::handle] and is processed synchronously, so the stack,
//! the selection and the activation flag are only ever touched here.

use std::sync::Arc;

use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::menu::entry::MenuEntry;
use crate::menu::event::{ClickTarget, Dispatch, MenuEvent, MenuInput};
use crate::menu::hotkey::{HotKeyRegistry, KeyInput};
use crate::menu::layer::{EntryId, Layer};
use crate::menu::layout::{build_root_layout, submenu_origin, LayoutProbe, RootLayout};
use crate::menu::render::{render_tree, MenuTree};
use crate::menu::validation::{validate, MenuValidation};

/// Callback receiving every completed selection.
pub type MenuEmitter = Arc<dyn Fn(&MenuEvent) + Send + Sync>;

/// Builds the layer stack from the menu description and drives it from input.
pub struct MenuController<P: LayoutProbe> {
    probe: P,
    config: MenuConfig,
    emitter: MenuEmitter,
    menu: Vec<MenuEntry>,
    hot_keys: HotKeyRegistry,
    layers: Vec<Layer>,
    activated: bool,
}

impl<P: LayoutProbe> MenuController<P> {
    /// Create a controller with the default config
    pub fn new<F>(probe: P, emitter: F) -> Self
    where
        F: Fn(&MenuEvent) + Send + Sync + 'static,
    {
        Self::with_config(probe, MenuConfig::default(), emitter)
    }

    /// Create a controller with a custom config
    pub fn with_config<F>(probe: P, config: MenuConfig, emitter: F) -> Self
    where
        F: Fn(&MenuEvent) + Send + Sync + 'static,
    {
        Self {
            probe,
            config,
            emitter: Arc::new(emitter),
            menu: Vec::new(),
            hot_keys: HotKeyRegistry::new(),
            layers: vec![Layer::root(Vec::new())],
            activated: false,
        }
    }

    /// Replace the menu description.
    ///
    /// Every entry is validated and its hotkeys registered. Invalid entries
    /// are logged and kept. The root bar is not rebuilt until
    /// [create_root_menu](Self::create_root_menu) is called. Returns the failures.
    pub fn set_menu_info(&mut self, menu: Vec<MenuEntry>) -> Vec<MenuValidation> {
        self.hot_keys.clear();

        let mut failures = Vec::new();
        for entry in &menu {
            let validation = validate(entry, &mut self.hot_keys);
            if !validation.success {
                log::error!("{}: {:?}", validation.message, validation.entry);
                failures.push(validation);
            }
        }

        self.menu = menu;
        failures
    }

    /// Replace the menu description from a JSON array of entries.
    pub fn set_menu_json(&mut self, json: &str) -> Result<Vec<MenuValidation>, MenuError> {
        let menu = MenuEntry::list_from_json(json)?;
        Ok(self.set_menu_info(menu))
    }

    /// Rebuild the root bar from the current menu description and frame size.
    ///
    /// Any open submenu is closed.
    pub fn create_root_menu(&mut self) -> RootLayout {
        self.close_menus();

        let layout = build_root_layout(&self.menu, &self.probe, &self.config);
        self.layers[0] = Layer::root(layout.entries.clone());
        layout
    }

    /// Route one input through the state machine.
    pub fn handle(&mut self, input: MenuInput) -> Dispatch {
        match input {
            MenuInput::Click(ClickTarget::Entry(id)) => match self.lookup(id) {
                Some(entry) if entry.is_interactive() => {
                    let entry = entry.clone();
                    self.click_entry(id, entry)
                },
                Some(_) => self.click_outside(ClickTarget::Entry(id)),
                None => {
                    log::debug!("click on stale menu entry {:?} ignored", id);
                    Dispatch::default()
                },
            },
            MenuInput::Click(target) => self.click_outside(target),
            MenuInput::PointerOver(id) => self.pointer_over(id),
            MenuInput::KeyDown(input) => self.key_down(&input),
        }
    }

    /// Close every submenu and deactivate the menu.
    pub fn close_menus(&mut self) {
        self.close_menu_group(1);
        self.activated = false;
    }

    /// Remove every layer at `level` or deeper.
    ///
    /// The root bar is never removed. Removing layer 1 clears the root selection.
    pub fn close_menu_group(&mut self, level: usize) {
        let level = level.max(1);
        if self.layers.len() <= level {
            return;
        }

        if level == 1 {
            self.layers[0].selected = None;
        }
        log::trace!("closing menu layers {}..{}", level, self.layers.len());
        self.layers.truncate(level);
    }

    /// The visible layers, indexed by depth
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The visible layer at `depth`
    pub fn layer(&self, depth: usize) -> Option<&Layer> {
        self.layers.get(depth)
    }

    /// Index of the selected entry at `depth`
    pub fn selected(&self, depth: usize) -> Option<usize> {
        self.layers.get(depth).and_then(|layer| layer.selected)
    }

    /// Whether a submenu was opened interactively and hover navigation is live
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// The current menu description
    pub fn menu_info(&self) -> &[MenuEntry] {
        &self.menu
    }

    /// Hotkeys registered by the current menu description
    pub fn hot_keys(&self) -> &HotKeyRegistry {
        &self.hot_keys
    }

    /// Layout config
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Layout probe
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Mutable layout probe, e.g. to apply a window resize before rebuilding the root bar
    pub fn probe_mut(&mut self) -> &mut P {
        &mut self.probe
    }

    /// Visual tree for the current layer stack
    pub fn render(&self) -> MenuTree {
        render_tree(&self.layers)
    }

    fn lookup(&self, id: EntryId) -> Option<&MenuEntry> {
        self.layers.get(id.depth)?.entry(id.index)
    }

    fn click_entry(&mut self, id: EntryId, entry: MenuEntry) -> Dispatch {
        let Some(children) = entry.sub_menu else {
            self.close_menus();
            self.layers[0].selected = None;
            return self.emit(entry.label.unwrap_or_default());
        };

        if id.depth == 0 && self.selected(0) == Some(id.index) {
            self.close_menus();
        } else {
            self.close_menu_group(id.depth + 1);
            self.open_menu(id, children);
            self.activated = true;
        }
        Dispatch::default()
    }

    fn click_outside(&mut self, target: ClickTarget) -> Dispatch {
        if let ClickTarget::Layer(depth) = target {
            if depth >= 1 && depth < self.layers.len() {
                return Dispatch::default();
            }
        }
        self.close_menus();
        Dispatch::default()
    }

    fn pointer_over(&mut self, id: EntryId) -> Dispatch {
        if !self.activated {
            return Dispatch::default();
        }
        let Some(entry) = self.lookup(id).filter(|entry| entry.is_interactive()) else {
            return Dispatch::default();
        };
        let children = entry.sub_menu.clone();

        self.close_menu_group(id.depth + 1);
        if let Some(children) = children {
            self.open_menu(id, children);
        }
        Dispatch::default()
    }

    fn key_down(&mut self, input: &KeyInput) -> Dispatch {
        let labels: Vec<String> = self.hot_keys.matching(input).map(str::to_owned).collect();
        if labels.is_empty() {
            return Dispatch::default();
        }

        let mut dispatch = Dispatch {
            prevent_default: true,
            events: Vec::with_capacity(labels.len()),
        };
        for label in labels {
            self.close_menus();
            dispatch.events.extend(self.emit(label).events);
        }
        dispatch
    }

    /// Open the submenu of `parent` one level below it and mark `parent` selected.
    fn open_menu(&mut self, parent: EntryId, entries: Vec<MenuEntry>) {
        let depth = parent.depth + 1;
        let anchor = self.probe.entry_bounds(&self.layers[parent.depth], parent.index);
        let origin = submenu_origin(anchor, depth, self.probe.viewport_width(), &self.config);

        self.layers.truncate(depth);
        self.layers.push(Layer::submenu(depth, entries, origin));
        self.layers[parent.depth].selected = Some(parent.index);
        log::debug!("opened menu layer {} at ({}, {})", depth, origin.x, origin.y);
    }

    fn emit(&self, label: String) -> Dispatch {
        let event = MenuEvent::MenuClick(label);
        (self.emitter)(&event);
        Dispatch {
            prevent_default: false,
            events: vec![event],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::layout::EstimatedLayout;
    use nalgebra::Vector2;

    fn controller(menu: Vec<MenuEntry>) -> MenuController<EstimatedLayout> {
        let mut controller = MenuController::new(EstimatedLayout::new(Vector2::new(800.0, 30.0)), |_| {});
        controller.set_menu_info(menu);
        controller.create_root_menu();
        controller
    }

    fn click(depth: usize, index: usize) -> MenuInput {
        MenuInput::Click(ClickTarget::Entry(EntryId::new(depth, index)))
    }

    fn hover(depth: usize, index: usize) -> MenuInput {
        MenuInput::PointerOver(EntryId::new(depth, index))
    }

    fn nested_menu() -> Vec<MenuEntry> {
        vec![
            MenuEntry::label("File").with_sub_menu(vec![
                MenuEntry::label("Open"),
                MenuEntry::label("Recent").with_sub_menu(vec![MenuEntry::label("notes.md")]),
            ]),
            MenuEntry::label("Edit").with_sub_menu(vec![MenuEntry::label("Undo")]),
            MenuEntry::label("About"),
        ]
    }

    #[test]
    fn test_open_twice_keeps_one_layer() {
        let mut menu = controller(nested_menu());
        menu.handle(click(0, 0));
        menu.handle(click(1, 1));
        menu.handle(click(1, 1));
        assert_eq!(menu.layers().len(), 3);
        assert_eq!(menu.layer(2).unwrap().entries, vec![MenuEntry::label("notes.md")]);
    }

    #[test]
    fn test_closing_nested_keeps_root_selection() {
        let mut menu = controller(nested_menu());
        menu.handle(click(0, 0));
        menu.handle(click(1, 1));
        menu.close_menu_group(2);
        assert_eq!(menu.layers().len(), 2);
        assert_eq!(menu.selected(0), Some(0));
        assert!(menu.is_activated());
    }

    #[test]
    fn test_close_menus_resets_everything() {
        let mut menu = controller(nested_menu());
        menu.handle(click(0, 1));
        menu.close_menus();
        assert_eq!(menu.layers().len(), 1);
        assert_eq!(menu.selected(0), None);
        assert!(!menu.is_activated());
    }

    #[test]
    fn test_close_menu_group_never_removes_root() {
        let mut menu = controller(nested_menu());
        menu.close_menu_group(0);
        assert_eq!(menu.layers().len(), 1);
        assert_eq!(menu.layer(0).unwrap().entries.len(), 3);
    }

    #[test]
    fn test_hover_is_ignored_until_activated() {
        let mut menu = controller(nested_menu());
        menu.handle(hover(0, 0));
        assert_eq!(menu.layers().len(), 1);
    }

    #[test]
    fn test_hover_switches_open_branch() {
        let mut menu = controller(nested_menu());
        menu.handle(click(0, 0));
        menu.handle(hover(0, 1));
        assert_eq!(menu.layers().len(), 2);
        assert_eq!(menu.layer(1).unwrap().entries, vec![MenuEntry::label("Undo")]);
        assert_eq!(menu.selected(0), Some(1));
    }

    #[test]
    fn test_hover_over_leaf_closes_deeper_layers() {
        let mut menu = controller(nested_menu());
        menu.handle(click(0, 0));
        menu.handle(hover(1, 1));
        assert_eq!(menu.layers().len(), 3);
        menu.handle(hover(1, 0));
        assert_eq!(menu.layers().len(), 2);
        assert_eq!(menu.selected(0), Some(0));
        assert!(menu.is_activated());
    }

    #[test]
    fn test_stale_entry_click_is_ignored() {
        let mut menu = controller(nested_menu());
        menu.handle(click(0, 0));
        let dispatch = menu.handle(click(3, 0));
        assert_eq!(dispatch, Dispatch::default());
        assert_eq!(menu.layers().len(), 2);
    }

    #[test]
    fn test_set_menu_info_replaces_hot_keys() {
        let mut menu = controller(vec![MenuEntry::label("Quit").with_hot_key("Ctrl+Q")]);
        assert_eq!(menu.hot_keys().len(), 1);
        menu.set_menu_info(vec![MenuEntry::label("Save").with_hot_key("Ctrl+S")]);
        assert_eq!(menu.hot_keys().len(), 1);
        assert_eq!(menu.hot_keys().bindings()[0].1, "Save");
        // the root bar still shows the previous description
        assert_eq!(menu.layer(0).unwrap().entries[0].label.as_deref(), Some("Quit"));
    }
}
