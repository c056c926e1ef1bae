// SPDX-License-Identifier: MIT OR Apache-2.0
//! Root bar layout and submenu placement

use nalgebra::Vector2;
use vello::kurbo::{Point, Rect};

use crate::config::MenuConfig;
use crate::menu::constants::{
    ARROW_WIDTH, BAR_HEIGHT, HOTKEY_CHAR_WIDTH, HOTKEY_RIGHT_PADDING, ICON_SIZE, ITEM_HEIGHT, MAX_WIDTH,
    MIN_TEXT_HOTKEY_GAP, MIN_WIDTH, PADDING, TEXT_CHAR_WIDTH, TEXT_PADDING,
};
use crate::menu::entry::MenuEntry;
use crate::menu::layer::Layer;

/// Synchronous layout queries against whatever draws the menu.
///
/// Every call must reflect the visual state at the time of the call.
pub trait LayoutProbe {
    /// Width of the whole title bar frame
    fn frame_width(&self) -> f64;

    /// Bounds of the menu container if the root bar held exactly `root`
    fn menu_bounds(&self, root: &[MenuEntry]) -> Rect;

    /// Bounds of the title area, `None` while it is hidden
    fn title_area(&self) -> Option<Rect>;

    /// Bounds of entry `index` of a visible layer
    fn entry_bounds(&self, layer: &Layer, index: usize) -> Rect;

    /// Width of the window viewport
    fn viewport_width(&self) -> f64;
}

/// Result of fitting the top-level entries into the root bar.
#[derive(Debug, Clone, PartialEq)]
pub struct RootLayout {
    /// Root bar entries, ending with the collapse entry on overflow
    pub entries: Vec<MenuEntry>,
    /// Number of top-level entries moved into the collapse entry
    pub collapsed: usize,
}

impl RootLayout {
    /// Whether a collapse entry was added
    pub fn has_collapse(&self) -> bool {
        self.collapsed > 0
    }

    /// Number of top-level entries shown directly on the bar
    pub fn fitted(&self) -> usize {
        self.entries.len() - usize::from(self.has_collapse())
    }
}

/// Fit `menu` into the root bar.
///
/// Entries are added one at a time until the bar would run into the title
/// area. The entry that overlapped and the one before it are then taken back
/// out to leave room for the collapse entry, which receives every entry that
/// did not fit. A frame no wider than [MenuConfig::narrow_frame_width]
/// collapses everything.
pub fn build_root_layout<P>(menu: &[MenuEntry], probe: &P, config: &MenuConfig) -> RootLayout
where
    P: LayoutProbe + ?Sized,
{
    let mut entries: Vec<MenuEntry> = Vec::with_capacity(menu.len() + 1);
    let mut index = 0;

    if probe.frame_width() > config.narrow_frame_width {
        while index < menu.len() {
            entries.push(menu[index].clone());

            let bounds = probe.menu_bounds(&entries);
            let overlaps = probe
                .title_area()
                .is_some_and(|title| bounds.x1 >= title.x0 - config.title_margin);

            if overlaps {
                entries.pop();
                entries.pop();
                index = index.saturating_sub(1);
                break;
            }
            index += 1;
        }
    }

    let collapsed = menu.len() - index;
    if collapsed > 0 {
        log::debug!("{} root menu entries moved into the collapse entry", collapsed);
        entries.push(MenuEntry::collapse(menu[index..].to_vec()));
    }

    RootLayout { entries, collapsed }
}

/// Top-left corner of a submenu layer opened from `anchor` at `level`.
///
/// Level 1 drops below its root bar entry; deeper levels open to the right
/// of the entry, raised by [MenuConfig::nested_raise]. A layer that would
/// pass the right edge of the viewport is shifted left and nudged down.
pub fn submenu_origin(anchor: Rect, level: usize, viewport_width: f64, config: &MenuConfig) -> Point {
    let (mut left, mut top) = if level <= 1 {
        (anchor.x0, anchor.height())
    } else {
        (anchor.x1, anchor.y0 - config.nested_raise)
    };

    let right = left + anchor.width();
    if right > viewport_width {
        left -= (right - viewport_width) + config.overflow_offset;
        top += config.overflow_offset;
    }

    Point::new(left, top.floor())
}

/// A [LayoutProbe] that estimates sizes from label lengths.
///
/// The root bar is laid out horizontally from `menu_origin`; submenu layers
/// stack their entries vertically from the layer origin.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatedLayout {
    /// Size of the title bar frame
    pub frame_size: Vector2<f64>,
    /// Size of the window viewport
    pub viewport_size: Vector2<f64>,
    /// Top-left corner of the menu container
    pub menu_origin: Point,
    /// Title area bounds, `None` while hidden
    pub title_area: Option<Rect>,
}

impl EstimatedLayout {
    /// Create a layout whose viewport has the same size as the frame
    pub fn new(frame_size: Vector2<f64>) -> Self {
        Self {
            frame_size,
            viewport_size: frame_size,
            menu_origin: Point::ZERO,
            title_area: None,
        }
    }

    /// Set the title area bounds
    pub fn with_title_area(mut self, title_area: Rect) -> Self {
        self.title_area = Some(title_area);
        self
    }

    /// Set the viewport size
    pub fn with_viewport(mut self, viewport_size: Vector2<f64>) -> Self {
        self.viewport_size = viewport_size;
        self
    }

    /// Estimated width of an entry on the root bar
    pub fn root_entry_width(entry: &MenuEntry) -> f64 {
        if entry.is_collapse() {
            return ICON_SIZE + TEXT_PADDING * 2.0;
        }
        if entry.is_separator() {
            return TEXT_PADDING;
        }
        let chars = entry.label.as_deref().map_or(0, |label| label.chars().count());
        chars as f64 * TEXT_CHAR_WIDTH + TEXT_PADDING * 2.0
    }

    /// Estimated width of a submenu layer holding `entries`
    pub fn submenu_width(entries: &[MenuEntry]) -> f64 {
        let mut width: f64 = MIN_WIDTH;
        for entry in entries.iter().filter(|entry| !entry.is_separator()) {
            let chars = entry.label.as_deref().map_or(0, |label| label.chars().count());
            let mut total = chars as f64 * TEXT_CHAR_WIDTH + TEXT_PADDING * 2.0;

            if let Some(hot_key) = &entry.hot_key {
                total += MIN_TEXT_HOTKEY_GAP
                    + hot_key.chars().count() as f64 * HOTKEY_CHAR_WIDTH
                    + HOTKEY_RIGHT_PADDING;
            }
            if entry.has_sub_menu() {
                total += ARROW_WIDTH;
            }

            width = width.max(total);
        }
        width.min(MAX_WIDTH)
    }
}

impl LayoutProbe for EstimatedLayout {
    fn frame_width(&self) -> f64 {
        self.frame_size.x
    }

    fn menu_bounds(&self, root: &[MenuEntry]) -> Rect {
        let width: f64 = root.iter().map(Self::root_entry_width).sum();
        Rect::new(
            self.menu_origin.x,
            self.menu_origin.y,
            self.menu_origin.x + width,
            self.menu_origin.y + BAR_HEIGHT,
        )
    }

    fn title_area(&self) -> Option<Rect> {
        self.title_area
    }

    fn entry_bounds(&self, layer: &Layer, index: usize) -> Rect {
        match layer.origin {
            None => {
                let x: f64 = self.menu_origin.x
                    + layer.entries.iter().take(index).map(Self::root_entry_width).sum::<f64>();
                let width = layer.entry(index).map_or(0.0, Self::root_entry_width);
                Rect::new(x, self.menu_origin.y, x + width, self.menu_origin.y + BAR_HEIGHT)
            },
            Some(origin) => {
                let y = origin.y + PADDING + index as f64 * ITEM_HEIGHT;
                let width = Self::submenu_width(&layer.entries);
                Rect::new(origin.x, y, origin.x + width, y + ITEM_HEIGHT)
            },
        }
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_size.x
    }
}
