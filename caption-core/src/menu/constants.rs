// SPDX-License-Identifier: MIT OR Apache-2.0
//! Menu measurement constants
//!
//! Used by [`EstimatedLayout`](crate::menu::layout::EstimatedLayout) when no
//! real text measurement is available.

/// Height of the root menu bar
pub const BAR_HEIGHT: f64 = 28.0;

/// Height of each submenu item in pixels
pub const ITEM_HEIGHT: f64 = 24.0;

/// Top and bottom padding for a submenu
pub const PADDING: f64 = 4.0;

/// Left and right padding for text in menu items
pub const TEXT_PADDING: f64 = 10.0;

/// Right padding for hotkey text
pub const HOTKEY_RIGHT_PADDING: f64 = 12.0;

/// Minimum gap between label and hotkey text
pub const MIN_TEXT_HOTKEY_GAP: f64 = 40.0;

/// Minimum width of a submenu
pub const MIN_WIDTH: f64 = 120.0;

/// Maximum width of a submenu
pub const MAX_WIDTH: f64 = 400.0;

/// Estimated pixels per character for label text
pub const TEXT_CHAR_WIDTH: f64 = 7.0;

/// Estimated pixels per character for hotkey text
pub const HOTKEY_CHAR_WIDTH: f64 = 8.0;

/// Width reserved for the submenu arrow
pub const ARROW_WIDTH: f64 = 20.0;

/// Rendered size of menu icons
pub const ICON_SIZE: f64 = 16.0;
