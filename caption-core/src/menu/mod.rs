// SPDX-License-Identifier: MIT OR Apache-2.0
//! Title bar menu
//!
//! A hierarchical menu described by [MenuEntry] values, laid out on a root
//! bar with an overflow entry, and driven by a [MenuController].

pub mod constants;
pub mod controller;
pub mod entry;
pub mod event;
pub mod hotkey;
pub mod layer;
pub mod layout;
pub mod render;
pub mod validation;

pub use controller::{MenuController, MenuEmitter};
pub use entry::MenuEntry;
pub use event::{ClickTarget, Dispatch, MenuEvent, MenuInput};
pub use hotkey::{HotKey, HotKeyRegistry, KeyInput};
pub use layer::{EntryId, Layer};
pub use layout::{build_root_layout, submenu_origin, EstimatedLayout, LayoutProbe, RootLayout};
pub use render::{render_tree, Icon, MenuGroup, MenuNode, MenuTree, Trailing};
pub use validation::{validate, MenuValidation};
