#![warn(missing_docs)]

//! Custom title bars with nested dropdown menus and window controls.

pub use nalgebra as math;
pub use vello::kurbo as geometry;

pub use caption_core as core;
#[cfg(feature = "window-controls")]
pub use caption_window as window;

/// A "prelude" for users of caption.
///
/// Importing this module brings into scope the most common types
/// needed to drive a title bar menu.
///
/// ```rust
/// use caption::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::config::MenuConfig;
    pub use crate::core::keyboard::{Key, ModifiersState, NamedKey};
    pub use crate::core::menu::{
        ClickTarget, Dispatch, EntryId, EstimatedLayout, KeyInput, LayoutProbe, MenuController, MenuEntry,
        MenuEvent, MenuInput, MenuNode, MenuTree, Trailing,
    };

    // Window controls
    #[cfg(feature = "window-controls")]
    pub use crate::window::{spawn_host, Transport, WindowApi, WindowControl, WindowControlHost};

    // Math
    pub use nalgebra::Vector2;

    // Geometry
    pub use vello::kurbo::{Point, Rect};
}
