#![warn(missing_docs)]

//! Core library for caption => See `caption` crate.
//!
//! Contains the menu model, its validation and hotkeys, the root bar layout
//! and the interaction controller.

/// Contains the winit keyboard types used by [menu::KeyInput].
pub mod keyboard {
    pub use winit::keyboard::*;
}

/// Contains the [MenuConfig](config::MenuConfig) struct.
pub mod config;

/// Contains the error types.
pub mod error;

pub mod menu;
