// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;

/// Errors raised when menu data crosses a serialization boundary.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The menu document is not an array of entry objects.
    #[error("menu data must be an array of menu entries: {0}")]
    InvalidMenuData(#[source] serde_json::Error),
}

/// Errors raised while registering a keyboard shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotKeyError {
    /// The shortcut string is empty.
    #[error("hotkey value must be a non-empty string")]
    Empty,
}

/// Errors raised while loading a [`MenuConfig`](crate::config::MenuConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse menu config: {0}")]
    Parse(#[from] toml::de::Error),
    /// An environment override is not a number.
    #[error("environment variable {name} must be a number, got {value:?}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value found in the environment.
        value: String,
    },
}
