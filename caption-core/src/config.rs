// SPDX-License-Identifier: MIT OR Apache-2.0
use serde::Deserialize;

use crate::error::ConfigError;

/// Menu layout configuration.
///
/// Every value is in logical units. Values can be loaded from TOML and then
/// overridden through the environment:
/// - `CAPTION_NARROW_WIDTH` - see [MenuConfig::narrow_frame_width]
/// - `CAPTION_TITLE_MARGIN` - see [MenuConfig::title_margin]
/// - `CAPTION_OVERFLOW_OFFSET` - see [MenuConfig::overflow_offset]
/// - `CAPTION_NESTED_RAISE` - see [MenuConfig::nested_raise]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Frame widths at or below this value put every root entry into the collapse entry.
    pub narrow_frame_width: f64,
    /// Space kept free between the root bar and the title area.
    pub title_margin: f64,
    /// Extra left shift and downward nudge applied to a submenu that would leave the viewport.
    pub overflow_offset: f64,
    /// How far a nested submenu (level 2 and deeper) is raised above its triggering entry.
    pub nested_raise: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            narrow_frame_width: 480.0,
            title_margin: 20.0,
            overflow_offset: 10.0,
            nested_raise: 5.0,
        }
    }
}

impl MenuConfig {
    /// Parse a config from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Default config with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides looked up by variable name.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&'static str, &mut f64); 4] = [
            ("CAPTION_NARROW_WIDTH", &mut self.narrow_frame_width),
            ("CAPTION_TITLE_MARGIN", &mut self.title_margin),
            ("CAPTION_OVERFLOW_OFFSET", &mut self.overflow_offset),
            ("CAPTION_NESTED_RAISE", &mut self.nested_raise),
        ];

        for (name, field) in fields {
            let Some(value) = lookup(name) else {
                continue;
            };
            *field = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { name, value: value.clone() })?;
            log::debug!("{} overridden to {}", name, field);
        }

        Ok(self)
    }
}
