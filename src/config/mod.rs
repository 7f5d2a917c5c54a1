//! Configuration file support for map-highlighter.
//!
//! Settings are read from `~/.config/map-highlighter/config.toml`. If no config
//! file exists, the default highlight style is used.

pub mod types;

pub use types::StyleConfig;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure.
///
/// # Example TOML
/// ```toml
/// [highlight]
/// fill_color = "000000"
/// fill_opacity = 0.2
/// stroke_color = "ff0000"
/// stroke_width = 2.0
/// always_on = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Highlight appearance and behaviour
    #[serde(default)]
    pub highlight: StyleConfig,
}

impl Config {
    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text).context("Failed to parse config")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Validates and clamps configuration values to acceptable ranges.
    ///
    /// Invalid values are replaced with the nearest valid value and a warning is
    /// logged:
    /// - opacities are clamped to 0.0 - 1.0
    /// - a non-positive or non-finite stroke width falls back to 1.0
    /// - a leading `#` on a color is dropped; other malformed colors are kept
    ///   and resolve leniently at render time
    fn validate_and_clamp(&mut self) {
        let style = &mut self.highlight;

        for (name, opacity) in [
            ("fill_opacity", &mut style.fill_opacity),
            ("stroke_opacity", &mut style.stroke_opacity),
        ] {
            if opacity.is_nan() {
                warn!("Invalid {} NaN, using 1.0", name);
                *opacity = 1.0;
            } else if !(0.0..=1.0).contains(&*opacity) {
                warn!("Invalid {} {:.2}, clamping to 0.0-1.0 range", name, opacity);
                *opacity = opacity.clamp(0.0, 1.0);
            }
        }

        if !(style.stroke_width.is_finite() && style.stroke_width > 0.0) {
            warn!(
                "Invalid stroke_width {}, falling back to 1.0",
                style.stroke_width
            );
            style.stroke_width = 1.0;
        }

        for (name, color) in [
            ("fill_color", &mut style.fill_color),
            ("stroke_color", &mut style.stroke_color),
        ] {
            if let Some(stripped) = color.strip_prefix('#') {
                debug!("Dropping '#' prefix from {} '{}'", name, color);
                *color = stripped.to_string();
            }
            if color.len() != 6 || !color.chars().all(|c| c.is_ascii_hexdigit()) {
                warn!(
                    "{} '{}' is not six hex digits; unreadable channels will render as 0",
                    name, color
                );
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("map-highlighter");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// no file exists there.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Invalid config in {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> Schema {
        schema_for!(Config)
    }
}
