//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Highlight appearance and behaviour.
///
/// Built once (from defaults, a config file, or struct literals) and passed by
/// reference to every render call; rendering never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Fill the highlighted area
    #[serde(default = "default_true")]
    pub fill: bool,

    /// Fill color as six hex digits, e.g. "000000"
    #[serde(default = "default_fill_color")]
    pub fill_color: String,

    /// Fill opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,

    /// Outline the highlighted area
    #[serde(default = "default_true")]
    pub stroke: bool,

    /// Outline color as six hex digits, e.g. "ff0000"
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,

    /// Outline opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_stroke_opacity")]
    pub stroke_opacity: f64,

    /// Outline width in pixels (must be positive)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Draw every area once instead of reacting to hover
    #[serde(default)]
    pub always_on: bool,

    /// Stroke the outline even when `stroke` is false, using whatever stroke
    /// paint and width the surface last had. Only for matching older output.
    #[serde(default)]
    pub legacy_stroke: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fill: default_true(),
            fill_color: default_fill_color(),
            fill_opacity: default_fill_opacity(),
            stroke: default_true(),
            stroke_color: default_stroke_color(),
            stroke_opacity: default_stroke_opacity(),
            stroke_width: default_stroke_width(),
            always_on: false,
            legacy_stroke: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_fill_color() -> String {
    "000000".to_string()
}

fn default_fill_opacity() -> f64 {
    0.2
}

fn default_stroke_color() -> String {
    "ff0000".to_string()
}

fn default_stroke_opacity() -> f64 {
    1.0
}

fn default_stroke_width() -> f64 {
    1.0
}
