//! Highlight overlays for HTML client-side image maps.
//!
//! Given the areas of an image map (circle, polygon and rectangle shapes with
//! flat coordinate lists), draws a semi-transparent fill and outline over the
//! hovered area on a surface layered above the image, or over every area at
//! once in always-on mode.

pub mod config;
pub mod draw;
pub mod highlight;
pub mod map;
pub mod util;

pub use config::{Config, StyleConfig};
pub use highlight::{Highlighter, PointerEvent};
pub use map::{Area, HighlightError, Scene};
