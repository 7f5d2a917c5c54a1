//! Rendering primitives for image map highlights (Cairo-based).
//!
//! This module defines the drawing core:
//! - [`resolve_color`]: hex color + opacity to a [`ResolvedColor`]
//! - [`AreaShape`] / [`Outline`]: area shapes and the paths they trace
//! - [`Surface`]: canvas-style drawing target, implemented by [`Canvas`]
//! - [`render_area`] / [`clear`]: the highlight paint and wipe operations

pub mod color;
pub mod render;
pub mod shape;
pub mod surface;

#[cfg(test)]
pub(crate) mod recorder;

// Re-export commonly used types at module level
pub use color::{ResolvedColor, resolve_color};
pub use render::{clear, render_area};
pub use shape::{AreaShape, Outline};
pub use surface::{Canvas, Surface};
