//! Area highlight rendering.

use super::color::resolve_color;
use super::shape::{AreaShape, Outline};
use super::surface::Surface;
use crate::config::StyleConfig;

/// Renders the highlight for one area onto `surface`.
///
/// The area's outline is traced, filled with the configured fill color when
/// `style.fill` is set, and stroked with the configured stroke color and width
/// when `style.stroke` is set. Existing pixels are painted over, not cleared.
///
/// Unrecognized shapes and coordinate lists too short for their shape leave
/// the surface untouched.
///
/// With `style.legacy_stroke` the outline is stroked even when `style.stroke`
/// is false, reusing the surface's current stroke paint and width.
///
/// # Arguments
/// * `surface` - Target to draw on
/// * `shape` - Area shape
/// * `coords` - Flat coordinate list, interpreted per shape
/// * `style` - Fill and stroke settings
pub fn render_area<S: Surface + ?Sized>(
    surface: &mut S,
    shape: &AreaShape,
    coords: &[i32],
    style: &StyleConfig,
) {
    let Some(outline) = Outline::from_area(shape, coords) else {
        return;
    };

    outline.trace(surface);

    if style.fill {
        surface.set_fill_paint(resolve_color(&style.fill_color, style.fill_opacity));
        surface.fill();
    }

    if style.stroke {
        surface.set_stroke_paint(resolve_color(&style.stroke_color, style.stroke_opacity));
        surface.set_stroke_width(style.stroke_width);
    }

    if style.stroke || style.legacy_stroke {
        surface.stroke();
    }
}

/// Wipes the whole surface back to transparent.
pub fn clear<S: Surface + ?Sized>(surface: &mut S) {
    let (width, height) = (surface.width(), surface.height());
    surface.clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
}
