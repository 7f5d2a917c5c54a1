//! Hex color resolution for highlight paints.

use crate::util::parse_int_prefix;
use std::fmt;

/// A paint color with three 8-bit channels and an opacity.
///
/// Channels are always within 0-255. The opacity is carried through exactly as
/// the caller supplied it; keeping it within 0.0-1.0 is the caller's job.
///
/// # Examples
///
/// ```
/// use map_highlighter::draw::resolve_color;
/// let red = resolve_color("ff0000", 1.0);
/// assert_eq!((red.r, red.g, red.b), (255, 0, 0));
/// assert_eq!(red.to_string(), "rgba(255, 0, 0, 1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity (0.0 = fully transparent, 1.0 = fully opaque)
    pub opacity: f64,
}

/// Opaque black, the initial paint of a fresh drawing surface.
pub const BLACK: ResolvedColor = ResolvedColor {
    r: 0,
    g: 0,
    b: 0,
    opacity: 1.0,
};

impl ResolvedColor {
    /// Returns the color as Cairo-style `(r, g, b, a)` components in 0.0-1.0.
    pub fn to_rgba(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            self.opacity,
        )
    }
}

impl fmt::Display for ResolvedColor {
    /// Formats as a CSS3 `rgba()` color.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.opacity)
    }
}

/// Resolves a six hex digit color string and an opacity into a paint color.
///
/// The string is read as three two-character groups (red, green, blue). Each
/// group is parsed as a base-16 integer prefix and clamped to 0-255. Groups
/// that are missing or contain no hex digit resolve to 0, so malformed input
/// never fails.
pub fn resolve_color(hex: &str, opacity: f64) -> ResolvedColor {
    ResolvedColor {
        r: channel(hex, 0),
        g: channel(hex, 1),
        b: channel(hex, 2),
        opacity,
    }
}

fn channel(hex: &str, index: usize) -> u8 {
    let group: String = hex.chars().skip(index * 2).take(2).collect();
    parse_int_prefix(&group, 16).map_or(0, |value| value.clamp(0, 255) as u8)
}
