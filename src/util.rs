//! Small parsing and geometry helpers shared by the color resolver, the
//! coordinate parser and the shape outlines.

// ============================================================================
// Integer Parsing
// ============================================================================

/// Parses the leading integer of `text` in the given radix.
///
/// Mirrors the lenient integer-prefix rule browsers apply to attribute values:
/// leading whitespace is skipped, one optional `+`/`-` sign is accepted, and
/// the longest run of digits valid in `radix` is consumed. Anything after that
/// run is ignored, so `"12px"` parses as `12` and `"f9z"` (hex) as `0xf9`.
///
/// Returns `None` when no digit follows the optional sign. Values that would
/// overflow saturate at the `i64` bounds.
///
/// # Examples
///
/// ```
/// use map_highlighter::util::parse_int_prefix;
/// assert_eq!(parse_int_prefix(" 42,", 10), Some(42));
/// assert_eq!(parse_int_prefix("-ff", 16), Some(-255));
/// assert_eq!(parse_int_prefix("zz", 16), None);
/// ```
pub fn parse_int_prefix(text: &str, radix: u32) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut digits = rest.chars().map_while(|c| c.to_digit(radix)).peekable();
    digits.peek()?;

    let magnitude = digits.fold(0i64, |acc, digit| {
        acc.saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit))
    });

    Some(if negative { -magnitude } else { magnitude })
}

// ============================================================================
// Rectangle Helpers
// ============================================================================

/// Axis-aligned integer rectangle with positive width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from floating-point bounds, rounding outwards to
    /// whole pixels.
    ///
    /// Returns `None` when the rounded rectangle does not fit in `i32` pixel
    /// space (e.g. an area spanning the whole coordinate range).
    pub fn enclosing(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Self> {
        let min_x = min_x.floor() as i64;
        let min_y = min_y.floor() as i64;
        let max_x = (max_x.ceil() as i64).max(min_x + 1);
        let max_y = (max_y.ceil() as i64).max(min_y + 1);

        Self::new(
            i32::try_from(min_x).ok()?,
            i32::try_from(min_y).ok()?,
            i32::try_from(max_x - min_x).ok()?,
            i32::try_from(max_y - min_y).ok()?,
        )
        .filter(|_| i32::try_from(max_x).is_ok() && i32::try_from(max_y).is_ok())
    }

    /// Returns true if the pixel at (`px`, `py`) lies inside the rectangle.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        let (px, py) = (i64::from(px), i64::from(py));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        px >= x && px < x + i64::from(self.width) && py >= y && py < y + i64::from(self.height)
    }
}
