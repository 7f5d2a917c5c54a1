//! Image map area shapes and the outlines they resolve to.

use super::surface::Surface;
use crate::util::Rect;
use log::{debug, warn};
use std::f64::consts::PI;

/// The shape keyword of an image map area.
///
/// Only circles, polygons and rectangles produce an outline. Any other keyword
/// (including HTML's `default`) is kept as [`AreaShape::Unrecognized`] and
/// renders nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AreaShape {
    /// `[cx, cy, radius]`
    Circle,
    /// `[x0, y0, x1, y1, ...]`, implicitly closed
    Polygon,
    /// `[x1, y1, x2, y2]`, opposite corners
    Rectangle,
    /// Any keyword without an outline
    Unrecognized(String),
}

impl AreaShape {
    /// Maps an HTML `shape` attribute value to a shape.
    ///
    /// Matching is ASCII case-insensitive and accepts both the short keywords
    /// (`circ`, `poly`, `rect`) and the long ones.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.trim().to_ascii_lowercase().as_str() {
            "circle" | "circ" => AreaShape::Circle,
            "poly" | "polygon" => AreaShape::Polygon,
            "rect" | "rectangle" => AreaShape::Rectangle,
            _ => AreaShape::Unrecognized(identifier.to_string()),
        }
    }
}

/// A drawable path resolved from an area's shape and coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
    },
    Polygon {
        points: Vec<(f64, f64)>,
    },
    /// Width and height may be negative when the corners are reversed.
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

impl Outline {
    /// Resolves an area into an outline.
    ///
    /// Returns `None` for unrecognized shapes and for coordinate lists too short
    /// for the shape. Surplus coordinates, including a dangling odd value in a
    /// polygon, are ignored.
    pub fn from_area(shape: &AreaShape, coords: &[i32]) -> Option<Self> {
        let c = |i: usize| f64::from(coords[i]);

        match shape {
            AreaShape::Circle if coords.len() >= 3 => Some(Outline::Circle {
                cx: c(0),
                cy: c(1),
                radius: c(2),
            }),
            AreaShape::Rectangle if coords.len() >= 4 => Some(Outline::Rectangle {
                x: c(0),
                y: c(1),
                width: c(2) - c(0),
                height: c(3) - c(1),
            }),
            AreaShape::Polygon if coords.len() >= 4 => Some(Outline::Polygon {
                points: coords
                    .chunks_exact(2)
                    .map(|pair| (f64::from(pair[0]), f64::from(pair[1])))
                    .collect(),
            }),
            AreaShape::Circle | AreaShape::Rectangle | AreaShape::Polygon => {
                warn!(
                    "Skipping {:?} area with too few coordinates: {:?}",
                    shape, coords
                );
                None
            }
            AreaShape::Unrecognized(identifier) => {
                debug!("Ignoring area with unrecognized shape '{}'", identifier);
                None
            }
        }
    }

    /// Emits the outline's path primitives onto `surface`, starting a new path
    /// and closing it.
    pub fn trace<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.begin_path();
        match self {
            Outline::Circle { cx, cy, radius } => {
                surface.arc(*cx, *cy, *radius, 0.0, PI * 2.0);
            }
            Outline::Polygon { points } => {
                let (x0, y0) = points[0];
                surface.move_to(x0, y0);
                for &(x, y) in &points[1..] {
                    surface.line_to(x, y);
                }
            }
            Outline::Rectangle {
                x,
                y,
                width,
                height,
            } => {
                surface.rect(*x, *y, *width, *height);
            }
        }
        surface.close_path();
    }

    /// Returns the pixel rectangle the outline can touch when stroked with
    /// `stroke_width`.
    pub fn bounding_box(&self, stroke_width: f64) -> Option<Rect> {
        let pad = stroke_width.max(0.0) / 2.0;
        let (min_x, min_y, max_x, max_y) = match self {
            Outline::Circle { cx, cy, radius } => {
                let r = radius.abs();
                (cx - r, cy - r, cx + r, cy + r)
            }
            Outline::Polygon { points } => points.iter().fold(
                (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
                |(min_x, min_y, max_x, max_y), &(x, y)| {
                    (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                },
            ),
            Outline::Rectangle {
                x,
                y,
                width,
                height,
            } => (
                x.min(x + width),
                y.min(y + height),
                x.max(x + width),
                y.max(y + height),
            ),
        };

        Rect::enclosing(min_x - pad, min_y - pad, max_x + pad, max_y + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_map_to_shapes() {
        assert_eq!(AreaShape::from_identifier("circle"), AreaShape::Circle);
        assert_eq!(AreaShape::from_identifier("CIRC"), AreaShape::Circle);
        assert_eq!(AreaShape::from_identifier("poly"), AreaShape::Polygon);
        assert_eq!(AreaShape::from_identifier("Polygon"), AreaShape::Polygon);
        assert_eq!(AreaShape::from_identifier("rect"), AreaShape::Rectangle);
        assert_eq!(AreaShape::from_identifier(" rectangle "), AreaShape::Rectangle);
    }

    #[test]
    fn unknown_identifiers_are_kept() {
        assert_eq!(
            AreaShape::from_identifier("ellipse"),
            AreaShape::Unrecognized("ellipse".to_string())
        );
        assert_eq!(
            AreaShape::from_identifier("default"),
            AreaShape::Unrecognized("default".to_string())
        );
    }

    #[test]
    fn rectangle_width_and_height_come_from_corners() {
        let outline = Outline::from_area(&AreaShape::Rectangle, &[10, 10, 60, 40]);
        assert_eq!(
            outline,
            Some(Outline::Rectangle {
                x: 10.0,
                y: 10.0,
                width: 50.0,
                height: 30.0
            })
        );
    }

    #[test]
    fn reversed_rectangle_corners_are_not_normalized() {
        let outline = Outline::from_area(&AreaShape::Rectangle, &[60, 40, 10, 10]);
        assert_eq!(
            outline,
            Some(Outline::Rectangle {
                x: 60.0,
                y: 40.0,
                width: -50.0,
                height: -30.0
            })
        );
    }

    #[test]
    fn polygon_pairs_become_points_and_odd_tail_is_dropped() {
        let outline = Outline::from_area(&AreaShape::Polygon, &[0, 0, 10, 0, 10, 10, 99]);
        assert_eq!(
            outline,
            Some(Outline::Polygon {
                points: vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]
            })
        );
    }

    #[test]
    fn short_coordinate_lists_resolve_to_nothing() {
        assert_eq!(Outline::from_area(&AreaShape::Circle, &[1, 2]), None);
        assert_eq!(Outline::from_area(&AreaShape::Rectangle, &[1, 2, 3]), None);
        assert_eq!(Outline::from_area(&AreaShape::Polygon, &[1, 2, 3]), None);
        assert_eq!(Outline::from_area(&AreaShape::Polygon, &[]), None);
    }

    #[test]
    fn unrecognized_shape_resolves_to_nothing() {
        let shape = AreaShape::Unrecognized("ellipse".into());
        assert_eq!(Outline::from_area(&shape, &[50, 50, 20, 10]), None);
    }

    #[test]
    fn circle_bounding_box_covers_stroke() {
        let outline = Outline::from_area(&AreaShape::Circle, &[50, 50, 20]).unwrap();
        assert_eq!(outline.bounding_box(0.0), Rect::new(30, 30, 40, 40));
        assert_eq!(outline.bounding_box(1.0), Rect::new(29, 29, 42, 42));
    }

    #[test]
    fn circle_spanning_coordinate_range_has_no_bounding_box() {
        let outline = Outline::from_area(&AreaShape::Circle, &[0, 0, i32::MAX]).unwrap();
        assert_eq!(outline.bounding_box(1.0), None);
        assert_eq!(outline.bounding_box(0.0), None);
    }

    #[test]
    fn rectangle_at_max_edge_bounding_box() {
        let outline =
            Outline::from_area(&AreaShape::Rectangle, &[0, 0, i32::MAX, 10]).unwrap();
        assert_eq!(outline.bounding_box(0.0), Rect::new(0, 0, i32::MAX, 10));
        assert_eq!(outline.bounding_box(1.0), None, "stroke pushes past i32::MAX");

        let outline = Outline::from_area(
            &AreaShape::Rectangle,
            &[i32::MAX, i32::MAX, i32::MAX - 4, i32::MAX - 4],
        )
        .unwrap();
        assert_eq!(
            outline.bounding_box(0.0),
            Rect::new(i32::MAX - 4, i32::MAX - 4, 4, 4)
        );
    }

    #[test]
    fn reversed_rectangle_bounding_box_is_positive() {
        let outline = Outline::from_area(&AreaShape::Rectangle, &[60, 40, 10, 10]).unwrap();
        assert_eq!(outline.bounding_box(2.0), Rect::new(9, 9, 52, 32));
    }

    #[test]
    fn polygon_bounding_box_spans_all_points() {
        let outline =
            Outline::from_area(&AreaShape::Polygon, &[5, 20, 40, 2, 30, 33]).unwrap();
        assert_eq!(outline.bounding_box(0.0), Rect::new(5, 2, 35, 31));
    }
}
