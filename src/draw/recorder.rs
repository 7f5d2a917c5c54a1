use super::color::{BLACK, ResolvedColor};
use super::surface::Surface;

/// One call made against a [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Arc(f64, f64, f64, f64, f64),
    Rect(f64, f64, f64, f64),
    FillPaint(ResolvedColor),
    Fill(ResolvedColor),
    StrokePaint(ResolvedColor),
    StrokeWidth(f64),
    Stroke(ResolvedColor, f64),
    ClearRect(f64, f64, f64, f64),
}

/// Surface that records every operation instead of rasterizing.
pub(crate) struct Recorder {
    pub ops: Vec<Op>,
    width: i32,
    height: i32,
    fill_paint: ResolvedColor,
    stroke_paint: ResolvedColor,
    stroke_width: f64,
}

impl Recorder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            ops: Vec::new(),
            width,
            height,
            fill_paint: BLACK,
            stroke_paint: BLACK,
            stroke_width: 1.0,
        }
    }

    /// Operations that put paint on the surface.
    pub fn paints(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Fill(..) | Op::Stroke(..)))
            .collect()
    }
}

impl Surface for Recorder {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.ops.push(Op::Arc(cx, cy, radius, start, end));
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::Rect(x, y, width, height));
    }

    fn set_fill_paint(&mut self, color: ResolvedColor) {
        self.fill_paint = color;
        self.ops.push(Op::FillPaint(color));
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill(self.fill_paint));
    }

    fn set_stroke_paint(&mut self, color: ResolvedColor) {
        self.stroke_paint = color;
        self.ops.push(Op::StrokePaint(color));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
        self.ops.push(Op::StrokeWidth(width));
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke(self.stroke_paint, self.stroke_width));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::ClearRect(x, y, width, height));
    }
}
