//! Drawing surface abstraction and its Cairo-backed implementation.

use super::color::{BLACK, ResolvedColor};
use cairo::{Context, Format, ImageSurface, Operator};
use std::io::Write;

/// A fixed-size 2D raster target with canvas-style path operations.
///
/// Fill and stroke paints are separate pieces of state that persist between
/// calls, and painting does not consume the current path.
pub trait Surface {
    /// Surface width in pixels
    fn width(&self) -> i32;
    /// Surface height in pixels
    fn height(&self) -> i32;

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    /// Adds a clockwise arc around (`cx`, `cy`) from `start` to `end` radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_fill_paint(&mut self, color: ResolvedColor);
    fn fill(&mut self);

    fn set_stroke_paint(&mut self, color: ResolvedColor);
    fn set_stroke_width(&mut self, width: f64);
    fn stroke(&mut self);

    /// Resets the pixels in the given region to fully transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// An ARGB32 image surface with its Cairo drawing context.
///
/// Starts fully transparent with black fill and stroke paints and a one
/// pixel stroke width.
pub struct Canvas {
    surface: ImageSurface,
    ctx: Context,
    width: i32,
    height: i32,
    fill_paint: ResolvedColor,
    stroke_paint: ResolvedColor,
}

impl Canvas {
    /// Creates a transparent canvas of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, cairo::Error> {
        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        let ctx = Context::new(&surface)?;
        ctx.set_line_width(1.0);

        Ok(Self {
            surface,
            ctx,
            width,
            height,
            fill_paint: BLACK,
            stroke_paint: BLACK,
        })
    }

    /// Writes the canvas contents as PNG.
    pub fn write_png<W: Write>(&self, stream: &mut W) -> Result<(), cairo::IoError> {
        self.surface.write_to_png(stream)
    }

    /// Paints `background` and then the canvas on top of it into a new image of
    /// the canvas size.
    pub fn flatten_onto(&self, background: &ImageSurface) -> Result<ImageSurface, cairo::Error> {
        self.surface.flush();

        let output = ImageSurface::create(Format::ARgb32, self.width, self.height)?;
        let ctx = Context::new(&output)?;
        ctx.set_source_surface(background, 0.0, 0.0)?;
        ctx.paint()?;
        ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
        ctx.paint()?;
        drop(ctx);

        Ok(output)
    }

    /// Releases the drawing context and returns the underlying image.
    pub fn into_image(self) -> ImageSurface {
        let Canvas { surface, ctx, .. } = self;
        drop(ctx);
        surface.flush();
        surface
    }

    fn set_source(&self, color: ResolvedColor) {
        let (r, g, b, a) = color.to_rgba();
        self.ctx.set_source_rgba(r, g, b, a);
    }
}

impl Surface for Canvas {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.ctx.arc(cx, cy, radius, start, end);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.rectangle(x, y, width, height);
    }

    fn set_fill_paint(&mut self, color: ResolvedColor) {
        self.fill_paint = color;
    }

    fn fill(&mut self) {
        self.set_source(self.fill_paint);
        if let Err(err) = self.ctx.fill_preserve() {
            log::debug!("Cairo fill failed: {}", err);
        }
    }

    fn set_stroke_paint(&mut self, color: ResolvedColor) {
        self.stroke_paint = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn stroke(&mut self) {
        self.set_source(self.stroke_paint);
        if let Err(err) = self.ctx.stroke_preserve() {
            log::debug!("Cairo stroke failed: {}", err);
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        // Clearing must leave the current path untouched
        let path = self.ctx.copy_path().ok();

        self.ctx.save().ok();
        self.ctx.new_path();
        self.ctx.set_operator(Operator::Clear);
        self.ctx.rectangle(x, y, width, height);
        let _ = self.ctx.fill();
        self.ctx.restore().ok();

        if let Some(path) = path {
            self.ctx.append_path(&path);
        }
    }
}
