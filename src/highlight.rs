//! Hover-driven highlight controller.

use crate::config::StyleConfig;
use crate::draw::{Surface, clear, render_area};
use crate::map::{Area, ImageMap};
use log::{debug, warn};

/// Pointer activity over the areas of an image map.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent<'a> {
    /// The pointer moved onto an area
    Enter(&'a Area),
    /// The pointer left the area it was over
    Leave,
}

/// Owns an overlay surface and keeps it in sync with pointer events.
///
/// In hover mode the surface shows at most one highlighted area at a time. In
/// always-on mode every area is drawn once by [`Highlighter::install`] and
/// pointer events are ignored.
pub struct Highlighter<S: Surface> {
    surface: S,
    style: StyleConfig,
}

impl<S: Surface> Highlighter<S> {
    pub fn new(surface: S, style: StyleConfig) -> Self {
        Self { surface, style }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Prepares the overlay for `map`.
    ///
    /// In always-on mode every area that parses is drawn; areas with invalid
    /// coordinates are skipped with a warning. Returns the number of areas
    /// drawn (always 0 in hover mode).
    pub fn install(&mut self, map: &ImageMap) -> usize {
        if !self.style.always_on {
            debug!("Hover mode: waiting for pointer events on map '{}'", map.name);
            return 0;
        }

        let mut drawn = 0;
        for (index, area) in map.areas().enumerate() {
            match area {
                Ok(area) => {
                    render_area(&mut self.surface, &area.shape, &area.coords, &self.style);
                    drawn += 1;
                }
                Err(err) => warn!("Skipping area {} of map '{}': {}", index, map.name, err),
            }
        }

        debug!("Always-on mode: drew {} area(s) of map '{}'", drawn, map.name);
        drawn
    }

    /// Updates the overlay for a pointer event.
    ///
    /// Entering an area replaces any previous highlight with that area's;
    /// leaving clears the overlay.
    pub fn handle(&mut self, event: PointerEvent<'_>) {
        if self.style.always_on {
            return;
        }

        match event {
            PointerEvent::Enter(area) => {
                clear(&mut self.surface);
                render_area(&mut self.surface, &area.shape, &area.coords, &self.style);
            }
            PointerEvent::Leave => clear(&mut self.surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::AreaShape;
    use crate::draw::recorder::{Op, Recorder};
    use crate::map::AreaSpec;

    fn map() -> ImageMap {
        ImageMap {
            name: "shapes".to_string(),
            areas: vec![
                AreaSpec {
                    shape: "circle".into(),
                    coords: "50,50,20".into(),
                },
                AreaSpec {
                    shape: "rect".into(),
                    coords: "oops".into(),
                },
                AreaSpec {
                    shape: "rect".into(),
                    coords: "10,10,60,40".into(),
                },
            ],
        }
    }

    fn always_on() -> StyleConfig {
        StyleConfig {
            always_on: true,
            ..StyleConfig::default()
        }
    }

    #[test]
    fn hover_mode_install_draws_nothing() {
        let mut highlighter = Highlighter::new(Recorder::new(100, 100), StyleConfig::default());
        assert_eq!(highlighter.install(&map()), 0);
        assert!(highlighter.surface().ops.is_empty());
    }

    #[test]
    fn always_on_install_draws_valid_areas() {
        let mut highlighter = Highlighter::new(Recorder::new(100, 100), always_on());
        assert_eq!(highlighter.install(&map()), 2);

        let ops = &highlighter.surface().ops;
        assert!(ops.contains(&Op::Arc(50.0, 50.0, 20.0, 0.0, std::f64::consts::PI * 2.0)));
        assert!(ops.contains(&Op::Rect(10.0, 10.0, 50.0, 30.0)));
        assert!(!ops.iter().any(|op| matches!(op, Op::ClearRect(..))));
    }

    #[test]
    fn enter_clears_then_draws() {
        let mut highlighter = Highlighter::new(Recorder::new(80, 60), StyleConfig::default());
        let area = Area::new(AreaShape::Rectangle, vec![1, 2, 3, 4]);
        highlighter.handle(PointerEvent::Enter(&area));

        let ops = &highlighter.surface().ops;
        assert_eq!(ops[0], Op::ClearRect(0.0, 0.0, 80.0, 60.0));
        assert_eq!(ops[1], Op::BeginPath);
        assert_eq!(ops[2], Op::Rect(1.0, 2.0, 2.0, 2.0));
        assert_eq!(highlighter.surface().paints().len(), 2);
    }

    #[test]
    fn leave_clears() {
        let mut highlighter = Highlighter::new(Recorder::new(80, 60), StyleConfig::default());
        highlighter.handle(PointerEvent::Leave);
        assert_eq!(
            highlighter.into_surface().ops,
            vec![Op::ClearRect(0.0, 0.0, 80.0, 60.0)]
        );
    }

    #[test]
    fn entering_unknown_shape_only_clears() {
        let mut highlighter = Highlighter::new(Recorder::new(80, 60), StyleConfig::default());
        let area = Area::parse("ellipse", "5,5,3,3").unwrap();
        highlighter.handle(PointerEvent::Enter(&area));
        assert_eq!(
            highlighter.surface().ops,
            vec![Op::ClearRect(0.0, 0.0, 80.0, 60.0)]
        );
    }

    #[test]
    fn always_on_ignores_pointer_events() {
        let mut highlighter = Highlighter::new(Recorder::new(80, 60), always_on());
        let area = Area::new(AreaShape::Circle, vec![5, 5, 3]);
        highlighter.handle(PointerEvent::Enter(&area));
        highlighter.handle(PointerEvent::Leave);
        assert!(highlighter.surface().ops.is_empty());
        assert!(highlighter.style().always_on);
    }
}
