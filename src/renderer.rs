// src/renderer.rs
use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke};

use crate::element::{Element, parse_color};
use crate::surface::{CanvasInteraction, Surface};

#[derive(Debug, Clone)]
pub struct Renderer {
    selection_stroke: Stroke,
    /// Used when the surface background is not a valid color
    fallback_background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            selection_stroke: Stroke::new(1.0, Color32::from_rgb(33, 150, 243)),
            fallback_background: Color32::WHITE,
        }
    }

    /// Screen rect covered by the surface when its top-left sits at `origin`
    pub fn surface_rect(surface: &Surface, origin: Pos2) -> Rect {
        Rect::from_min_size(origin, surface.dimensions().sanitized())
    }

    /// Paints the surface: background, objects bottom to top, then the
    /// selection outlines and the active object's resize handles.
    pub fn render(
        &self,
        painter: &Painter,
        origin: Pos2,
        surface: &Surface,
        interaction: &CanvasInteraction,
    ) {
        let canvas = Self::surface_rect(surface, origin);
        let painter = painter.with_clip_rect(canvas);

        let background = parse_color(surface.background()).unwrap_or(self.fallback_background);
        painter.rect_filled(canvas, 0.0, background);

        for object in surface.objects() {
            object.draw(&painter, origin);
        }

        for outline in self.selection_outlines(surface, origin) {
            painter.rect_stroke(outline, 0.0, self.selection_stroke);
        }

        if let Some(object) = surface.active_object().and_then(|id| surface.object(id)) {
            for handle in interaction.handles(object) {
                handle.translated(origin.to_vec2()).paint(&painter);
            }
        }
    }

    /// Screen rects outlining each selected object
    pub fn selection_outlines(&self, surface: &Surface, origin: Pos2) -> Vec<Rect> {
        surface
            .selection()
            .iter()
            .filter_map(|id| surface.object(*id))
            .map(|object| object.bounds().translate(origin.to_vec2()))
            .filter(|rect| rect.is_finite())
            .collect()
    }
}
