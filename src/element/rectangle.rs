use egui::{Painter, Pos2, Vec2};

use super::common::{Placement, fill_color};
use super::{Element, ObjectId, ObjectKind};

/// Axis-aligned filled rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) id: ObjectId,
    pub placement: Placement,
    /// Unscaled width
    pub width: f32,
    /// Unscaled height
    pub height: f32,
    pub fill: String,
}

impl Rectangle {
    pub fn new(position: Pos2, width: f32, height: f32, fill: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            placement: Placement::at(position),
            width,
            height,
            fill: fill.into(),
        }
    }

    /// Rendered width (`width * scale_x`)
    pub fn display_width(&self) -> f32 {
        self.width * self.placement.scale_x
    }

    /// Rendered height (`height * scale_y`)
    pub fn display_height(&self) -> f32 {
        self.height * self.placement.scale_y
    }
}

impl Element for Rectangle {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Rectangle
    }

    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn base_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn fill(&self) -> &str {
        &self.fill
    }

    fn set_fill(&mut self, fill: String) {
        self.fill = fill;
    }

    fn draw(&self, painter: &Painter, origin: Pos2) {
        let rect = self.bounds().translate(origin.to_vec2());
        if !rect.is_finite() {
            return;
        }
        painter.rect_filled(rect, 0.0, fill_color(&self.fill));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_scale() {
        let mut rect = Rectangle::new(Pos2::new(10.0, 20.0), 100.0, 50.0, "#000");
        rect.placement.scale_x = 2.0;
        rect.placement.scale_y = 0.5;

        let bounds = rect.bounds();
        assert_eq!(bounds.min, Pos2::new(10.0, 20.0));
        assert_eq!(bounds.size(), Vec2::new(200.0, 25.0));
        assert_eq!(rect.display_width(), 200.0);
        assert_eq!(rect.display_height(), 25.0);
    }

    #[test]
    fn hit_test_uses_bounds() {
        let rect = Rectangle::new(Pos2::new(0.0, 0.0), 10.0, 10.0, "#000");
        assert!(rect.hit_test(Pos2::new(5.0, 5.0)));
        assert!(!rect.hit_test(Pos2::new(15.0, 5.0)));
    }
}
