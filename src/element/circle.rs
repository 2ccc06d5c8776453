use egui::{Painter, Pos2, Vec2};

use super::common::{Placement, fill_color};
use super::{Element, ObjectId, ObjectKind};

/// Filled circle positioned by the top-left corner of its bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub(crate) id: ObjectId,
    pub placement: Placement,
    /// Unscaled radius
    pub radius: f32,
    pub fill: String,
}

impl Circle {
    pub fn new(position: Pos2, radius: f32, fill: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            placement: Placement::at(position),
            radius,
            fill: fill.into(),
        }
    }

    /// Rendered diameter, measured along the horizontal axis
    pub fn display_diameter(&self) -> f32 {
        self.radius * 2.0 * self.placement.scale_x
    }

    pub fn center(&self) -> Pos2 {
        self.bounds().center()
    }
}

impl Element for Circle {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Circle
    }

    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn base_size(&self) -> Vec2 {
        Vec2::splat(self.radius * 2.0)
    }

    fn fill(&self) -> &str {
        &self.fill
    }

    fn set_fill(&mut self, fill: String) {
        self.fill = fill;
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        let bounds = self.bounds();
        let half = bounds.size() / 2.0;
        if half.x <= 0.0 || half.y <= 0.0 {
            return false;
        }
        let d = pos - bounds.center();
        (d.x / half.x).powi(2) + (d.y / half.y).powi(2) <= 1.0
    }

    fn draw(&self, painter: &Painter, origin: Pos2) {
        let center = origin + self.center().to_vec2();
        let radius = self.display_diameter() / 2.0;
        if !center.is_finite() || !radius.is_finite() || radius < 0.0 {
            return;
        }
        painter.circle_filled(center, radius, fill_color(&self.fill));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diameter_uses_horizontal_scale() {
        let mut circle = Circle::new(Pos2::new(100.0, 100.0), 50.0, "#d9d9d9");
        assert_eq!(circle.display_diameter(), 100.0);
        circle.placement.scale_x = 1.5;
        assert_eq!(circle.display_diameter(), 150.0);
    }

    #[test]
    fn corners_of_the_bounding_box_miss() {
        let circle = Circle::new(Pos2::new(0.0, 0.0), 10.0, "#000");
        assert!(circle.hit_test(Pos2::new(10.0, 10.0)));
        assert!(circle.hit_test(Pos2::new(10.0, 1.0)));
        assert!(!circle.hit_test(Pos2::new(1.0, 1.0)));
    }
}
