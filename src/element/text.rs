use egui::{Align2, FontFamily, FontId, Painter, Pos2, Vec2};

use super::common::{Placement, TEXT_ADVANCE_RATIO, TEXT_LINE_HEIGHT, fill_color};
use super::{Element, ObjectId, ObjectKind};

/// Single-line text label
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub(crate) id: ObjectId,
    pub placement: Placement,
    pub font_size: f32,
    pub font_family: String,
    pub content: String,
    pub fill: String,
}

impl Text {
    pub fn new(
        content: impl Into<String>,
        position: Pos2,
        font_size: f32,
        font_family: impl Into<String>,
        fill: impl Into<String>,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            placement: Placement::at(position),
            font_size,
            font_family: font_family.into(),
            content: content.into(),
            fill: fill.into(),
        }
    }

    /// Map the family name onto one of egui's built-in families
    pub fn egui_family(&self) -> FontFamily {
        let name = self.font_family.to_ascii_lowercase();
        if name.contains("mono") || name.contains("courier") {
            FontFamily::Monospace
        } else {
            FontFamily::Proportional
        }
    }
}

impl Element for Text {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Text
    }

    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    // Estimated from the character count; an empty label keeps one glyph of
    // width so it can still be picked.
    fn base_size(&self) -> Vec2 {
        let chars = self.content.chars().count().max(1) as f32;
        Vec2::new(
            chars * self.font_size * TEXT_ADVANCE_RATIO,
            self.font_size * TEXT_LINE_HEIGHT,
        )
    }

    fn fill(&self) -> &str {
        &self.fill
    }

    fn set_fill(&mut self, fill: String) {
        self.fill = fill;
    }

    fn draw(&self, painter: &Painter, origin: Pos2) {
        let pos = origin + self.placement.position.to_vec2();
        let size = self.font_size * self.placement.scale_y;
        if !pos.is_finite() || !size.is_finite() || size <= 0.0 {
            return;
        }
        painter.text(
            pos,
            Align2::LEFT_TOP,
            &self.content,
            FontId::new(size, self.egui_family()),
            fill_color(&self.fill),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_grow_with_content() {
        let mut text = Text::new("Text", Pos2::new(100.0, 100.0), 20.0, "Arial", "#000000");
        let short = text.bounds().width();
        text.content = "Longer text".to_owned();
        assert!(text.bounds().width() > short);
        assert!((text.bounds().height() - 23.2).abs() < 0.001);
    }

    #[test]
    fn empty_text_stays_pickable() {
        let text = Text::new("", Pos2::new(0.0, 0.0), 20.0, "Arial", "#000000");
        assert!(text.bounds().width() > 0.0);
        assert!(text.hit_test(Pos2::new(5.0, 5.0)));
    }

    #[test]
    fn family_mapping() {
        let mut text = Text::new("a", Pos2::ZERO, 12.0, "Arial", "#000");
        assert_eq!(text.egui_family(), FontFamily::Proportional);
        text.font_family = "Courier New".to_owned();
        assert_eq!(text.egui_family(), FontFamily::Monospace);
    }
}
