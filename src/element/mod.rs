use egui::{Painter, Pos2, Rect, Vec2};
use uuid::Uuid;

mod common;
mod circle;
mod rectangle;
mod text;

pub use circle::Circle;
pub use common::{
    MIN_SCALED_EXTENT, Placement, TEXT_ADVANCE_RATIO, TEXT_LINE_HEIGHT, color_to_hex, parse_color,
};
pub use rectangle::Rectangle;
pub use text::Text;

/// Stable identifier of an object placed on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ObjectId(Uuid);

impl ObjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kinds of object a surface can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Rectangle,
    Circle,
    Text,
}

impl ObjectKind {
    /// Human readable name shown as the inspector heading
    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::Rectangle => "Rectangle",
            ObjectKind::Circle => "Circle",
            ObjectKind::Text => "Text",
        }
    }

    /// Whether interactive resizing keeps both scale factors equal
    pub fn scales_uniformly(self) -> bool {
        match self {
            ObjectKind::Rectangle => false,
            ObjectKind::Circle | ObjectKind::Text => true,
        }
    }
}

/// Common trait that all drawable objects implement
pub trait Element {
    /// Get the unique identifier for this object
    fn id(&self) -> ObjectId;

    fn kind(&self) -> ObjectKind;

    fn placement(&self) -> &Placement;

    fn placement_mut(&mut self) -> &mut Placement;

    /// Unscaled geometry size
    fn base_size(&self) -> Vec2;

    /// The fill exactly as it was last assigned
    fn fill(&self) -> &str;

    fn set_fill(&mut self, fill: String);

    /// Draw the object, offsetting surface coordinates by `origin`
    fn draw(&self, painter: &Painter, origin: Pos2);

    /// Bounding box in surface coordinates, scale applied
    fn bounds(&self) -> Rect {
        let placement = self.placement();
        Rect::from_min_size(placement.position, placement.scaled(self.base_size()))
    }

    /// Test if the object covers the given surface position
    fn hit_test(&self, pos: Pos2) -> bool {
        self.bounds().contains(pos)
    }

    /// Move the object by the given delta
    fn translate(&mut self, delta: Vec2) {
        self.placement_mut().position += delta;
    }
}

/// Every object a surface can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Rectangle(Rectangle),
    Circle(Circle),
    Text(Text),
}

impl Drawable {
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Drawable::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_rectangle_mut(&mut self) -> Option<&mut Rectangle> {
        match self {
            Drawable::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Drawable::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match self {
            Drawable::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Drawable::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Drawable::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl Element for Drawable {
    fn id(&self) -> ObjectId {
        match self {
            Drawable::Rectangle(r) => r.id(),
            Drawable::Circle(c) => c.id(),
            Drawable::Text(t) => t.id(),
        }
    }

    fn kind(&self) -> ObjectKind {
        match self {
            Drawable::Rectangle(r) => r.kind(),
            Drawable::Circle(c) => c.kind(),
            Drawable::Text(t) => t.kind(),
        }
    }

    fn placement(&self) -> &Placement {
        match self {
            Drawable::Rectangle(r) => r.placement(),
            Drawable::Circle(c) => c.placement(),
            Drawable::Text(t) => t.placement(),
        }
    }

    fn placement_mut(&mut self) -> &mut Placement {
        match self {
            Drawable::Rectangle(r) => r.placement_mut(),
            Drawable::Circle(c) => c.placement_mut(),
            Drawable::Text(t) => t.placement_mut(),
        }
    }

    fn base_size(&self) -> Vec2 {
        match self {
            Drawable::Rectangle(r) => r.base_size(),
            Drawable::Circle(c) => c.base_size(),
            Drawable::Text(t) => t.base_size(),
        }
    }

    fn fill(&self) -> &str {
        match self {
            Drawable::Rectangle(r) => r.fill(),
            Drawable::Circle(c) => c.fill(),
            Drawable::Text(t) => t.fill(),
        }
    }

    fn set_fill(&mut self, fill: String) {
        match self {
            Drawable::Rectangle(r) => r.set_fill(fill),
            Drawable::Circle(c) => c.set_fill(fill),
            Drawable::Text(t) => t.set_fill(fill),
        }
    }

    fn draw(&self, painter: &Painter, origin: Pos2) {
        match self {
            Drawable::Rectangle(r) => r.draw(painter, origin),
            Drawable::Circle(c) => c.draw(painter, origin),
            Drawable::Text(t) => t.draw(painter, origin),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Drawable::Rectangle(r) => r.bounds(),
            Drawable::Circle(c) => c.bounds(),
            Drawable::Text(t) => t.bounds(),
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        match self {
            Drawable::Rectangle(r) => r.hit_test(pos),
            Drawable::Circle(c) => c.hit_test(pos),
            Drawable::Text(t) => t.hit_test(pos),
        }
    }
}

impl From<Rectangle> for Drawable {
    fn from(value: Rectangle) -> Self {
        Drawable::Rectangle(value)
    }
}

impl From<Circle> for Drawable {
    fn from(value: Circle) -> Self {
        Drawable::Circle(value)
    }
}

impl From<Text> for Drawable {
    fn from(value: Text) -> Self {
        Drawable::Text(value)
    }
}

/// Factory functions for creating drawables
pub mod factory {
    use super::*;

    pub fn create_rectangle(position: Pos2, width: f32, height: f32, fill: &str) -> Drawable {
        Rectangle::new(position, width, height, fill).into()
    }

    pub fn create_circle(position: Pos2, radius: f32, fill: &str) -> Drawable {
        Circle::new(position, radius, fill).into()
    }

    pub fn create_text(
        content: &str,
        position: Pos2,
        font_size: f32,
        font_family: &str,
        fill: &str,
    ) -> Drawable {
        Text::new(content, position, font_size, font_family, fill).into()
    }
}
