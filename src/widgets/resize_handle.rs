use egui::{Color32, CursorIcon, Painter, Pos2, Rect, Stroke, Vec2};

/// Represents a corner of a selection box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top_left",
            Corner::TopRight => "top_right",
            Corner::BottomLeft => "bottom_left",
            Corner::BottomRight => "bottom_right",
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            Corner::TopLeft => CursorIcon::ResizeNwSe,
            Corner::TopRight => CursorIcon::ResizeNeSw,
            Corner::BottomLeft => CursorIcon::ResizeNeSw,
            Corner::BottomRight => CursorIcon::ResizeNwSe,
        }
    }

    /// The diagonally opposite corner, which stays fixed while this one is dragged
    pub fn opposite(&self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    pub fn is_top(&self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Where this corner sits on `rect`
    pub fn position(&self, rect: Rect) -> Pos2 {
        match self {
            Corner::TopLeft => rect.left_top(),
            Corner::TopRight => rect.right_top(),
            Corner::BottomLeft => rect.left_bottom(),
            Corner::BottomRight => rect.right_bottom(),
        }
    }
}

/// A square resize handle drawn on a corner of the selection outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeHandle {
    corner: Corner,
    position: Pos2,
    size: f32,
}

impl ResizeHandle {
    pub fn new(corner: Corner, position: Pos2, size: f32) -> Self {
        Self {
            corner,
            position,
            size,
        }
    }

    /// Screen area covered by the handle
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.position, Vec2::splat(self.size))
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.rect().contains(pos)
    }

    /// The same handle shifted by `offset`, e.g. from surface to screen space
    pub fn translated(self, offset: Vec2) -> Self {
        Self {
            position: self.position + offset,
            ..self
        }
    }

    /// Get the corner this handle represents
    pub fn corner(&self) -> Corner {
        self.corner
    }

    pub fn paint(&self, painter: &Painter) {
        let rect = self.rect();
        if !rect.is_finite() {
            return;
        }
        painter.rect_filled(rect, 2.0, Color32::WHITE);
        painter.rect_stroke(rect, 2.0, Stroke::new(1.0, Color32::from_rgb(30, 120, 255)));
    }
}
