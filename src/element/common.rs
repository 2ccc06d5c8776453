use egui::{Color32, Pos2, Vec2};

/// Smallest on-screen extent an object can be scaled down to
pub const MIN_SCALED_EXTENT: f32 = 1.0;

/// Average glyph advance relative to the font size, used to estimate text bounds
pub const TEXT_ADVANCE_RATIO: f32 = 0.6;
/// Line height relative to the font size
pub const TEXT_LINE_HEIGHT: f32 = 1.16;

/// Position and per-axis scale shared by every drawable.
///
/// `position` is the top-left corner of the object's bounding box in surface
/// coordinates. The rendered size of an object is always its base geometry
/// multiplied by the scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Pos2,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Placement {
    pub fn at(position: Pos2) -> Self {
        Self {
            position,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Apply the scale factors to an unscaled size
    pub fn scaled(&self, base: Vec2) -> Vec2 {
        Vec2::new(base.x * self.scale_x, base.y * self.scale_y)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::at(Pos2::ZERO)
    }
}

/// Parse a CSS hex color (`#rgb`, `#rrggbb` or `#rrggbbaa`).
///
/// Fills are stored verbatim and never validated, so anything else yields `None`
/// and is painted transparent.
pub fn parse_color(color: &str) -> Option<Color32> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}

/// Paint color for a stored fill string
pub(crate) fn fill_color(fill: &str) -> Color32 {
    parse_color(fill).unwrap_or(Color32::TRANSPARENT)
}

/// Format an opaque color as `#rrggbb`
pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
