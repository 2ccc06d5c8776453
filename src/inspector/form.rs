use crate::element::{Drawable, Element};

/// Editable mirror of the selected object's properties.
///
/// Fields hold text exactly as shown in the panel; only the subset that
/// belongs to the selected object's kind is ever populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub text: String,
    pub height: String,
    pub width: String,
    pub diameter: String,
    pub color: String,
}

impl FormState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Populate the fields from an object, clearing those its kind does not use
    pub fn read_from(&mut self, object: &Drawable) {
        match object {
            Drawable::Rectangle(rect) => {
                self.height = format_number(round_half_up(rect.display_height()));
                self.width = format_number(round_half_up(rect.display_width()));
                self.diameter.clear();
                self.text.clear();
            }
            Drawable::Circle(circle) => {
                self.diameter = format_number(round_half_up(circle.display_diameter()));
                self.height.clear();
                self.width.clear();
                self.text.clear();
            }
            Drawable::Text(text) => {
                self.text = text.content.clone();
                self.height.clear();
                self.width.clear();
                self.diameter.clear();
            }
        }
        self.color = object.fill().to_owned();
    }
}

/// Largest integer every size field holds exactly; sizes are `f32`, so
/// integers above it are rounded to the nearest representable value.
pub const MAX_EXACT_INTEGER: f32 = 16_777_216.0;

/// Parse the leading integer of a field value.
///
/// Leading whitespace is skipped, then an optional sign and a run of
/// decimal digits are read; anything after them is ignored. Without digits
/// the result is NaN, which callers store as-is. Magnitudes beyond
/// [`MAX_EXACT_INTEGER`] lose precision.
pub fn parse_int(input: &str) -> f32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return f32::NAN;
    }
    let magnitude: f64 = rest[..digits_len].parse().unwrap_or(f64::INFINITY);
    let value = if negative { -magnitude } else { magnitude };
    value as f32
}

/// Round halves towards positive infinity
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Display a number the way the size fields show it
pub fn format_number(value: f32) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned()
    } else if value == 0.0 {
        // no "-0"
        "0".to_owned()
    } else {
        value.to_string()
    }
}
