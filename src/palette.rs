//! Shape palette: each entry builds one object with fixed default styling
//! and places it on the surface.

use egui::Pos2;

use crate::element::{ObjectId, factory};
use crate::surface::SurfaceHandle;

pub const DEFAULT_POSITION: Pos2 = Pos2::new(100.0, 100.0);
pub const DEFAULT_SHAPE_FILL: &str = "#d9d9d9";
pub const DEFAULT_RECT_SIZE: f32 = 100.0;
pub const DEFAULT_CIRCLE_RADIUS: f32 = 50.0;
pub const DEFAULT_TEXT: &str = "Text";
pub const DEFAULT_FONT_SIZE: f32 = 20.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_TEXT_FILL: &str = "#000000";

/// Entries of the tool palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    AddRectangle,
    AddCircle,
    AddText,
    /// Placeholder; does nothing
    QrCode,
    /// Placeholder; does nothing
    Barcode,
}

impl PaletteAction {
    pub const ALL: [PaletteAction; 5] = [
        PaletteAction::AddRectangle,
        PaletteAction::AddCircle,
        PaletteAction::AddText,
        PaletteAction::QrCode,
        PaletteAction::Barcode,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            PaletteAction::AddRectangle => "◻",
            PaletteAction::AddCircle => "○",
            PaletteAction::AddText => "T",
            PaletteAction::QrCode => "▦",
            PaletteAction::Barcode => "║",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            PaletteAction::AddRectangle => "Add rectangle",
            PaletteAction::AddCircle => "Add circle",
            PaletteAction::AddText => "Add text",
            PaletteAction::QrCode => "QR code (not available)",
            PaletteAction::Barcode => "Barcode (not available)",
        }
    }

    pub fn is_enabled(self) -> bool {
        !matches!(self, PaletteAction::QrCode | PaletteAction::Barcode)
    }

    /// Run the action against the surface, if there is one yet
    pub fn apply(self, surface: Option<&SurfaceHandle>) -> Option<ObjectId> {
        match self {
            PaletteAction::AddRectangle => add_rectangle(surface),
            PaletteAction::AddCircle => add_circle(surface),
            PaletteAction::AddText => add_text(surface),
            PaletteAction::QrCode | PaletteAction::Barcode => None,
        }
    }
}

fn insert(surface: Option<&SurfaceHandle>, object: crate::element::Drawable) -> Option<ObjectId> {
    let surface = surface?;
    match surface.write().add(object) {
        Ok(id) => Some(id),
        Err(err) => {
            log::warn!("object not added: {err}");
            None
        }
    }
}

pub fn add_rectangle(surface: Option<&SurfaceHandle>) -> Option<ObjectId> {
    insert(
        surface,
        factory::create_rectangle(
            DEFAULT_POSITION,
            DEFAULT_RECT_SIZE,
            DEFAULT_RECT_SIZE,
            DEFAULT_SHAPE_FILL,
        ),
    )
}

pub fn add_circle(surface: Option<&SurfaceHandle>) -> Option<ObjectId> {
    insert(
        surface,
        factory::create_circle(DEFAULT_POSITION, DEFAULT_CIRCLE_RADIUS, DEFAULT_SHAPE_FILL),
    )
}

pub fn add_text(surface: Option<&SurfaceHandle>) -> Option<ObjectId> {
    insert(
        surface,
        factory::create_text(
            DEFAULT_TEXT,
            DEFAULT_POSITION,
            DEFAULT_FONT_SIZE,
            DEFAULT_FONT_FAMILY,
            DEFAULT_TEXT_FILL,
        ),
    )
}
