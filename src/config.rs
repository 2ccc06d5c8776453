use serde::{Deserialize, Serialize};

use crate::surface::DEFAULT_BACKGROUND;

/// Key under which the configuration is kept in eframe storage
pub const CONFIG_KEY: &str = "label_designer.config";

/// Editor settings restored across sessions.
///
/// We derive Deserialize/Serialize so eframe can persist it on shutdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    /// Initial surface width in pixels
    pub canvas_width: f32,
    /// Initial surface height in pixels
    pub canvas_height: f32,
    /// Surface background fill
    pub background: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 500.0,
            canvas_height: 500.0,
            background: DEFAULT_BACKGROUND.to_owned(),
        }
    }
}

impl EditorConfig {
    /// Load from eframe storage, falling back to defaults
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| eframe::get_value(storage, CONFIG_KEY))
            .unwrap_or_default()
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, CONFIG_KEY, self);
    }

    /// Remember the current canvas size for the next session.
    ///
    /// Sizes that are not finite and non-negative are ignored so a
    /// half-typed field never poisons the stored value.
    pub fn remember_canvas_size(&mut self, width: f32, height: f32) {
        if width.is_finite() && width >= 0.0 {
            self.canvas_width = width;
        }
        if height.is_finite() && height >= 0.0 {
            self.canvas_height = height;
        }
    }
}
