use eframe::egui;

use crate::palette::PaletteAction;

/// Square icon button for one palette entry
pub struct ToolButton {
    pub action: PaletteAction,
    pub enabled: bool,
}

impl ToolButton {
    pub fn new(action: PaletteAction) -> Self {
        Self {
            action,
            enabled: action.is_enabled(),
        }
    }

    /// Override the enabled state, e.g. while no surface is mounted
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let sense = if self.enabled {
            egui::Sense::click()
        } else {
            egui::Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(button_size, sense);

        if ui.is_rect_visible(rect) {
            let bg_color = if !self.enabled {
                egui::Color32::from_gray(20)
            } else if response.hovered() {
                egui::Color32::from_gray(40) // Lighter gray on hover
            } else {
                egui::Color32::from_gray(30)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.enabled {
                egui::Color32::WHITE
            } else {
                egui::Color32::from_gray(90)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.action.icon(),
                egui::FontId::proportional(24.0),
                text_color,
            );

            if response.hovered() && self.enabled {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.action.tooltip())
    }
}
