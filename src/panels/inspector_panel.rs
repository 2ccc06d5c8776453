use eframe::egui;

use crate::DesignerApp;
use crate::element::{ObjectKind, color_to_hex, parse_color};
use crate::inspector::{Inspector, InspectorState, InspectorTab};
use crate::surface::Surface;

const FIELD_WIDTH: f32 = 64.0;

pub fn inspector_panel(app: &mut DesignerApp, ctx: &egui::Context) {
    egui::SidePanel::right("inspector_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            let Some(handle) = app.host.surface().cloned() else {
                return;
            };
            let mut surface = handle.write();
            let inspector = &mut app.inspector;
            if !inspector.is_attached() && !surface.is_disposed() {
                inspector.attach(&mut surface);
            }
            // events first, so edits made below win over stale read-backs
            inspector.sync(&mut surface);

            ui.horizontal(|ui| {
                for tab in InspectorTab::ALL {
                    if ui.selectable_label(inspector.tab() == tab, tab.label()).clicked() {
                        inspector.set_tab(tab);
                    }
                }
            });
            ui.separator();

            match inspector.tab() {
                InspectorTab::Settings => settings_tab(ui, inspector, &mut surface),
                InspectorTab::Styles => {
                    ui.label("Change your styles here.");
                }
            }
        });
}

fn settings_tab(ui: &mut egui::Ui, inspector: &mut Inspector, surface: &mut Surface) {
    match inspector.state() {
        InspectorState::Unselected => canvas_fields(ui, inspector),
        InspectorState::Unsupported { .. } => {
            ui.heading("Unsupported selection");
        }
        InspectorState::Selected { kind, .. } => {
            ui.heading(kind.label());
            match kind {
                ObjectKind::Rectangle => {
                    ui.horizontal(|ui| {
                        let mut height = inspector.form().height.clone();
                        if number_field(ui, "H", &mut height) {
                            inspector.edit_height(&height, surface);
                        }
                        let mut width = inspector.form().width.clone();
                        if number_field(ui, "W", &mut width) {
                            inspector.edit_width(&width, surface);
                        }
                    });
                }
                ObjectKind::Circle => {
                    ui.horizontal(|ui| {
                        let mut diameter = inspector.form().diameter.clone();
                        if number_field(ui, "D", &mut diameter) {
                            inspector.edit_diameter(&diameter, surface);
                        }
                    });
                }
                ObjectKind::Text => {
                    ui.label("Text");
                    let mut text = inspector.form().text.clone();
                    if ui.text_edit_singleline(&mut text).changed() {
                        inspector.edit_text(&text, surface);
                    }
                }
            }
            ui.add_space(8.0);
            color_field(ui, inspector, surface);
        }
    }
}

/// Canvas size fields, shown while nothing is selected
fn canvas_fields(ui: &mut egui::Ui, inspector: &mut Inspector) {
    ui.heading("Canvas");
    ui.horizontal(|ui| {
        let mut height = inspector.dimension_fields().height.clone();
        if number_field(ui, "H", &mut height) {
            inspector.edit_canvas_height(&height);
        }
        let mut width = inspector.dimension_fields().width.clone();
        if number_field(ui, "W", &mut width) {
            inspector.edit_canvas_width(&width);
        }
    });
}

fn number_field(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(FIELD_WIDTH))
        .changed()
}

fn color_field(ui: &mut egui::Ui, inspector: &mut Inspector, surface: &mut Surface) {
    ui.horizontal(|ui| {
        let current = inspector.form().color.clone();
        let mut color = parse_color(&current).unwrap_or(egui::Color32::BLACK);
        if egui::color_picker::color_edit_button_srgba(
            ui,
            &mut color,
            egui::color_picker::Alpha::Opaque,
        )
        .changed()
        {
            inspector.edit_color(&color_to_hex(color), surface);
        }

        let mut typed = current;
        if ui
            .add(egui::TextEdit::singleline(&mut typed).desired_width(FIELD_WIDTH + 16.0))
            .changed()
        {
            inspector.edit_color(&typed, surface);
        }
    });
}
