use eframe::egui;

use crate::DesignerApp;
use crate::components::tool_button::ToolButton;
use crate::palette::PaletteAction;

pub fn tools_panel(app: &mut DesignerApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(48.0)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let mounted = app.host.is_mounted();
                for action in PaletteAction::ALL {
                    let button = ToolButton::new(action).enabled(action.is_enabled() && mounted);
                    if button.show(ui).clicked() {
                        if let Some(id) = action.apply(app.host.surface()) {
                            log::info!("{} added {}", action.tooltip(), id);
                        }
                    }
                    ui.add_space(4.0);
                }
            });
        });
}
