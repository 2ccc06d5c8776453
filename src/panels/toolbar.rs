use eframe::egui;

use crate::DesignerApp;

pub fn toolbar(app: &mut DesignerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.heading("Label Designer");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.toggle_value(&mut app.show_printer, "🖨 Printer");
            });
        });
    });
}
