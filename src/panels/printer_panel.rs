use eframe::egui;

use crate::DesignerApp;

pub fn printer_panel(app: &mut DesignerApp, ctx: &egui::Context) {
    let mut open = app.show_printer;
    egui::Window::new("XPrinter Label Printer")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let connected = app.printer.is_connected();
            if ui
                .add_enabled(connected, egui::Button::new("Print Label"))
                .clicked()
            {
                let printer = app.printer.clone();
                app.tasks.spawn(async move {
                    // failures are logged by the printer
                    let _ = printer.print_label().await;
                });
            }
            if !connected {
                ui.colored_label(egui::Color32::RED, "Connect QZ Tray to enable printing");
            }
        });
    app.show_printer = open;
}
