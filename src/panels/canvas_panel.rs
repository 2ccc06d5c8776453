use eframe::egui;

use crate::DesignerApp;

pub fn canvas_panel(app: &mut DesignerApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(handle) = app.host.surface().cloned() else {
            ui.label("Surface not mounted");
            return;
        };
        let mut surface = handle.write();

        egui::ScrollArea::both().show(ui, |ui| {
            let size = surface.dimensions().sanitized();
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let origin = response.rect.min;
            let to_surface = |pos: egui::Pos2| (pos - origin).to_pos2();

            let (pressed, released, shift, pointer) = ui.input(|i| {
                (
                    i.pointer.primary_pressed(),
                    i.pointer.primary_released(),
                    i.modifiers.shift,
                    i.pointer.interact_pos(),
                )
            });

            if let Some(pos) = pointer {
                if pressed && response.hovered() {
                    app.interaction.pointer_pressed(to_surface(pos), shift, &mut surface);
                } else if !app.interaction.is_idle() {
                    app.interaction.pointer_moved(to_surface(pos), &mut surface);
                }
                if let Some((_, corner)) = app.interaction.handle_at(&surface, to_surface(pos)) {
                    ctx.set_cursor_icon(corner.cursor_icon());
                }
            }
            if released {
                app.interaction.pointer_released(&mut surface);
            }

            app.renderer.render(&painter, origin, &surface, &app.interaction);
        });

        if surface.take_render_request() {
            ctx.request_repaint();
        }
    });
}
