use eframe::egui;

use super::app::MyApp;

pub fn draw_center_panel(ctx: &egui::Context, app: &mut MyApp) {
    let input_id = egui::Id::new("director_input_box");
    let can_submit = app.client.can_submit();

    // ---------- Input bar ----------
    egui::TopBottomPanel::bottom("director_input").show(ctx, |ui| {
        let mut send_now = false;

        ui.label(
            egui::RichText::new("DIRECTOR INPUT")
                .small()
                .color(egui::Color32::from_rgb(21, 128, 61)),
        );

        ui.horizontal(|ui| {
            let response = ui.add_enabled(
                can_submit,
                egui::TextEdit::multiline(&mut app.ui.input_text)
                    .id(input_id)
                    .hint_text("Enter your intent…")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(ui.available_width() - 90.0)
                    .desired_rows(3)
                    .lock_focus(true),
            );

            // Enter vs Shift+Enter
            if response.has_focus() {
                let enter = ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);
                if enter {
                    // The key press itself has already been typed into the box.
                    if app.ui.input_text.ends_with('\n') {
                        app.ui.input_text.pop();
                    }
                    send_now = true;
                }
            }

            if ui
                .add_enabled(can_submit, egui::Button::new("Generate"))
                .clicked()
            {
                send_now = true;
            }
        });

        if send_now && can_submit {
            app.submit_input();

            // Keep cursor focused
            ui.memory_mut(|m| m.request_focus(input_id));
        }
    });

    // ---------- Transcript ----------
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(app.ui.should_auto_scroll)
            .show(ui, |ui| {
                for msg in app.client.transcript().entries() {
                    app.draw_message(ui, msg);
                }
            });
    });
}
