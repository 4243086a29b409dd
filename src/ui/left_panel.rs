use eframe::egui;

use super::app::MyApp;
use crate::config::API_URL_ENV;

const COLOR_KEYS: [&str; 3] = ["Director", "Narrative", "System"];

pub fn draw_left_panel(ctx: &egui::Context, app: &mut MyApp) {
    egui::SidePanel::left("left")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.label("UI Scale");
            ui.add(egui::Slider::new(&mut app.settings.ui_scale, 0.75..=2.0));

            ui.collapsing("Colors", |ui| {
                for key in COLOR_KEYS {
                    let mut color = app.settings.color(key);
                    ui.horizontal(|ui| {
                        if ui.color_edit_button_srgba(&mut color).changed() {
                            app.settings.set_color(key, color);
                        }
                        ui.label(key);
                    });
                }
            });

            ui.separator();
            draw_connection(ui, app);

            ui.separator();
            if ui.button("Save settings").clicked() {
                app.save_settings();
            }
        });
}

/* =========================
   Connection
   ========================= */

fn draw_connection(ui: &mut egui::Ui, app: &MyApp) {
    let config = &app.client_config;

    ui.collapsing("Connection", |ui| {
        ui.label(egui::RichText::new("Service").strong());
        ui.label(egui::RichText::new(config.base_url()).monospace());
        if config.base_url() != app.settings.client.base_url() {
            ui.label(
                egui::RichText::new(format!("Overridden by {API_URL_ENV}"))
                    .small()
                    .weak(),
            );
        }

        ui.label(egui::RichText::new("Timeout").strong());
        ui.label(format!("{:.1} s", config.request_timeout().as_secs_f32()));

        ui.label(egui::RichText::new("Participants").strong());
        let p = app.client.participants();
        ui.label(format!("• {}", p.first));
        ui.label(format!("• {}", p.second));
    });
}
