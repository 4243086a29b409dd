use eframe::egui;

use super::app::{optional_text, MyApp, RightTab};
use crate::model::session::SessionSnapshot;

pub fn draw_right_panel(ctx: &egui::Context, app: &mut MyApp) {
    egui::SidePanel::right("right")
        .resizable(true)
        .default_width(300.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut app.ui.right_tab, RightTab::Session, "Session");
                ui.selectable_value(&mut app.ui.right_tab, RightTab::State, "State");
            });

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match app.ui.right_tab {
                RightTab::Session => draw_session(ui, app),
                RightTab::State => draw_state(ui, app),
            });
        });
}

/* =========================
   Session UI
   ========================= */

fn draw_session(ui: &mut egui::Ui, app: &mut MyApp) {
    ui.heading("Session");

    let session_id = app.client.session_id().map(|s| s.to_string());
    optional_text(ui, "Session ID", session_id.as_deref());
    optional_text(ui, "Active participant", app.client.active_participant());
    optional_text(ui, "Service status", app.client.service_status());

    ui.separator();
    ui.collapsing("Research notes", |ui| {
        match app.client.research_notes() {
            Some(notes) => ui.label(notes),
            None => ui.label(egui::RichText::new("None").weak()),
        };
    });

    ui.separator();
    let entries = app.client.transcript().len();
    ui.label(egui::RichText::new(format!("{entries} transcript entries")).small().weak());
    let export = ui
        .add_enabled(
            !app.client.transcript().is_empty(),
            egui::Button::new("Export transcript…"),
        )
        .clicked();
    if export {
        app.export_transcript();
    }

    if let Some(notice) = &app.ui.notice {
        ui.label(egui::RichText::new(notice).small().weak());
    }
}

/* =========================
   Remote state UI
   ========================= */

fn draw_state(ui: &mut egui::Ui, app: &mut MyApp) {
    ui.heading("Server state");

    if ui
        .add_enabled(app.client.can_submit(), egui::Button::new("Refresh"))
        .clicked()
    {
        app.refresh_state();
    }

    ui.separator();

    match app.client.remote_state() {
        Some(snapshot) => draw_snapshot(ui, snapshot),
        None => {
            ui.label(egui::RichText::new("Not fetched yet").weak());
        }
    }
}

fn draw_snapshot(ui: &mut egui::Ui, s: &SessionSnapshot) {
    optional_text(ui, "Active player", s.active_player.as_deref());
    optional_text(ui, "Last intent", s.human_intent.as_deref());

    ui.collapsing("Manuscript", |ui| {
        optional_text(ui, "Text", s.manuscript.as_deref());
    });
    ui.collapsing("Draft", |ui| {
        optional_text(ui, "Structure", s.draft.as_deref());
    });
    ui.collapsing("Research notes", |ui| {
        optional_text(ui, "Notes", s.research_notes.as_deref());
    });
}
