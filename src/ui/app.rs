use eframe::egui;
use egui::Layout;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::engine::dialogue::DialogueClient;
use crate::engine::engine::EngineHandle;
use crate::engine::protocol::EngineCommand;
use crate::error::ClientError;
use crate::model::message::Message;
use crate::ui::center_panel::draw_center_panel;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::right_panel::draw_right_panel;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;

/* =========================
   Tabs
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RightTab {
    #[default]
    Session,
    State,
}

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub struct UiState {
    pub input_text: String,
    pub should_auto_scroll: bool,
    pub right_tab: RightTab,
    /// Last settings / export feedback shown in the side panels.
    pub notice: Option<String>,
}

/* =========================
   App
   ========================= */

pub struct MyApp {
    pub ui: UiState,
    pub settings: UiSettings,
    /// Persisted client settings with the environment override applied.
    pub client_config: ClientConfig,
    pub client: DialogueClient,

    engine: EngineHandle,
}

impl MyApp {
    pub fn new(settings: UiSettings) -> Self {
        let client_config = settings.client.clone().with_env_override();
        let engine = EngineHandle::spawn_http(&client_config);
        let client = DialogueClient::new(client_config.participants());

        Self {
            ui: UiState::default(),
            settings,
            client_config,
            client,
            engine,
        }
    }

    pub fn send_command(&mut self, cmd: EngineCommand) {
        if self.engine.cmd_tx.send(cmd).is_err() {
            let err = self.engine_error();
            warn!(error = %err, "engine unavailable");
            self.client.fail_outstanding(err);
            self.ui.should_auto_scroll = true;
        }
    }

    pub fn submit_input(&mut self) {
        match self.client.submit(&self.ui.input_text) {
            Ok(cmd) => {
                self.ui.input_text.clear();
                self.ui.should_auto_scroll = true;
                self.send_command(cmd);
            }
            Err(rejection) => debug!(%rejection, "input not sent"),
        }
    }

    pub fn refresh_state(&mut self) {
        match self.client.refresh_state() {
            Ok(cmd) => self.send_command(cmd),
            Err(rejection) => debug!(%rejection, "state refresh not sent"),
        }
    }

    pub fn export_transcript(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("transcript.json")
            .save_file()
        else {
            return;
        };

        self.ui.notice = Some(match self.client.export().write_to(&path) {
            Ok(()) => {
                info!(path = %path.display(), "transcript exported");
                format!("Transcript saved to {}", path.display())
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "transcript export failed");
                format!("Export failed: {e:#}")
            }
        });
    }

    pub fn save_settings(&mut self) {
        self.ui.notice = Some(match settings_io::save_settings(&self.settings) {
            Ok(path) => format!("Settings saved to {}", path.display()),
            Err(e) => {
                warn!(error = %format!("{e:#}"), "settings not saved");
                format!("Could not save settings: {e:#}")
            }
        });
    }

    pub fn draw_message(&self, ui: &mut egui::Ui, msg: &Message) {
        let bg = self.settings.color_for(msg);
        let text = match msg {
            Message::Intent(t) => egui::RichText::new(format!("> {t}"))
                .monospace()
                .color(egui::Color32::from_rgb(74, 222, 128)),
            Message::Narrative(t) => egui::RichText::new(t).color(egui::Color32::WHITE),
            Message::System(t) => egui::RichText::new(t)
                .italics()
                .color(egui::Color32::LIGHT_GRAY),
        };

        ui.add_space(6.0);

        if matches!(msg, Message::Intent(_)) {
            ui.with_layout(Layout::right_to_left(egui::Align::TOP), |ui| {
                bubble(ui, bg, text);
            });
        } else {
            bubble(ui, bg, text);
        }
    }

    fn engine_error(&self) -> ClientError {
        self.engine
            .startup_error
            .clone()
            .unwrap_or(ClientError::WorkerGone)
    }

    fn poll_engine(&mut self) {
        loop {
            match self.engine.resp_rx.try_recv() {
                Ok(resp) => {
                    self.client.apply(resp);
                    self.ui.should_auto_scroll = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.client.is_busy() {
                        let err = self.engine_error();
                        self.client.fail_outstanding(err);
                        self.ui.should_auto_scroll = true;
                    }
                    break;
                }
            }
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        // Fires every frame; the client only acts on the first one.
        if let Some(cmd) = self.client.initiate() {
            self.send_command(cmd);
        }

        self.poll_engine();

        draw_header(ctx, self);
        draw_left_panel(ctx, self);
        draw_right_panel(ctx, self);
        draw_center_panel(ctx, self);

        self.ui.should_auto_scroll = false;

        if self.client.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

/* =========================
   UI Helpers
   ========================= */

fn draw_header(ctx: &egui::Context, app: &MyApp) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(
                egui::RichText::new("THE LAST DIALOGUE")
                    .strong()
                    .color(egui::Color32::from_rgb(34, 197, 94)),
            );

            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(app.client.phase().label()).small().weak());
                if app.client.is_busy() {
                    ui.spinner();
                }
                if let Some(active) = app.client.active_participant() {
                    ui.separator();
                    ui.label(format!("Active: {active}"));
                }
            });
        });
    });
}

fn bubble(ui: &mut egui::Ui, color: egui::Color32, text: egui::RichText) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(text);
        });
}

pub fn optional_text(ui: &mut egui::Ui, label: &str, value: Option<&str>) {
    ui.label(egui::RichText::new(label).strong());
    match value {
        Some(v) if !v.trim().is_empty() => {
            ui.label(v);
        }
        _ => {
            ui.label(egui::RichText::new("None").weak());
        }
    }
}
