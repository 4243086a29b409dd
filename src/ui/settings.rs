use serde::{Deserialize, Serialize};
use egui::Color32;
use std::collections::HashMap;

use crate::config::ClientConfig;
use crate::model::message::Message;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,

    // Entry kind → color mapping
    pub speaker_colors: HashMap<String, [u8; 4]>,

    pub client: ClientConfig,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut speaker_colors = HashMap::new();

        speaker_colors.insert("Director".into(), [20, 60, 35, 255]);
        speaker_colors.insert("Narrative".into(), [55, 60, 70, 255]);
        speaker_colors.insert("System".into(), [80, 80, 80, 255]);

        Self {
            ui_scale: 1.0,
            speaker_colors,
            client: ClientConfig::default(),
        }
    }
}

impl UiSettings {
    pub fn color(&self, key: &str) -> Color32 {
        self.speaker_colors
            .get(key)
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::WHITE)
    }

    pub fn set_color(&mut self, key: &str, color: Color32) {
        self.speaker_colors.insert(
            key.to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }

    pub fn color_for(&self, msg: &Message) -> Color32 {
        self.color(color_key(msg))
    }
}

pub fn color_key(msg: &Message) -> &'static str {
    match msg {
        Message::Intent(_) => "Director",
        Message::Narrative(_) => "Narrative",
        Message::System(_) => "System",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_white() {
        assert_eq!(UiSettings::default().color("Nobody"), Color32::WHITE);
    }

    #[test]
    fn set_color_round_trips() {
        let mut settings = UiSettings::default();
        settings.set_color("Narrative", Color32::from_rgb(1, 2, 3));

        assert_eq!(
            settings.color_for(&Message::Narrative("x".into())),
            Color32::from_rgb(1, 2, 3)
        );
    }

    #[test]
    fn older_files_without_client_section_still_load() {
        let settings: UiSettings = serde_json::from_str(r#"{ "ui_scale": 1.5 }"#).unwrap();

        assert_eq!(settings.ui_scale, 1.5);
        assert_eq!(settings.client, ClientConfig::default());
        assert!(settings.speaker_colors.contains_key("Director"));
    }
}
