use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::model::message::Message;
use crate::model::session::Participants;

pub const TRANSCRIPT_SAVE_VERSION: u32 = 1;

/// Exported transcript file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSave {
    pub version: u32,
    pub session_id: Option<String>,
    pub participants: Participants,
    pub active_participant: Option<String>,
    pub messages: Vec<Message>,
}

impl TranscriptSave {
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialising transcript")?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    #[cfg(test)]
    pub fn read_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }
}
