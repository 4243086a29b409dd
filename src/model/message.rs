use serde::{Deserialize, Serialize};

/// One transcript line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Message {
    /// Intent typed by the operator.
    Intent(String),
    /// Narrative text produced by the session service.
    Narrative(String),
    /// Local notice: session opened, request failed.
    System(String),
}

impl Message {
    #[cfg(test)]
    pub fn text(&self) -> &str {
        match self {
            Message::Intent(t) | Message::Narrative(t) | Message::System(t) => t,
        }
    }
}
