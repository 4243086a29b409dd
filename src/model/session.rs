use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session token issued by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participants {
    pub first: String,
    pub second: String,
}

impl Participants {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Which call is currently outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Turn,
    StateRefresh,
}

/// Client-observable lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initiating,
    Ready,
    Busy(Pending),
    /// Initiation failed; nothing more can be submitted.
    Unavailable,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Uninitialized => "Starting",
            Phase::Initiating => "Connecting...",
            Phase::Ready => "Idle",
            Phase::Busy(Pending::Turn) => "Processing...",
            Phase::Busy(Pending::StateRefresh) => "Refreshing...",
            Phase::Unavailable => "Unavailable",
        }
    }
}

/// Server-side values reported by `/start_session` and `/state/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSnapshot {
    pub active_player: Option<String>,
    pub manuscript: Option<String>,
    pub human_intent: Option<String>,
    pub research_notes: Option<String>,
    pub draft: Option<String>,
}

/// Result of a successful initiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStarted {
    pub session_id: SessionId,
    pub active_participant: String,
    pub status: Option<String>,
}

/// Result of a successful turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// `None` when the service returned no (or blank) narrative.
    pub narrative: Option<String>,
    pub active_participant: String,
    pub echoed_session: Option<SessionId>,
    pub research_notes: Option<String>,
    pub status: Option<String>,
}
