use serde::{Deserialize, Serialize};

use crate::model::session::{
    Participants, SessionId, SessionSnapshot, SessionStarted, TurnOutcome,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSessionRequest {
    pub player_1_name: String,
    pub player_2_name: String,
}

impl From<&Participants> for StartSessionRequest {
    fn from(p: &Participants) -> Self {
        Self {
            player_1_name: p.first.clone(),
            player_2_name: p.second.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionResponse {
    pub thread_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub current_state: Option<SessionSnapshot>,
}

impl StartSessionResponse {
    /// The service starts every session with participant one; its own state
    /// takes precedence when reported.
    pub fn into_started(self, participants: &Participants) -> SessionStarted {
        let active_participant = self
            .current_state
            .and_then(|s| s.active_player)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| participants.first.clone());

        SessionStarted {
            session_id: SessionId::new(self.thread_id),
            active_participant,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRequest {
    pub thread_id: String,
    pub human_intent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TurnResponse {
    #[serde(default)]
    pub thread_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub manuscript: Option<String>,
    pub active_player: String,
    #[serde(default)]
    pub research_notes: Option<String>,
}

impl From<TurnResponse> for TurnOutcome {
    fn from(r: TurnResponse) -> Self {
        TurnOutcome {
            narrative: non_blank(r.manuscript),
            active_participant: r.active_player,
            echoed_session: r.thread_id.map(SessionId::new),
            research_notes: non_blank(r.research_notes),
            status: r.status,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn start_response_prefers_reported_active_player() {
        let raw = r#"{
            "thread_id": "t-1",
            "status": "started",
            "current_state": { "active_player": "Persona B", "messages": [], "manuscript": "" }
        }"#;
        let resp: StartSessionResponse = serde_json::from_str(raw).unwrap();
        let started = resp.into_started(&Participants::new("Persona A", "Persona B"));

        assert_eq!(started.session_id, SessionId::new("t-1"));
        assert_eq!(started.active_participant, "Persona B");
        assert_eq!(started.status.as_deref(), Some("started"));
    }

    #[test]
    fn start_response_without_state_defaults_to_first_participant() {
        let resp: StartSessionResponse = serde_json::from_str(r#"{ "thread_id": "t-2" }"#).unwrap();
        let started = resp.into_started(&Participants::new("Ada", "Grace"));

        assert_eq!(started.active_participant, "Ada");
        assert_eq!(started.status, None);
    }

    #[test]
    fn turn_response_tolerates_missing_and_null_fields() {
        let raw = r#"{ "active_player": "Persona A", "manuscript": null }"#;
        let outcome: TurnOutcome = serde_json::from_str::<TurnResponse>(raw).unwrap().into();

        assert_eq!(
            outcome,
            TurnOutcome {
                narrative: None,
                active_participant: "Persona A".into(),
                echoed_session: None,
                research_notes: None,
                status: None,
            }
        );
    }

    #[test]
    fn turn_response_requires_active_player() {
        let raw = r#"{ "thread_id": "t-1", "manuscript": "text" }"#;
        assert!(serde_json::from_str::<TurnResponse>(raw).is_err());
    }

    #[test]
    fn blank_manuscript_counts_as_absent() {
        let raw = r#"{ "active_player": "Persona B", "manuscript": "  \n", "research_notes": "- note" }"#;
        let outcome: TurnOutcome = serde_json::from_str::<TurnResponse>(raw).unwrap().into();

        assert_eq!(outcome.narrative, None);
        assert_eq!(outcome.research_notes.as_deref(), Some("- note"));
    }

    #[test]
    fn request_bodies_use_service_field_names() {
        let body = serde_json::to_value(StartSessionRequest::from(&Participants::new("A", "B"))).unwrap();
        assert_eq!(body, serde_json::json!({ "player_1_name": "A", "player_2_name": "B" }));

        let body = serde_json::to_value(TurnRequest {
            thread_id: "t".into(),
            human_intent: "look around".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "thread_id": "t", "human_intent": "look around" }));
    }
}
