use tracing::{debug, info, warn};

use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::error::{ClientError, SubmitRejection};
use crate::model::message::Message;
use crate::model::session::{
    Participants, Pending, Phase, SessionId, SessionSnapshot, SessionStarted, TurnOutcome,
};
use crate::model::transcript::Transcript;
use crate::model::transcript_save::{TranscriptSave, TRANSCRIPT_SAVE_VERSION};

/// Fires once per lifetime, however often it is triggered.
#[derive(Debug, Default)]
pub struct InitLatch {
    fired: bool,
}

impl InitLatch {
    /// Returns `true` only on the first call.
    pub fn try_fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Client-side dialogue state.
///
/// Owned by a single writer. The operations return the command to dispatch
/// to the engine, and results come back through [`DialogueClient::apply`].
/// At most one command is ever outstanding.
#[derive(Debug)]
pub struct DialogueClient {
    participants: Participants,
    phase: Phase,
    session_id: Option<SessionId>,
    active_participant: Option<String>,
    transcript: Transcript,
    research_notes: Option<String>,
    service_status: Option<String>,
    remote_state: Option<SessionSnapshot>,
    init_latch: InitLatch,
}

impl DialogueClient {
    pub fn new(participants: Participants) -> Self {
        Self {
            participants,
            phase: Phase::Uninitialized,
            session_id: None,
            active_participant: None,
            transcript: Transcript::default(),
            research_notes: None,
            service_status: None,
            remote_state: None,
            init_latch: InitLatch::default(),
        }
    }

    /* =========================
       Operations
       ========================= */

    /// Safe to call repeatedly; only the first call yields a command.
    pub fn initiate(&mut self) -> Option<EngineCommand> {
        if !self.init_latch.try_fire() {
            return None;
        }

        info!(
            first = %self.participants.first,
            second = %self.participants.second,
            "opening session"
        );
        self.phase = Phase::Initiating;

        Some(EngineCommand::StartSession {
            participants: self.participants.clone(),
        })
    }

    pub fn submit(&mut self, intent: &str) -> Result<EngineCommand, SubmitRejection> {
        if intent.trim().is_empty() {
            return Err(self.reject(SubmitRejection::EmptyIntent));
        }
        let session_id = self.ready_session()?;

        self.transcript.push(Message::Intent(intent.to_string()));
        self.phase = Phase::Busy(Pending::Turn);

        Ok(EngineCommand::SubmitTurn {
            session_id,
            intent: intent.to_string(),
        })
    }

    pub fn refresh_state(&mut self) -> Result<EngineCommand, SubmitRejection> {
        let session_id = self.ready_session()?;
        self.phase = Phase::Busy(Pending::StateRefresh);

        Ok(EngineCommand::FetchState { session_id })
    }

    pub fn apply(&mut self, response: EngineResponse) {
        match response {
            EngineResponse::SessionStarted(result) => self.on_session_started(result),
            EngineResponse::TurnCompleted(result) => self.on_turn_completed(result),
            EngineResponse::StateFetched(result) => self.on_state_fetched(result),
        }
    }

    /// Fails whatever call is outstanding, e.g. when the engine is gone.
    pub fn fail_outstanding(&mut self, err: ClientError) {
        match self.phase {
            Phase::Initiating => self.on_session_started(Err(err)),
            Phase::Busy(Pending::Turn) => self.on_turn_completed(Err(err)),
            Phase::Busy(Pending::StateRefresh) => self.on_state_fetched(Err(err)),
            Phase::Uninitialized | Phase::Ready | Phase::Unavailable => {}
        }
    }

    /* =========================
       Accessors
       ========================= */

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Initiating | Phase::Busy(_))
    }

    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Ready && self.session_id.is_some()
    }

    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn active_participant(&self) -> Option<&str> {
        self.active_participant.as_deref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn research_notes(&self) -> Option<&str> {
        self.research_notes.as_deref()
    }

    pub fn service_status(&self) -> Option<&str> {
        self.service_status.as_deref()
    }

    pub fn remote_state(&self) -> Option<&SessionSnapshot> {
        self.remote_state.as_ref()
    }

    pub fn export(&self) -> TranscriptSave {
        TranscriptSave {
            version: TRANSCRIPT_SAVE_VERSION,
            session_id: self.session_id.as_ref().map(|s| s.to_string()),
            participants: self.participants.clone(),
            active_participant: self.active_participant.clone(),
            messages: self.transcript.entries().to_vec(),
        }
    }

    /* =========================
       Internals
       ========================= */

    fn ready_session(&self) -> Result<SessionId, SubmitRejection> {
        match (self.phase, &self.session_id) {
            (Phase::Unavailable, _) => Err(self.reject(SubmitRejection::Unavailable)),
            (Phase::Initiating | Phase::Busy(_), _) => Err(self.reject(SubmitRejection::Busy)),
            (_, None) => Err(self.reject(SubmitRejection::NoSession)),
            (Phase::Ready, Some(id)) => Ok(id.clone()),
            (Phase::Uninitialized, Some(_)) => Err(self.reject(SubmitRejection::NoSession)),
        }
    }

    fn reject(&self, rejection: SubmitRejection) -> SubmitRejection {
        debug!(%rejection, phase = ?self.phase, "submission ignored");
        rejection
    }

    fn on_session_started(&mut self, result: Result<SessionStarted, ClientError>) {
        if self.phase != Phase::Initiating {
            warn!(phase = ?self.phase, "ignoring unexpected session start result");
            return;
        }

        match result {
            Ok(started) => {
                info!(session_id = %started.session_id, active = %started.active_participant, "session started");
                self.transcript
                    .push(Message::System(format!("Session started: {}", started.session_id)));
                self.session_id = Some(started.session_id);
                self.active_participant = Some(started.active_participant);
                self.service_status = started.status;
                self.phase = Phase::Ready;
            }
            Err(err) => {
                warn!(error = %err, "session initiation failed");
                self.transcript
                    .push(Message::System(format!("Could not start session: {err}")));
                self.phase = Phase::Unavailable;
            }
        }
    }

    fn on_turn_completed(&mut self, result: Result<TurnOutcome, ClientError>) {
        if self.phase != Phase::Busy(Pending::Turn) {
            warn!(phase = ?self.phase, "ignoring unexpected turn result");
            return;
        }

        match result {
            Ok(outcome) => {
                if let (Some(echoed), Some(held)) = (&outcome.echoed_session, &self.session_id) {
                    if echoed != held {
                        warn!(%echoed, %held, "service echoed a different session id");
                    }
                }
                if let Some(narrative) = outcome.narrative {
                    self.transcript.push(Message::Narrative(narrative));
                }
                debug!(active = %outcome.active_participant, "turn completed");
                self.active_participant = Some(outcome.active_participant);
                self.research_notes = outcome.research_notes.or(self.research_notes.take());
                if outcome.status.is_some() {
                    self.service_status = outcome.status;
                }
            }
            Err(err) => {
                warn!(error = %err, "turn submission failed");
                self.transcript.push(Message::System(format!("Turn failed: {err}")));
            }
        }
        self.phase = Phase::Ready;
    }

    fn on_state_fetched(&mut self, result: Result<SessionSnapshot, ClientError>) {
        if self.phase != Phase::Busy(Pending::StateRefresh) {
            warn!(phase = ?self.phase, "ignoring unexpected state result");
            return;
        }

        match result {
            Ok(snapshot) => {
                if let Some(active) = snapshot.active_player.clone().filter(|a| !a.trim().is_empty()) {
                    self.active_participant = Some(active);
                }
                self.remote_state = Some(snapshot);
            }
            Err(err) => {
                warn!(error = %err, "state refresh failed");
                self.transcript
                    .push(Message::System(format!("State refresh failed: {err}")));
            }
        }
        self.phase = Phase::Ready;
    }
}
