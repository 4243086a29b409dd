use crate::error::ClientError;
use crate::model::session::{
    Participants, SessionId, SessionSnapshot, SessionStarted, TurnOutcome,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    StartSession {
        participants: Participants,
    },
    SubmitTurn {
        session_id: SessionId,
        intent: String,
    },
    FetchState {
        session_id: SessionId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineResponse {
    SessionStarted(Result<SessionStarted, ClientError>),
    TurnCompleted(Result<TurnOutcome, ClientError>),
    StateFetched(Result<SessionSnapshot, ClientError>),
}
