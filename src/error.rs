use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a remote call to the session service.
///
/// Cloneable and `Send` so it can travel back over the engine channel.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientError {
    #[error("request timed out")]
    Timeout,

    #[error("could not reach the session service: {0}")]
    Connect(String),

    #[error("session service answered with HTTP {status}")]
    Status { status: u16 },

    #[error("unreadable response from session service: {0}")]
    Decode(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request worker is no longer running")]
    WorkerGone,

    #[error("client configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::Config(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Why a submission was refused before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    EmptyIntent,
    NoSession,
    Busy,
    Unavailable,
}

impl std::fmt::Display for SubmitRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            SubmitRejection::EmptyIntent => "intent is empty",
            SubmitRejection::NoSession => "no session is held",
            SubmitRejection::Busy => "a request is already outstanding",
            SubmitRejection::Unavailable => "session service is unavailable",
        };
        f.write_str(reason)
    }
}
