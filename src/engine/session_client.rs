use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::session::{
    Participants, SessionId, SessionSnapshot, SessionStarted, TurnOutcome,
};
use crate::model::wire::{StartSessionRequest, StartSessionResponse, TurnRequest, TurnResponse};

/// The three calls the session service offers. Each call blocks until the
/// service answers or the request fails.
pub trait SessionService: Send {
    fn start_session(&self, participants: &Participants) -> Result<SessionStarted, ClientError>;

    fn submit_turn(&self, session_id: &SessionId, intent: &str) -> Result<TurnOutcome, ClientError>;

    fn fetch_state(&self, session_id: &SessionId) -> Result<SessionSnapshot, ClientError>;
}

pub struct HttpSessionService {
    client: Client,
    base_url: Url,
}

impl HttpSessionService {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        let base_url = Url::parse(config.base_url()).map_err(|e| {
            ClientError::Config(format!("invalid service address {}: {e}", config.base_url()))
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends path segments to the base address, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::Config(format!("{} cannot be a base address", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // Body errors go through the same classification as send errors, so a
    // timeout while reading the body is still a timeout.
    fn decode<T: DeserializeOwned>(resp: reqwest::blocking::Response) -> Result<T, ClientError> {
        let resp = resp.error_for_status()?;
        Ok(resp.json::<T>()?)
    }
}

impl SessionService for HttpSessionService {
    fn start_session(&self, participants: &Participants) -> Result<SessionStarted, ClientError> {
        let resp = self
            .client
            .post(self.url(&["start_session"])?)
            .json(&StartSessionRequest::from(participants))
            .send()?;

        let body: StartSessionResponse = Self::decode(resp)?;
        Ok(body.into_started(participants))
    }

    fn submit_turn(&self, session_id: &SessionId, intent: &str) -> Result<TurnOutcome, ClientError> {
        let req = TurnRequest {
            thread_id: session_id.as_str().to_string(),
            human_intent: intent.to_string(),
        };

        let resp = self.client.post(self.url(&["turn"])?).json(&req).send()?;

        let body: TurnResponse = Self::decode(resp)?;
        Ok(body.into())
    }

    fn fetch_state(&self, session_id: &SessionId) -> Result<SessionSnapshot, ClientError> {
        let resp = self
            .client
            .get(self.url(&["state", session_id.as_str()])?)
            .send()?;

        Self::decode(resp)
    }
}
