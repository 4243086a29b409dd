use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::session_client::{HttpSessionService, SessionService};
use crate::error::ClientError;

/// Background worker that performs the blocking calls to the session service.
///
/// Commands are handled strictly one after another; the worker exits when
/// either channel end is dropped.
pub struct Engine<S: SessionService> {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    service: S,
}

impl<S: SessionService> Engine<S> {
    pub fn new(rx: Receiver<EngineCommand>, tx: Sender<EngineResponse>, service: S) -> Self {
        Self { rx, tx, service }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            let response = self.handle(cmd);
            if self.tx.send(response).is_err() {
                debug!("response channel closed, stopping engine");
                break;
            }
        }
        debug!("engine stopped");
    }

    fn handle(&self, cmd: EngineCommand) -> EngineResponse {
        match cmd {
            EngineCommand::StartSession { participants } => {
                EngineResponse::SessionStarted(self.service.start_session(&participants))
            }
            EngineCommand::SubmitTurn { session_id, intent } => {
                EngineResponse::TurnCompleted(self.service.submit_turn(&session_id, &intent))
            }
            EngineCommand::FetchState { session_id } => {
                EngineResponse::StateFetched(self.service.fetch_state(&session_id))
            }
        }
    }
}

/// Channel ends held by the UI.
pub struct EngineHandle {
    pub cmd_tx: Sender<EngineCommand>,
    pub resp_rx: Receiver<EngineResponse>,
    /// Set when the HTTP client could not be built; no worker is running.
    pub startup_error: Option<ClientError>,
    _worker: Option<JoinHandle<()>>,
}

impl EngineHandle {
    pub fn spawn<S: SessionService + 'static>(service: S) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let worker = std::thread::Builder::new()
            .name("session-engine".into())
            .spawn(move || {
                let mut engine = Engine::new(cmd_rx, resp_tx, service);
                engine.run();
            });

        match worker {
            Ok(handle) => Self {
                cmd_tx,
                resp_rx,
                startup_error: None,
                _worker: Some(handle),
            },
            Err(e) => {
                error!(error = %e, "could not spawn engine thread");
                Self::detached(ClientError::Transport(e.to_string()))
            }
        }
    }

    pub fn spawn_http(config: &ClientConfig) -> Self {
        match HttpSessionService::new(config) {
            Ok(service) => {
                info!(base_url = service.base_url(), "session service client ready");
                Self::spawn(service)
            }
            Err(e) => {
                error!(error = %e, "could not build session service client");
                Self::detached(e)
            }
        }
    }

    /// Handle whose worker never started: every send fails.
    fn detached(err: ClientError) -> Self {
        let (cmd_tx, _) = mpsc::channel();
        let (_, resp_rx) = mpsc::channel();
        Self {
            cmd_tx,
            resp_rx,
            startup_error: Some(err),
            _worker: None,
        }
    }
}
