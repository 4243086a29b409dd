pub mod dialogue;
pub mod engine;
pub mod protocol;
pub mod session_client;
