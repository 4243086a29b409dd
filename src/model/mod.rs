pub mod message;
pub mod session;
pub mod transcript;
pub mod transcript_save;
pub mod wire;
