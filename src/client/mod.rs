// src/client/mod.rs
mod connection;

pub use connection::connect;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by a [`StatusClient`] round trip.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Other(String),
}

/// The three server operations a status check needs.
///
/// The handle is expected to be connected already. `quit` ends the
/// connection; callers must reconnect before issuing further commands.
#[async_trait]
pub trait StatusClient: Send {
    /// Liveness probe. A healthy server replies `PONG`.
    async fn ping(&mut self) -> Result<String, ClientError>;

    /// Raw text of one `INFO` section, e.g. `"memory"`.
    async fn info(&mut self, section: &str) -> Result<String, ClientError>;

    async fn quit(&mut self) -> Result<(), ClientError>;
}
