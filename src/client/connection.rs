// src/client/connection.rs
use super::{ClientError, StatusClient};
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Open a multiplexed connection to `url`, giving up after `limit`.
pub async fn connect(url: &str, limit: Duration) -> Result<MultiplexedConnection, ClientError> {
    let client = redis::Client::open(url)?;

    debug!("Connecting to {}", url);
    match timeout(limit, client.get_multiplexed_async_connection()).await {
        Ok(conn) => Ok(conn?),
        Err(_) => Err(ClientError::Timeout(limit)),
    }
}

#[async_trait]
impl StatusClient for MultiplexedConnection {
    async fn ping(&mut self) -> Result<String, ClientError> {
        let reply = redis::cmd("PING").query_async::<String>(self).await?;
        Ok(reply)
    }

    async fn info(&mut self, section: &str) -> Result<String, ClientError> {
        let text = redis::cmd("INFO")
            .arg(section)
            .query_async::<String>(self)
            .await?;
        Ok(text)
    }

    async fn quit(&mut self) -> Result<(), ClientError> {
        redis::cmd("QUIT").query_async::<()>(self).await?;
        Ok(())
    }
}
