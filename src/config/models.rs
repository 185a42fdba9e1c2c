// src/config/models.rs
use crate::client::StatusClient;
use crate::health::{StatusChecker, StatusCheckerConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;

const SUPPORTED_SCHEMES: &[&str] = &["redis", "redis+unix", "unix"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),

    #[error("connect_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    pub url: Url,
    #[serde(default)]
    pub memory_threshold: Option<u64>,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_connect_timeout() -> u64 {
    5
}

impl Config {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if !SUPPORTED_SCHEMES.contains(&self.url.scheme()) {
            return Err(ConfigError::UnsupportedScheme(self.url.scheme().to_string()));
        }
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Bind this configuration to a connected client.
    pub fn checker<C: StatusClient>(&self, client: C) -> StatusChecker<C> {
        StatusChecker::new(StatusCheckerConfig {
            client,
            name: self.name.clone(),
            memory_threshold: self.memory_threshold,
        })
    }
}
