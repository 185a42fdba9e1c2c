// src/health/checker.rs
use super::memory::parse_used_memory;
use super::status::{Status, UnhealthyReason};
use crate::client::StatusClient;
use tracing::{debug, warn};

const PONG: &str = "PONG";
const MEMORY_SECTION: &str = "memory";

/// Construction input for [`StatusChecker`].
#[derive(Debug)]
pub struct StatusCheckerConfig<C> {
    /// Connected handle. Every check ends by quitting it.
    pub client: C,
    /// Arbitrary label, included in failure messages.
    pub name: String,
    /// Most memory, in bytes, the server is expected to use when healthy.
    ///
    /// - Redis as an LRU cache: the server's `maxmemory` setting.
    /// - Redis for pub/sub: the observed runtime usage (often around 10MB).
    /// - Autoscaled deployments: leave unset.
    ///
    /// `None` or `Some(0)` skips the memory check.
    pub memory_threshold: Option<u64>,
}

/// Checks whether one Redis server is reachable and, optionally, within its
/// memory budget.
///
/// Each call to [`check_status`](Self::check_status) quits the client. To
/// check again, reconnect through [`client_mut`](Self::client_mut) or build
/// a new checker around a fresh connection.
#[derive(Debug)]
pub struct StatusChecker<C> {
    client: C,
    name: String,
    memory_threshold: Option<u64>,
}

impl<C: StatusClient> StatusChecker<C> {
    pub fn new(config: StatusCheckerConfig<C>) -> Self {
        Self {
            client: config.client,
            name: config.name,
            memory_threshold: config.memory_threshold,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn memory_threshold(&self) -> Option<u64> {
        self.memory_threshold.filter(|&threshold| threshold > 0)
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }

    /// Probe the server, then quit the connection.
    ///
    /// Never fails: transport errors are reported through the returned
    /// [`Status`]. The client is quit exactly once, whatever the outcome.
    pub async fn check_status(&mut self) -> Status {
        let status = self.probe().await;

        if let Err(e) = self.client.quit().await {
            warn!("{} quit failed: {}", self.name, e);
        }

        match &status {
            Status::Healthy => debug!("{} Redis instance is healthy", self.name),
            Status::Unhealthy(reason) => warn!("{}", reason),
        }
        status
    }

    async fn probe(&mut self) -> Status {
        match self.client.ping().await {
            Ok(reply) if reply == PONG => {}
            Ok(reply) => {
                debug!("{} answered ping with {:?}", self.name, reply);
                return self.not_responsive();
            }
            Err(e) => {
                debug!("{} ping failed: {}", self.name, e);
                return self.not_responsive();
            }
        }

        let Some(threshold) = self.memory_threshold() else {
            return Status::Healthy;
        };

        let info = match self.client.info(MEMORY_SECTION).await {
            Ok(info) => info,
            Err(e) => {
                debug!("{} memory info failed: {}", self.name, e);
                return self.not_responsive();
            }
        };

        let Some(used) = parse_used_memory(&info) else {
            debug!("{} returned memory info without used_memory", self.name);
            return self.not_responsive();
        };

        debug!(
            "{} uses {} bytes (threshold {})",
            self.name, used, threshold
        );
        if used > threshold {
            UnhealthyReason::HighMemory {
                name: self.name.clone(),
            }
            .into()
        } else {
            Status::Healthy
        }
    }

    fn not_responsive(&self) -> Status {
        UnhealthyReason::NotResponsive {
            name: self.name.clone(),
        }
        .into()
    }
}
