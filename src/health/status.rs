// src/health/status.rs
use thiserror::Error;

/// Why a server was judged unhealthy. `Display` renders the message
/// reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnhealthyReason {
    #[error("{name} Redis instance is not responsive.")]
    NotResponsive { name: String },

    #[error("{name} Redis instance is using abnormally high memory.")]
    HighMemory { name: String },
}

/// Outcome of a single status check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Healthy,
    Unhealthy(UnhealthyReason),
}

impl Status {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Status::Healthy)
    }

    /// `None` when healthy, otherwise the human-readable failure message.
    pub fn reason(&self) -> Option<String> {
        match self {
            Status::Healthy => None,
            Status::Unhealthy(reason) => Some(reason.to_string()),
        }
    }
}

impl From<UnhealthyReason> for Status {
    fn from(reason: UnhealthyReason) -> Self {
        Status::Unhealthy(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_server() {
        let down = UnhealthyReason::NotResponsive { name: "Cache".into() };
        let full = UnhealthyReason::HighMemory { name: "Cache".into() };

        assert_eq!(down.to_string(), "Cache Redis instance is not responsive.");
        assert_eq!(
            full.to_string(),
            "Cache Redis instance is using abnormally high memory."
        );
    }

    #[test]
    fn healthy_has_no_reason() {
        assert!(Status::Healthy.is_healthy());
        assert_eq!(Status::Healthy.reason(), None);

        let status = Status::from(UnhealthyReason::NotResponsive { name: "Jobs".into() });
        assert!(!status.is_healthy());
        assert_eq!(
            status.reason().as_deref(),
            Some("Jobs Redis instance is not responsive.")
        );
    }
}
