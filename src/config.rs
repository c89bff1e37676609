use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::UNKNOWN_KAFKA_VERSION;

/// Settings that control how a snapshot is collected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Upper bound for the whole snapshot (ms). A single unreachable broker
    /// must not stall the request beyond this.
    pub request_timeout_ms: u64,

    /// Topics to request metadata for, `None` for all topics
    pub metadata_topics: Option<Vec<String>>,

    /// Version reported when the cluster version cannot be determined
    pub unknown_version: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 6_000,
            metadata_topics: None,
            unknown_version: UNKNOWN_KAFKA_VERSION.to_string(),
        }
    }
}

impl SnapshotConfig {
    /// Default settings with a different timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            request_timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ..Default::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}
