use serde::{Deserialize, Serialize};
use super::{BrokerId, MetadataBroker};

/// A broker as it appears in a cluster snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broker {
    pub broker_id: BrokerId,
    /// Total bytes of log data on the broker, `None` when it could not be measured
    #[serde(rename = "logDirSize", with = "log_dir_size")]
    pub log_dir_size: Option<u64>,
    pub address: String,
    pub rack: Option<String>,
}

impl Broker {
    pub fn new(broker_id: BrokerId, address: impl Into<String>, rack: Option<String>) -> Self {
        Self {
            broker_id,
            log_dir_size: None,
            address: address.into(),
            rack,
        }
    }

    /// Build a snapshot broker from its metadata entry and an optional measured size
    pub fn from_metadata(broker: MetadataBroker, log_dir_size: Option<u64>) -> Self {
        Self {
            broker_id: broker.node_id,
            log_dir_size,
            address: broker.host,
            rack: broker.rack,
        }
    }

    pub fn with_log_dir_size(mut self, size_bytes: u64) -> Self {
        self.log_dir_size = Some(size_bytes);
        self
    }

    /// Log dir size as exposed to consumers: the measured total or `-1`
    pub fn log_dir_size_bytes(&self) -> i64 {
        match self.log_dir_size {
            Some(size) => i64::try_from(size).unwrap_or(i64::MAX),
            None => super::LOG_DIR_SIZE_UNAVAILABLE,
        }
    }

    pub fn has_log_dir_size(&self) -> bool {
        self.log_dir_size.is_some()
    }
}

/// Keeps the `-1` sentinel on the wire while the model uses `Option<u64>`
mod log_dir_size {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::models::LOG_DIR_SIZE_UNAVAILABLE;

    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(size) => serializer.serialize_i64(i64::try_from(*size).unwrap_or(i64::MAX)),
            None => serializer.serialize_i64(LOG_DIR_SIZE_UNAVAILABLE),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        // Any negative value is treated as unavailable
        Ok(u64::try_from(raw).ok())
    }
}
