use serde::{Deserialize, Serialize};
use super::BrokerId;

/// Cluster metadata as returned by the metadata RPC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterMetadata {
    /// The ID of the controller broker
    pub controller_id: BrokerId,
    /// Brokers in whatever order the cluster returned them
    pub brokers: Vec<MetadataBroker>,
}

/// Metadata for a single broker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataBroker {
    pub node_id: BrokerId,
    pub host: String,
    pub rack: Option<String>,
}

impl ClusterMetadata {
    pub fn new(controller_id: BrokerId, brokers: Vec<MetadataBroker>) -> Self {
        Self {
            controller_id,
            brokers,
        }
    }
}

impl MetadataBroker {
    pub fn new(node_id: BrokerId, host: impl Into<String>) -> Self {
        Self {
            node_id,
            host: host.into(),
            rack: None,
        }
    }

    pub fn with_rack(mut self, rack: impl Into<String>) -> Self {
        self.rack = Some(rack.into());
        self
    }
}
