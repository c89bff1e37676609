use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use super::{Broker, BrokerId, ClusterMetadata, LogDirUsage};

/// Point-in-time view of a Kafka cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSnapshot {
    pub controller_id: BrokerId,
    /// Sorted ascending by broker id
    pub brokers: Vec<Broker>,
    pub kafka_version: String,
}

impl ClusterSnapshot {
    /// Merge metadata with log dir usage.
    ///
    /// Metadata is the authoritative broker set: usage entries for unknown
    /// brokers are dropped and brokers without usage get no size. Brokers are
    /// sorted by id; a duplicated id keeps its first entry.
    pub fn merge(metadata: ClusterMetadata, usage: &LogDirUsage, kafka_version: String) -> Self {
        let mut brokers: Vec<Broker> = metadata
            .brokers
            .into_iter()
            .map(|b| {
                let size = usage.get(b.node_id);
                Broker::from_metadata(b, size)
            })
            .collect();

        brokers.sort_by_key(|b| b.broker_id);
        brokers.dedup_by_key(|b| b.broker_id);

        Self {
            controller_id: metadata.controller_id,
            brokers,
            kafka_version,
        }
    }

    pub fn broker(&self, id: BrokerId) -> Option<&Broker> {
        self.brokers
            .binary_search_by_key(&id, |b| b.broker_id)
            .ok()
            .map(|idx| &self.brokers[idx])
    }

    /// The controller broker, if it is part of the broker list
    pub fn controller(&self) -> Option<&Broker> {
        self.broker(self.controller_id)
    }

    /// Broker ids grouped by rack; brokers without a rack are left out
    pub fn rack_mapping(&self) -> HashMap<String, Vec<BrokerId>> {
        let mut mapping: HashMap<String, Vec<BrokerId>> = HashMap::new();
        for broker in &self.brokers {
            if let Some(rack) = &broker.rack {
                mapping.entry(rack.clone()).or_default().push(broker.broker_id);
            }
        }
        mapping
    }

    /// Sum of all measured log dir sizes
    pub fn total_log_dir_size(&self) -> u64 {
        self.brokers.iter().filter_map(|b| b.log_dir_size).sum()
    }

    pub fn has_complete_storage_usage(&self) -> bool {
        self.brokers.iter().all(Broker::has_log_dir_size)
    }
}
