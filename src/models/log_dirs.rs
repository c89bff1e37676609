use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use super::{BrokerId, PartitionId, TopicName};

/// Total log dir size per broker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDirUsage {
    sizes: HashMap<BrokerId, u64>,
}

impl LogDirUsage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce described log dirs into per-broker totals.
    ///
    /// Brokers without a single readable log dir are left out, so they read
    /// as unavailable rather than as holding zero bytes.
    pub fn from_brokers<I>(brokers: I) -> Self
    where
        I: IntoIterator<Item = BrokerLogDirs>,
    {
        brokers
            .into_iter()
            .filter_map(|b| b.total_size_bytes().map(|size| (b.broker_id, size)))
            .collect()
    }

    pub fn get(&self, broker_id: BrokerId) -> Option<u64> {
        self.sizes.get(&broker_id).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl FromIterator<(BrokerId, u64)> for LogDirUsage {
    fn from_iter<I: IntoIterator<Item = (BrokerId, u64)>>(iter: I) -> Self {
        Self {
            sizes: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<BrokerId, u64>> for LogDirUsage {
    fn from(sizes: HashMap<BrokerId, u64>) -> Self {
        Self { sizes }
    }
}

/// Log directories described by a single broker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerLogDirs {
    pub broker_id: BrokerId,
    pub log_dirs: Vec<LogDir>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDir {
    pub path: String,
    /// Non-zero when the broker could not read this directory
    pub error_code: i16,
    pub topics: Vec<LogDirTopic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDirTopic {
    pub name: TopicName,
    pub partitions: Vec<LogDirPartition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDirPartition {
    pub partition: PartitionId,
    pub size_bytes: u64,
}

impl BrokerLogDirs {
    /// Sum of partition sizes across all readable directories, `None` when
    /// no directory could be read
    pub fn total_size_bytes(&self) -> Option<u64> {
        let mut readable = self.log_dirs.iter().filter(|dir| dir.error_code == 0).peekable();
        readable.peek()?;
        Some(readable.map(LogDir::size_bytes).sum())
    }
}

impl LogDir {
    pub fn size_bytes(&self) -> u64 {
        self.topics
            .iter()
            .flat_map(|t| &t.partitions)
            .map(|p| p.size_bytes)
            .sum()
    }
}
