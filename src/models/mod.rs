// Type aliases used across models
pub type BrokerId = i32;
pub type TopicName = String;
pub type PartitionId = i32;

/// Version reported when the cluster version could not be determined
pub const UNKNOWN_KAFKA_VERSION: &str = "unknown";

/// Wire value standing in for an unavailable log dir size
pub const LOG_DIR_SIZE_UNAVAILABLE: i64 = -1;

// Module declarations
mod api_versions;
mod broker;
mod cluster;
mod log_dirs;
mod metadata;

// Re-exports
pub use api_versions::{ApiVersionRange, ApiVersionsResponse};
pub use broker::Broker;
pub use cluster::ClusterSnapshot;
pub use log_dirs::{BrokerLogDirs, LogDir, LogDirPartition, LogDirTopic, LogDirUsage};
pub use metadata::{ClusterMetadata, MetadataBroker};
