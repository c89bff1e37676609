// Kafka Cluster Info Library
// Point-in-time snapshots of a Kafka cluster's brokers, storage usage and version

pub mod builder;
pub mod config;
pub mod context;
pub mod error_code;
pub mod models;
pub mod sources;
pub mod version;

pub use builder::SnapshotBuilder;
pub use config::{ConfigError, SnapshotConfig};
pub use context::RequestContext;
pub use error_code::KafkaErrorCode;
pub use models::{Broker, BrokerId, ClusterSnapshot, LogDirUsage};
pub use sources::{ApiVersionsSource, LogDirUsageSource, MetadataSource, SourceError, VersionGuesser};
pub use version::{ProbeError, VersionProbe};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to fetch cluster metadata: {0}")]
    Metadata(#[source] SourceError),

    #[error("failed to fetch cluster metadata: response contained no brokers")]
    EmptyCluster,

    #[error("invalid snapshot config: {0}")]
    Config(#[from] ConfigError),
}
