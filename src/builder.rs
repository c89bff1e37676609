use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::SnapshotConfig;
use crate::context::RequestContext;
use crate::models::{ClusterSnapshot, LogDirUsage};
use crate::sources::{LogDirUsageSource, MetadataSource};
use crate::version::VersionProbe;
use crate::SnapshotError;

/// Collects a [`ClusterSnapshot`] from its three sources.
///
/// Metadata is mandatory: if it cannot be fetched no snapshot is produced.
/// Log dir usage and the version probe are best effort; their failures are
/// logged and replaced by "unavailable" values.
pub struct SnapshotBuilder {
    metadata: Arc<dyn MetadataSource>,
    log_dirs: Arc<dyn LogDirUsageSource>,
    version: VersionProbe,
    config: SnapshotConfig,
}

impl SnapshotBuilder {
    pub fn new(
        metadata: Arc<dyn MetadataSource>,
        log_dirs: Arc<dyn LogDirUsageSource>,
        version: VersionProbe,
    ) -> Self {
        Self {
            metadata,
            log_dirs,
            version,
            config: SnapshotConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SnapshotConfig) -> Result<Self, SnapshotError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Build a snapshot of the cluster.
    ///
    /// All sources are queried concurrently within a scope that ends at the
    /// configured timeout or at the caller's deadline, whichever comes first.
    /// Returns as soon as the metadata request fails.
    ///
    /// A metadata response listing no brokers is also fatal
    /// ([`SnapshotError::EmptyCluster`]) instead of producing an empty
    /// snapshot, since a live cluster always has at least one broker.
    pub async fn build(&self, ctx: &RequestContext) -> Result<ClusterSnapshot, SnapshotError> {
        let scope = ctx.child_with_timeout(self.config.request_timeout());
        // Requests still in flight when we return observe cancellation
        let _guard = scope.cancel_on_drop();

        let topics = self.config.metadata_topics.as_deref();

        let metadata_task = async {
            scope
                .run(self.metadata.get_metadata(&scope, topics))
                .await
                .map_err(SnapshotError::Metadata)
        };

        let log_dirs_task = async {
            let usage = match scope.run(self.log_dirs.get_log_dir_usage(&scope)).await {
                Ok(usage) => usage,
                Err(err) => {
                    warn!(error = %err, "failed to request brokers log dirs");
                    LogDirUsage::new()
                }
            };
            Ok::<_, SnapshotError>(usage)
        };

        let version_task = async {
            let version = match self.version.probe(&scope).await {
                Ok(version) => version,
                Err(err) => {
                    warn!(error = %err, "failed to request kafka version");
                    self.config.unknown_version.clone()
                }
            };
            Ok::<_, SnapshotError>(version)
        };

        let (metadata, usage, kafka_version) =
            tokio::try_join!(metadata_task, log_dirs_task, version_task)?;

        if metadata.brokers.is_empty() {
            return Err(SnapshotError::EmptyCluster);
        }

        let snapshot = ClusterSnapshot::merge(metadata, &usage, kafka_version);
        debug!(
            controller_id = snapshot.controller_id,
            brokers = snapshot.brokers.len(),
            kafka_version = %snapshot.kafka_version,
            "collected cluster snapshot"
        );

        Ok(snapshot)
    }
}

impl std::fmt::Debug for SnapshotBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
