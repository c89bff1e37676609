use std::sync::Arc;
use std::time::Duration;

use kafka_cluster_info::models::{ApiVersionRange, ApiVersionsResponse, ClusterMetadata, MetadataBroker};
use kafka_cluster_info::sources::{StaticApiVersionsSource, StaticLogDirUsageSource, StaticMetadataSource};
use kafka_cluster_info::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("Kafka Cluster Info - Example Usage\n");

    let metadata = ClusterMetadata::new(
        1,
        vec![
            MetadataBroker::new(3, "kafka-3.internal").with_rack("eu-west-1c"),
            MetadataBroker::new(1, "kafka-1.internal").with_rack("eu-west-1a"),
            MetadataBroker::new(2, "kafka-2.internal").with_rack("eu-west-1b"),
        ],
    );

    // Broker 3 does not report its log dirs
    let usage: LogDirUsage = vec![(1, 53_687_091_200), (2, 48_318_382_080)]
        .into_iter()
        .collect();

    let versions = ApiVersionsResponse::new(vec![
        ApiVersionRange::new(3, 0, 12),
        ApiVersionRange::new(18, 0, 3),
    ]);
    let guess = |ranges: &[ApiVersionRange]| {
        if ranges.iter().any(|r| r.api_key == 18 && r.max_version >= 3) {
            "3.5.0".to_string()
        } else {
            "unknown".to_string()
        }
    };

    let builder = SnapshotBuilder::new(
        Arc::new(StaticMetadataSource::new(metadata).with_latency(Duration::from_millis(40))),
        Arc::new(StaticLogDirUsageSource::new(usage).with_latency(Duration::from_millis(120))),
        VersionProbe::new(Arc::new(StaticApiVersionsSource::new(versions)), Arc::new(guess)),
    )
    .with_config(SnapshotConfig::with_timeout(Duration::from_secs(2)))?;

    let snapshot = builder.build(&RequestContext::new()).await?;

    println!("=== Cluster Snapshot ===");
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    println!("\n=== Brokers by Rack ===");
    let mut racks: Vec<_> = snapshot.rack_mapping().into_iter().collect();
    racks.sort();
    for (rack, brokers) in racks {
        println!("  {}: {:?}", rack, brokers);
    }

    if !snapshot.has_complete_storage_usage() {
        println!("\nSome brokers did not report log dir usage");
    }

    Ok(())
}
