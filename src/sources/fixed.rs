//! In-memory sources returning a fixed response.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{ApiVersionsSource, LogDirUsageSource, MetadataSource, SourceError};
use crate::context::RequestContext;
use crate::models::{ApiVersionsResponse, ClusterMetadata, LogDirUsage};

#[derive(Debug, Clone, Copy)]
enum Delay {
    None,
    For(Duration),
    Forever,
}

impl Delay {
    async fn wait(self) {
        match self {
            Delay::None => {}
            Delay::For(duration) => tokio::time::sleep(duration).await,
            Delay::Forever => std::future::pending::<()>().await,
        }
    }
}

/// Replays one canned result, optionally after a simulated network delay
#[derive(Debug)]
struct Fixed<T> {
    response: Result<T, SourceError>,
    delay: Delay,
    calls: AtomicUsize,
}

impl<T: Clone> Fixed<T> {
    fn new(response: Result<T, SourceError>) -> Self {
        Self {
            response,
            delay: Delay::None,
            calls: AtomicUsize::new(0),
        }
    }

    async fn respond(&self) -> Result<T, SourceError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.delay.wait().await;
        self.response.clone()
    }
}

macro_rules! static_source {
    ($name:ident, $payload:ty) => {
        #[derive(Debug)]
        pub struct $name {
            inner: Fixed<$payload>,
        }

        impl $name {
            pub fn new(response: $payload) -> Self {
                Self {
                    inner: Fixed::new(Ok(response)),
                }
            }

            pub fn failing(error: SourceError) -> Self {
                Self {
                    inner: Fixed::new(Err(error)),
                }
            }

            /// Respond only after `latency` has elapsed
            pub fn with_latency(mut self, latency: Duration) -> Self {
                self.inner.delay = Delay::For(latency);
                self
            }

            /// Never respond; the call only ends through the request scope
            pub fn unresponsive(mut self) -> Self {
                self.inner.delay = Delay::Forever;
                self
            }

            /// Number of times the source has been queried
            pub fn calls(&self) -> usize {
                self.inner.calls.load(Ordering::Relaxed)
            }
        }
    };
}

static_source!(StaticMetadataSource, ClusterMetadata);
static_source!(StaticLogDirUsageSource, LogDirUsage);
static_source!(StaticApiVersionsSource, ApiVersionsResponse);

#[async_trait]
impl MetadataSource for StaticMetadataSource {
    async fn get_metadata(
        &self,
        _ctx: &RequestContext,
        _topics: Option<&[String]>,
    ) -> Result<ClusterMetadata, SourceError> {
        self.inner.respond().await
    }
}

#[async_trait]
impl LogDirUsageSource for StaticLogDirUsageSource {
    async fn get_log_dir_usage(&self, _ctx: &RequestContext) -> Result<LogDirUsage, SourceError> {
        self.inner.respond().await
    }
}

#[async_trait]
impl ApiVersionsSource for StaticApiVersionsSource {
    async fn get_api_versions(&self, _ctx: &RequestContext) -> Result<ApiVersionsResponse, SourceError> {
        self.inner.respond().await
    }
}
