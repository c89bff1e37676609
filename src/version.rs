use std::sync::Arc;

use crate::context::RequestContext;
use crate::error_code::KafkaErrorCode;
use crate::sources::{ApiVersionsSource, SourceError, VersionGuesser};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to request api versions: {0}")]
    Request(#[source] SourceError),

    #[error("failed to request api versions. Inner Kafka error: {0}")]
    Kafka(#[source] KafkaErrorCode),
}

/// Determines the Kafka version of a cluster from its ApiVersions response
pub struct VersionProbe {
    source: Arc<dyn ApiVersionsSource>,
    guesser: Arc<dyn VersionGuesser>,
}

impl VersionProbe {
    pub fn new(source: Arc<dyn ApiVersionsSource>, guesser: Arc<dyn VersionGuesser>) -> Self {
        Self { source, guesser }
    }

    /// Query the supported API ranges and guess the version from them.
    ///
    /// A response carrying a non-zero error code is a failure even though
    /// the round trip succeeded. A guess of `"unknown"` is returned as is.
    pub async fn probe(&self, ctx: &RequestContext) -> Result<String, ProbeError> {
        let response = ctx
            .run(self.source.get_api_versions(ctx))
            .await
            .map_err(ProbeError::Request)?;

        if let Some(code) = KafkaErrorCode::from_code(response.error_code) {
            return Err(ProbeError::Kafka(code));
        }

        Ok(self.guesser.guess(&response.api_keys))
    }
}

impl std::fmt::Debug for VersionProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionProbe").finish_non_exhaustive()
    }
}
