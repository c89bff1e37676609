//! Data sources queried while building a snapshot.
//!
//! Each trait wraps one network call against the cluster. Implementations
//! receive the request scope so they can hand its deadline to their client,
//! but the builder enforces the scope on its own as well.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error_code::KafkaErrorCode;
use crate::models::{ApiVersionRange, ApiVersionsResponse, ClusterMetadata, LogDirUsage};

mod fixed;

pub use fixed::{StaticApiVersionsSource, StaticLogDirUsageSource, StaticMetadataSource};

/// Errors from a single source call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Kafka(KafkaErrorCode),

    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("request cancelled")]
    Cancelled,
}

impl SourceError {
    pub fn transport(message: impl Into<String>) -> Self {
        SourceError::Transport(message.into())
    }

    /// `Ok(())` for error code 0, otherwise the translated protocol error
    pub fn check_code(code: i16) -> Result<(), SourceError> {
        match KafkaErrorCode::from_code(code) {
            Some(err) => Err(SourceError::Kafka(err)),
            None => Ok(()),
        }
    }
}

/// Fetches controller identity and the broker list
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// `topics` of `None` requests metadata for all topics
    async fn get_metadata(
        &self,
        ctx: &RequestContext,
        topics: Option<&[String]>,
    ) -> Result<ClusterMetadata, SourceError>;
}

/// Fetches total log dir size per broker.
///
/// Brokers that could not be described are simply missing from the result.
#[async_trait]
pub trait LogDirUsageSource: Send + Sync {
    async fn get_log_dir_usage(&self, ctx: &RequestContext) -> Result<LogDirUsage, SourceError>;
}

/// Queries the API version ranges supported by the cluster
#[async_trait]
pub trait ApiVersionsSource: Send + Sync {
    async fn get_api_versions(&self, ctx: &RequestContext) -> Result<ApiVersionsResponse, SourceError>;
}

/// Guesses a release version from advertised API ranges.
///
/// Returns `"unknown"` when no release matches.
pub trait VersionGuesser: Send + Sync {
    fn guess(&self, ranges: &[ApiVersionRange]) -> String;
}

impl<F> VersionGuesser for F
where
    F: Fn(&[ApiVersionRange]) -> String + Send + Sync,
{
    fn guess(&self, ranges: &[ApiVersionRange]) -> String {
        self(ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_code() {
        assert!(SourceError::check_code(0).is_ok());

        let err = SourceError::check_code(41).unwrap_err();
        assert!(matches!(err, SourceError::Kafka(code) if code.code() == 41));
    }

    #[test]
    fn test_closure_guesser() {
        let guesser = |ranges: &[ApiVersionRange]| format!("{} keys", ranges.len());
        assert_eq!(guesser.guess(&[ApiVersionRange::new(0, 0, 9)]), "1 keys");
    }
}
