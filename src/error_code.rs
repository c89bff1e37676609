use std::fmt;

/// A non-zero Kafka protocol error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KafkaErrorCode(i16);

// (code, name, description, retriable)
const KNOWN_CODES: &[(i16, &str, &str, bool)] = &[
    (-1, "UNKNOWN_SERVER_ERROR", "The server experienced an unexpected error when processing the request.", false),
    (1, "OFFSET_OUT_OF_RANGE", "The requested offset is not within the range of offsets maintained by the server.", false),
    (2, "CORRUPT_MESSAGE", "This message has failed its CRC checksum, exceeds the valid size, has a null key for a compacted topic, or is otherwise corrupt.", true),
    (3, "UNKNOWN_TOPIC_OR_PARTITION", "This server does not host this topic-partition.", true),
    (5, "LEADER_NOT_AVAILABLE", "There is no leader for this topic-partition as we are in the middle of a leadership election.", true),
    (6, "NOT_LEADER_OR_FOLLOWER", "For requests intended only for the leader, this error indicates that the broker is not the current leader.", true),
    (7, "REQUEST_TIMED_OUT", "The request timed out.", true),
    (8, "BROKER_NOT_AVAILABLE", "The broker is not available.", false),
    (15, "COORDINATOR_NOT_AVAILABLE", "The coordinator is not available.", true),
    (29, "TOPIC_AUTHORIZATION_FAILED", "Topic authorization failed.", false),
    (31, "CLUSTER_AUTHORIZATION_FAILED", "Cluster authorization failed.", false),
    (35, "UNSUPPORTED_VERSION", "The version of API is not supported.", false),
    (41, "NOT_CONTROLLER", "This is not the correct controller for this cluster.", true),
    (56, "KAFKA_STORAGE_ERROR", "Disk error when trying to access log file on the disk.", true),
    (57, "LOG_DIR_NOT_FOUND", "The user-specified log directory is not found in the broker config.", false),
];

impl KafkaErrorCode {
    /// Translate a response error code; `None` for 0 (no error)
    pub fn from_code(code: i16) -> Option<Self> {
        (code != 0).then_some(Self(code))
    }

    pub fn code(&self) -> i16 {
        self.0
    }

    pub fn name(&self) -> Option<&'static str> {
        self.lookup().map(|(_, name, _, _)| *name)
    }

    pub fn description(&self) -> Option<&'static str> {
        self.lookup().map(|(_, _, description, _)| *description)
    }

    pub fn is_retriable(&self) -> bool {
        self.lookup().map(|(_, _, _, retriable)| *retriable).unwrap_or(false)
    }

    fn lookup(&self) -> Option<&'static (i16, &'static str, &'static str, bool)> {
        KNOWN_CODES.iter().find(|(code, ..)| *code == self.0)
    }
}

impl fmt::Display for KafkaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lookup() {
            Some((_, name, description, _)) => write!(f, "{}: {}", name, description),
            None => write!(f, "UNKNOWN_ERROR_CODE({})", self.0),
        }
    }
}

impl std::error::Error for KafkaErrorCode {}
