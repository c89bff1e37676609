use serde::{Deserialize, Serialize};

/// Version range a broker supports for one API key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiVersionRange {
    pub api_key: i16,
    pub min_version: i16,
    pub max_version: i16,
}

/// Response of an ApiVersions request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiVersionsResponse {
    /// Protocol level error code, 0 on success
    pub error_code: i16,
    pub api_keys: Vec<ApiVersionRange>,
}

impl ApiVersionRange {
    pub fn new(api_key: i16, min_version: i16, max_version: i16) -> Self {
        Self {
            api_key,
            min_version,
            max_version,
        }
    }

    pub fn supports(&self, version: i16) -> bool {
        version >= self.min_version && version <= self.max_version
    }
}

impl ApiVersionsResponse {
    pub fn new(api_keys: Vec<ApiVersionRange>) -> Self {
        Self {
            error_code: 0,
            api_keys,
        }
    }

    pub fn with_error_code(error_code: i16) -> Self {
        Self {
            error_code,
            api_keys: Vec::new(),
        }
    }

    /// Range advertised for a given API key, if any
    pub fn range(&self, api_key: i16) -> Option<&ApiVersionRange> {
        self.api_keys.iter().find(|r| r.api_key == api_key)
    }
}
