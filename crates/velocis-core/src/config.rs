//! Contact endpoint configuration.

use std::time::Duration;

/// Endpoint the contact form posts to unless overridden.
pub const DEFAULT_ENDPOINT: &str = "https://velocis-api.onrender.com/submit";

/// Value of the response `status` field that marks a successful submission.
pub const DEFAULT_SUCCESS_STATUS: &str = "success";

/// Request timeout unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How to reach the remote submission endpoint and how to read its answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    /// Full URL of the submission endpoint
    pub endpoint: String,
    /// Response `status` value treated as an acknowledgement
    pub success_status: String,
    /// Upper bound on a single request, after which it counts as a transport failure
    pub timeout: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            success_status: DEFAULT_SUCCESS_STATUS.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ContactConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_success_status(mut self, status: impl Into<String>) -> Self {
        self.success_status = status.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
