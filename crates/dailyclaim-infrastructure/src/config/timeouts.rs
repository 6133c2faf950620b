use std::time::Duration;

/// Timeouts for outbound requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Per check-in request timeout
    pub http_request: Duration,

    /// Discord webhook request timeout
    pub webhook: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(30),
            webhook: Duration::from_secs(15),
        }
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_http_request(mut self, timeout: Duration) -> Self {
        self.http_request = timeout;
        self
    }

    pub fn with_webhook(mut self, timeout: Duration) -> Self {
        self.webhook = timeout;
        self
    }
}
