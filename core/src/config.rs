use std::time::Duration;

/// Whole-request timeout used unless a caller overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Settings for a `RestClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub(crate) timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> Self {
        Self::default()
    }

    /// Sets the timeout covering connect, headers, and body (default is 15s)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }
}
