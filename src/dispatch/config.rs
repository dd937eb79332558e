//! Dispatch configuration

use std::time::Duration;

/// Dispatch engine configuration options
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Maximum concurrent delivery attempts (0 = unlimited)
    ///
    /// A registry can hold thousands of subscriptions; the bound keeps a
    /// broadcast from opening that many relay connections at once.
    pub max_concurrent: usize,

    /// Per-attempt timeout
    ///
    /// An attempt still pending after this long is abandoned and reported
    /// as a transient failure, so one unresponsive relay endpoint cannot
    /// stall the whole broadcast.
    pub attempt_timeout: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 16,
            attempt_timeout: Duration::from_secs(10),
        }
    }
}

impl DispatchConfig {
    /// Set maximum concurrent delivery attempts
    pub fn max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = max;
        self
    }

    /// Set the per-attempt timeout
    pub fn attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DispatchConfig::default();

        assert_eq!(config.max_concurrent, 16);
        assert_eq!(config.attempt_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_chaining() {
        let config = DispatchConfig::default()
            .max_concurrent(4)
            .attempt_timeout(Duration::from_secs(2));

        assert_eq!(config.max_concurrent, 4);
        assert_eq!(config.attempt_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_builder_unlimited_concurrency() {
        let config = DispatchConfig::default().max_concurrent(0);

        assert_eq!(config.max_concurrent, 0);
    }
}
