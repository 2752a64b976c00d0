//! Worker configuration

use std::time::Duration;

/// Worker configuration
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Delay between polls (default: 600 seconds)
    pub poll_interval: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(600),
        }
    }
}

impl WorkerConfig {
    /// Create a new config builder
    pub fn builder() -> WorkerConfigBuilder {
        WorkerConfigBuilder::default()
    }
}

/// Builder for WorkerConfig
pub struct WorkerConfigBuilder {
    config: WorkerConfig,
}

impl WorkerConfigBuilder {
    /// Set poll interval
    pub fn poll_interval(mut self, duration: Duration) -> Self {
        self.config.poll_interval = duration;
        self
    }

    /// Set poll interval in seconds
    pub fn poll_interval_secs(mut self, secs: u64) -> Self {
        self.config.poll_interval = Duration::from_secs(secs);
        self
    }

    /// Build the config
    pub fn build(self) -> WorkerConfig {
        self.config
    }
}

impl Default for WorkerConfigBuilder {
    fn default() -> Self {
        Self {
            config: WorkerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_poll_interval_is_ten_minutes() {
        assert_eq!(WorkerConfig::default().poll_interval, Duration::from_secs(600));
    }

    #[test]
    fn builder_overrides_poll_interval() {
        let config = WorkerConfig::builder().poll_interval_secs(30).build();
        assert_eq!(config.poll_interval, Duration::from_secs(30));

        let config = WorkerConfig::builder()
            .poll_interval(Duration::from_millis(250))
            .build();
        assert_eq!(config.poll_interval, Duration::from_millis(250));
    }
}
