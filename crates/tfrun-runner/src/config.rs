//! Runner configuration.

use std::time::Duration;

/// Delay between run status polls.
pub const DEFAULT_RUN_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Delay between state version polls.
pub const DEFAULT_RESOURCE_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Runner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Block until the run and its state processing are done.
    pub wait: bool,

    /// Delay between run status polls.
    pub run_poll_interval: Duration,

    /// Delay between state version polls.
    pub resource_poll_interval: Duration,

    /// Upper bound on the whole wait. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            wait: false,
            run_poll_interval: DEFAULT_RUN_POLL_INTERVAL,
            resource_poll_interval: DEFAULT_RESOURCE_POLL_INTERVAL,
            timeout: None,
        }
    }
}

impl RunnerConfig {
    /// Builder method to set the wait flag.
    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    /// Builder method to set the run poll interval.
    pub fn with_run_poll_interval(mut self, interval: Duration) -> Self {
        self.run_poll_interval = interval;
        self
    }

    /// Builder method to set the state version poll interval.
    pub fn with_resource_poll_interval(mut self, interval: Duration) -> Self {
        self.resource_poll_interval = interval;
        self
    }

    /// Builder method to bound the wait.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert!(!config.wait);
        assert_eq!(config.run_poll_interval, Duration::from_millis(2000));
        assert_eq!(config.resource_poll_interval, Duration::from_millis(1000));
        assert_eq!(config.timeout, None);
    }
}
