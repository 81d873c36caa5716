//! Worker configuration.

use crate::core::{Result, WorkerError};
use std::time::Duration;

/// Configuration for a worker thread and the queue feeding it.
///
/// Replaces process-wide constants with values supplied at construction so a
/// worker can be tested with arbitrary intervals and capacities.
#[derive(Clone, Debug)]
pub struct WorkerConfig {
    /// Minimum interval between heartbeat timestamp updates.
    /// Default: 500ms
    pub heartbeat_interval: Duration,
    /// Interval between work-loop iterations.
    /// Default: 1ms
    ///
    /// Shorter intervals improve responsiveness but increase CPU usage.
    pub tick_interval: Duration,
    /// Capacity of the queue feeding the worker (0 = unbounded).
    /// Default: 20
    pub queue_capacity: usize,
    /// Whether producers block when the queue is full, instead of failing
    /// immediately.
    /// Default: true
    pub blocking_push: bool,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            heartbeat_interval: Duration::from_millis(500),
            tick_interval: Duration::from_millis(1),
            queue_capacity: 20,
            blocking_push: true,
        }
    }
}

impl WorkerConfig {
    /// Create a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heartbeat interval
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_heartbeat_interval(mut self, interval: Duration) -> Self {
        self.heartbeat_interval = interval;
        self
    }

    /// Set the tick interval
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Set the queue capacity (0 = unbounded)
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Set whether producers block on a full queue
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_blocking_push(mut self, blocking: bool) -> Self {
        self.blocking_push = blocking;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval.is_zero() {
            return Err(WorkerError::invalid_config(
                "tick_interval",
                "tick interval must be non-zero",
            ));
        }
        if self.heartbeat_interval.is_zero() {
            return Err(WorkerError::invalid_config(
                "heartbeat_interval",
                "heartbeat interval must be non-zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorkerConfig::default();
        assert_eq!(config.heartbeat_interval, Duration::from_millis(500));
        assert_eq!(config.tick_interval, Duration::from_millis(1));
        assert_eq!(config.queue_capacity, 20);
        assert!(config.blocking_push);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = WorkerConfig::new()
            .with_heartbeat_interval(Duration::from_millis(100))
            .with_tick_interval(Duration::from_millis(5))
            .with_queue_capacity(0)
            .with_blocking_push(false);

        assert_eq!(config.heartbeat_interval, Duration::from_millis(100));
        assert_eq!(config.tick_interval, Duration::from_millis(5));
        assert_eq!(config.queue_capacity, 0);
        assert!(!config.blocking_push);
    }

    #[test]
    fn test_validate_rejects_zero_intervals() {
        let config = WorkerConfig::new().with_tick_interval(Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(WorkerError::InvalidConfig { .. })
        ));

        let config = WorkerConfig::new().with_heartbeat_interval(Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(WorkerError::InvalidConfig { .. })
        ));
    }
}
