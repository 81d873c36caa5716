//! Worker properties: the metrics block plus heartbeat tuning.

use crate::core::WorkerConfig;
use crate::worker::metrics::WorkerMetrics;
use std::time::Duration;

/// Contract every worker properties type satisfies.
///
/// A properties type bundles the worker's [`WorkerMetrics`] with whatever
/// configuration its worker needs. The lifecycle layer only requires access
/// to the metrics block and the heartbeat interval; anything else is private
/// to the concrete worker.
pub trait WorkerProperties: Send + Sync + 'static {
    /// The worker's metrics block.
    fn metrics(&self) -> &WorkerMetrics;

    /// Minimum interval between heartbeat advances.
    fn heartbeat_interval(&self) -> Duration;
}

/// Stock properties: metrics plus a heartbeat interval.
///
/// Sufficient for most workers; implement [`WorkerProperties`] directly when
/// a worker carries extra per-instance state.
#[derive(Debug)]
pub struct BaseProperties {
    metrics: WorkerMetrics,
    heartbeat_interval: Duration,
}

impl BaseProperties {
    /// Creates properties with the given heartbeat interval.
    pub fn new(heartbeat_interval: Duration) -> Self {
        Self {
            metrics: WorkerMetrics::new(),
            heartbeat_interval,
        }
    }

    /// Creates properties from a worker configuration.
    pub fn from_config(config: &WorkerConfig) -> Self {
        Self::new(config.heartbeat_interval)
    }
}

impl Default for BaseProperties {
    fn default() -> Self {
        Self::from_config(&WorkerConfig::default())
    }
}

impl WorkerProperties for BaseProperties {
    fn metrics(&self) -> &WorkerMetrics {
        &self.metrics
    }

    fn heartbeat_interval(&self) -> Duration {
        self.heartbeat_interval
    }
}
