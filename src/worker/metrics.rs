//! Worker heartbeat and throughput metrics.
//!
//! Metrics are written by the owning worker thread and read from any thread.
//! Every field is atomic and cross-thread reads go through a by-value
//! [`MetricsSnapshot`], so there is no torn read and no reference into state
//! that another thread is mutating.

use crate::core::clock;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Live metrics block owned by one worker.
///
/// Single writer (the worker thread), any number of readers via
/// [`snapshot`](Self::snapshot).
#[derive(Debug)]
pub struct WorkerMetrics {
    last_heartbeat_tick: AtomicU64,
    launch_tick: AtomicU64,
    error_count: AtomicU64,
    tick_count: AtomicU64,
    /// f64 stored as its bit pattern.
    message_rate_bits: AtomicU64,
    bytes_processed: AtomicU64,
}

impl WorkerMetrics {
    /// Creates a metrics block anchored at the current monotonic tick.
    pub fn new() -> Self {
        let now = clock::tick_count_millis();
        Self {
            last_heartbeat_tick: AtomicU64::new(now),
            launch_tick: AtomicU64::new(now),
            error_count: AtomicU64::new(0),
            tick_count: AtomicU64::new(0),
            message_rate_bits: AtomicU64::new(0f64.to_bits()),
            bytes_processed: AtomicU64::new(0),
        }
    }

    /// Records one work-loop iteration.
    pub fn record_tick(&self) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one failed unit of work.
    pub fn record_error(&self) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Adds processed payload bytes.
    pub fn add_bytes(&self, bytes: u64) {
        self.bytes_processed.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Publishes the current message throughput in messages per second.
    pub fn set_message_rate(&self, rate: f64) {
        self.message_rate_bits.store(rate.to_bits(), Ordering::Relaxed);
    }

    /// Advances the heartbeat timestamp if at least `interval` has elapsed
    /// since the last advance.
    ///
    /// Returns `true` when the heartbeat advanced. Calling this on every tick
    /// is cheap: most calls read one atomic and do nothing.
    pub fn update_heartbeat(&self, interval: Duration) -> bool {
        let now = clock::tick_count_millis();
        let last = self.last_heartbeat_tick.load(Ordering::Relaxed);
        if now.saturating_sub(last) >= interval.as_millis() as u64 {
            self.last_heartbeat_tick.store(now, Ordering::Relaxed);
            return true;
        }
        false
    }

    /// Monotonic tick of the last heartbeat advance.
    pub fn last_heartbeat_tick(&self) -> u64 {
        self.last_heartbeat_tick.load(Ordering::Relaxed)
    }

    /// Monotonic tick captured when the metrics block was created.
    pub fn launch_tick(&self) -> u64 {
        self.launch_tick.load(Ordering::Relaxed)
    }

    /// Number of failed units of work.
    pub fn error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Number of work-loop iterations.
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    /// Message throughput in messages per second.
    pub fn message_rate(&self) -> f64 {
        f64::from_bits(self.message_rate_bits.load(Ordering::Relaxed))
    }

    /// Total processed payload bytes.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed.load(Ordering::Relaxed)
    }

    /// Returns a point-in-time copy of all fields.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            last_heartbeat_tick: self.last_heartbeat_tick(),
            launch_tick: self.launch_tick(),
            error_count: self.error_count(),
            tick_count: self.tick_count(),
            message_rate: self.message_rate(),
            bytes_processed: self.bytes_processed(),
        }
    }
}

impl Default for WorkerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time copy of a worker's metrics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    /// Monotonic tick of the last heartbeat advance.
    pub last_heartbeat_tick: u64,
    /// Monotonic tick captured when the worker's metrics were created.
    pub launch_tick: u64,
    /// Number of failed units of work.
    pub error_count: u64,
    /// Number of work-loop iterations.
    pub tick_count: u64,
    /// Message throughput in messages per second.
    pub message_rate: f64,
    /// Total processed payload bytes.
    pub bytes_processed: u64,
}

impl MetricsSnapshot {
    /// Worker uptime at `now_tick`, in milliseconds.
    pub fn uptime_millis(&self, now_tick: u64) -> u64 {
        now_tick.saturating_sub(self.launch_tick)
    }
}
