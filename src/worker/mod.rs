//! Worker thread lifecycle and metrics.
//!
//! A worker is a unit-of-work loop ([`Worker`]) executed on a dedicated OS
//! thread owned by a [`WorkerThread`] handle. The handle is the single owner
//! of the thread: `start()` spawns it, `stop()` (or dropping the handle)
//! signals the loop cooperatively and joins. Every worker carries a
//! [`WorkerProperties`] value whose [`WorkerMetrics`] block records ticks,
//! errors, throughput and rate-limited heartbeats, readable from any thread
//! as a [`MetricsSnapshot`].

pub mod base;
pub mod message_worker;
pub mod metrics;
pub mod properties;

pub use base::{Worker, WorkerContext, WorkerThread};
pub use message_worker::MessageWorker;
pub use metrics::{MetricsSnapshot, WorkerMetrics};
pub use properties::{BaseProperties, WorkerProperties};
