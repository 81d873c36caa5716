//! Convenient re-exports for common types and traits

pub use crate::core::{Message, Result, WorkerConfig, WorkerError};
pub use crate::queue::{BlockingQueue, QueueError};
pub use crate::worker::{
    BaseProperties, MessageWorker, MetricsSnapshot, Worker, WorkerContext, WorkerMetrics,
    WorkerProperties, WorkerThread,
};
