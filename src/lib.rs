//! # Message Thread System
//!
//! A bounded blocking queue and worker-thread lifecycle layer for
//! single-process message pipelines.
//!
//! ## Features
//!
//! - **Blocking Queue**: Mutex + condvar FIFO with blocking, non-blocking
//!   and peeking operations
//! - **Backpressure**: Producers block (or fail fast) while the queue is full
//! - **Runtime Capacity**: The bound can be raised, lowered or removed while
//!   the queue is in use
//! - **Clean Shutdown**: Closing the queue wakes every waiter; buffered items
//!   drain before consumers observe end of stream
//! - **Worker Lifecycle**: One owning handle per worker thread with
//!   cooperative stop and join-on-drop
//! - **Heartbeats and Metrics**: Rate-limited liveness timestamps and atomic
//!   throughput counters, readable from any thread
//!
//! ## Quick Start
//!
//! ```rust
//! use message_thread_system::prelude::*;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let config = WorkerConfig::default();
//! let queue = Arc::new(BlockingQueue::bounded(config.queue_capacity));
//!
//! // Spawn a worker draining the queue
//! let worker = MessageWorker::new(Arc::clone(&queue));
//! let props = BaseProperties::from_config(&config);
//! let mut handle = WorkerThread::new(worker, props, &config)?;
//! handle.start()?;
//!
//! // Produce some work
//! for i in 0..10 {
//!     queue.push(Message::new(i, json!({"seq": i}))).unwrap();
//! }
//!
//! // Close the queue and shut the worker down
//! queue.close();
//! handle.stop();
//!
//! println!("processed {} bytes", handle.metrics().bytes_processed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Backpressure
//!
//! ```rust
//! use message_thread_system::queue::{BlockingQueue, QueueError};
//!
//! let queue = BlockingQueue::bounded(2);
//! queue.push("a").unwrap();
//! queue.push("b").unwrap();
//!
//! // Non-blocking push on a full queue hands the value back
//! match queue.try_push("c") {
//!     Err(QueueError::Full(value)) => assert_eq!(value, "c"),
//!     _ => panic!("expected Full error"),
//! }
//!
//! // Removing the bound lets the push through
//! queue.set_capacity(0);
//! queue.push("c").unwrap();
//! ```
//!
//! ## Custom Workers
//!
//! ```rust
//! use message_thread_system::prelude::*;
//! use std::time::Duration;
//!
//! struct Poller {
//!     polls: u64,
//! }
//!
//! impl Worker for Poller {
//!     fn tick(&mut self, _ctx: &WorkerContext) -> Result<()> {
//!         self.polls += 1;
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "poller"
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let config = WorkerConfig::new().with_tick_interval(Duration::from_millis(1));
//! let props = BaseProperties::from_config(&config);
//! let mut handle = WorkerThread::new(Poller { polls: 0 }, props, &config)?;
//!
//! handle.start()?;
//! std::thread::sleep(Duration::from_millis(20));
//! handle.stop();
//!
//! assert!(handle.metrics().tick_count > 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod prelude;
pub mod queue;
pub mod worker;

pub use crate::core::{Message, Result, WorkerConfig, WorkerError};
pub use queue::{BlockingQueue, QueueError};
pub use worker::{
    BaseProperties, MessageWorker, MetricsSnapshot, Worker, WorkerContext, WorkerMetrics,
    WorkerProperties, WorkerThread,
};
