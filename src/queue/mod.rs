//! Bounded blocking FIFO queue shared between producer and consumer threads.
//!
//! The queue in this module is the backpressure point of a pipeline: producers
//! [`push`](BlockingQueue::push) work items and block while the queue is full,
//! consumers [`pop`](BlockingQueue::pop) items and block while it is empty.
//! Closing the queue is the cancellation signal for both sides: blocked
//! producers fail fast, blocked consumers drain what is buffered and then
//! observe end-of-stream.
//!
//! # Example
//!
//! ```rust
//! use message_thread_system::queue::{BlockingQueue, QueueError};
//!
//! let queue = BlockingQueue::bounded(2);
//! queue.push(1).unwrap();
//! queue.push(2).unwrap();
//!
//! // Queue is now full - try_push hands the value back
//! match queue.try_push(3) {
//!     Err(QueueError::Full(value)) => assert_eq!(value, 3),
//!     _ => panic!("expected Full error"),
//! }
//!
//! assert_eq!(queue.pop().unwrap(), 1);
//! ```

mod blocking;

pub use blocking::BlockingQueue;

use std::fmt;

/// Errors that can occur during queue operations.
///
/// The `Full` and `Closed` variants carry the rejected value so the caller
/// keeps ownership and can retry or dispose of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
    /// Queue is at capacity (non-blocking push only); the value is returned.
    Full(T),
    /// Queue has been closed and accepts no new items; the value is returned.
    Closed(T),
    /// Queue is empty (non-blocking pop only).
    Empty,
    /// Queue is closed and fully drained: no item will ever arrive again.
    Disconnected,
}

impl<T> fmt::Display for QueueError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Full(_) => write!(f, "queue is full"),
            QueueError::Closed(_) => write!(f, "queue is closed"),
            QueueError::Empty => write!(f, "queue is empty"),
            QueueError::Disconnected => write!(f, "queue is closed and drained"),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for QueueError<T> {}

/// Result type for queue operations over item type `V`.
pub type QueueResult<T, V> = std::result::Result<T, QueueError<V>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_error_display() {
        assert_eq!(QueueError::Full(7).to_string(), "queue is full");
        assert_eq!(QueueError::Closed(7).to_string(), "queue is closed");
        assert_eq!(QueueError::<i32>::Empty.to_string(), "queue is empty");
        assert_eq!(
            QueueError::<i32>::Disconnected.to_string(),
            "queue is closed and drained"
        );
    }

    #[test]
    fn test_queue_error_returns_value() {
        match QueueError::Full(String::from("payload")) {
            QueueError::Full(value) => assert_eq!(value, "payload"),
            _ => unreachable!(),
        }
    }
}
