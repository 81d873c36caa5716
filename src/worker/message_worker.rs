//! Worker that drains a message queue.

use crate::core::{clock, Message, Result};
use crate::queue::{BlockingQueue, QueueError};
use crate::worker::base::{Worker, WorkerContext};
use std::sync::Arc;

/// A [`Worker`] consuming [`Message`]s from a shared [`BlockingQueue`].
///
/// Each tick drains every message currently buffered, marks it processed and
/// accounts its payload size, then republishes the message rate. Draining
/// non-blockingly keeps the loop responsive to the stop flag: the worker
/// never parks inside the queue.
///
/// A closed-and-drained queue is end of stream, not an error; the worker
/// idles until it is stopped.
pub struct MessageWorker {
    queue: Arc<BlockingQueue<Message>>,
    messages_processed: u64,
    end_of_stream_logged: bool,
}

impl MessageWorker {
    /// Creates a worker reading from `queue`.
    pub fn new(queue: Arc<BlockingQueue<Message>>) -> Self {
        Self {
            queue,
            messages_processed: 0,
            end_of_stream_logged: false,
        }
    }
}

impl Worker for MessageWorker {
    fn tick(&mut self, ctx: &WorkerContext) -> Result<()> {
        loop {
            match self.queue.try_pop() {
                Ok(mut message) => {
                    message.is_processed = true;
                    ctx.metrics().add_bytes(message.payload_bytes());
                    self.messages_processed += 1;
                    log::trace!(
                        "worker '{}' processed message {} created {}",
                        ctx.name(),
                        message.id,
                        clock::millis_to_iso8601(message.timestamp)
                    );
                }
                Err(QueueError::Empty) => break,
                Err(QueueError::Disconnected) => {
                    if !self.end_of_stream_logged {
                        log::debug!("worker '{}' input queue closed and drained", ctx.name());
                        self.end_of_stream_logged = true;
                    }
                    break;
                }
                // try_pop never reports Full or Closed
                Err(_) => break,
            }
        }

        let elapsed = clock::tick_count_millis().saturating_sub(ctx.metrics().launch_tick());
        if elapsed > 0 {
            ctx.metrics()
                .set_message_rate(self.messages_processed as f64 * 1000.0 / elapsed as f64);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "message-worker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorkerConfig;
    use crate::worker::base::WorkerThread;
    use crate::worker::properties::BaseProperties;
    use serde_json::json;
    use std::thread;
    use std::time::Duration;

    fn test_config() -> WorkerConfig {
        WorkerConfig::new().with_tick_interval(Duration::from_millis(1))
    }

    #[test]
    fn test_processes_buffered_messages() {
        let queue = Arc::new(BlockingQueue::bounded(16));
        for i in 0..10 {
            queue.push(Message::new(i, json!({"seq": i}))).unwrap();
        }

        let config = test_config();
        let props = BaseProperties::from_config(&config);
        let mut handle =
            WorkerThread::new(MessageWorker::new(Arc::clone(&queue)), props, &config).unwrap();

        handle.start().unwrap();
        thread::sleep(Duration::from_millis(50));
        handle.stop();

        assert!(queue.is_empty());
        let snapshot = handle.metrics();
        assert!(snapshot.bytes_processed > 0);
        assert!(snapshot.message_rate > 0.0);
        assert_eq!(snapshot.error_count, 0);
    }

    #[test]
    fn test_closed_queue_is_not_an_error() {
        let queue = Arc::new(BlockingQueue::<Message>::bounded(4));
        queue.close();

        let config = test_config();
        let props = BaseProperties::from_config(&config);
        let mut handle =
            WorkerThread::new(MessageWorker::new(queue), props, &config).unwrap();

        handle.start().unwrap();
        thread::sleep(Duration::from_millis(30));
        assert!(handle.is_running());
        handle.stop();

        assert_eq!(handle.metrics().error_count, 0);
    }

    #[test]
    fn test_keeps_up_with_live_producer() {
        let queue = Arc::new(BlockingQueue::bounded(4));

        let config = test_config();
        let props = BaseProperties::from_config(&config);
        let mut handle =
            WorkerThread::new(MessageWorker::new(Arc::clone(&queue)), props, &config).unwrap();
        handle.start().unwrap();

        for i in 0..100 {
            queue.push(Message::new(i, json!(i))).unwrap();
        }

        // Give the worker time to drain the tail
        thread::sleep(Duration::from_millis(100));
        handle.stop();

        assert!(queue.is_empty());
        assert!(handle.metrics().bytes_processed > 0);
    }
}
