//! Property-based tests for message_thread_system using proptest

use message_thread_system::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

// ============================================================================
// Queue Ordering Tests
// ============================================================================

proptest! {
    /// Pops return values in exactly the order pushed, for any item sequence
    #[test]
    fn test_fifo_order_sequential(items in prop::collection::vec(any::<u32>(), 0..100)) {
        let queue = BlockingQueue::new();
        for item in &items {
            queue.push(*item).unwrap();
        }
        queue.close();

        let mut popped = Vec::new();
        while let Ok(item) = queue.pop() {
            popped.push(item);
        }
        prop_assert_eq!(popped, items);
    }

    /// FIFO order survives backpressure: a bounded queue between one producer
    /// and one consumer delivers the exact pushed sequence
    #[test]
    fn test_fifo_order_across_threads(
        items in prop::collection::vec(any::<u32>(), 1..200),
        capacity in 1usize..8
    ) {
        let queue = Arc::new(BlockingQueue::bounded(capacity));

        let producer_queue = Arc::clone(&queue);
        let sent = items.clone();
        let producer = thread::spawn(move || {
            for item in sent {
                producer_queue.push(item).unwrap();
            }
            producer_queue.close();
        });

        let mut received = Vec::new();
        while let Ok(item) = queue.pop() {
            received.push(item);
        }
        producer.join().unwrap();

        prop_assert_eq!(received, items);
    }
}

// ============================================================================
// Capacity Tests
// ============================================================================

proptest! {
    /// try_push fills a bounded queue to exactly its capacity, never beyond
    #[test]
    fn test_try_push_respects_capacity(capacity in 1usize..64) {
        let queue = BlockingQueue::bounded(capacity);

        for i in 0..capacity {
            prop_assert!(queue.try_push(i).is_ok());
        }
        prop_assert!(matches!(queue.try_push(capacity), Err(QueueError::Full(_))));
        prop_assert_eq!(queue.len(), capacity);
        prop_assert_eq!(queue.capacity(), Some(capacity));
    }

    /// Removing the bound lets previously rejected pushes through
    #[test]
    fn test_unbound_after_full(capacity in 1usize..16, extra in 1usize..32) {
        let queue = BlockingQueue::bounded(capacity);
        for i in 0..capacity {
            queue.push(i).unwrap();
        }
        prop_assert!(matches!(queue.try_push(capacity), Err(QueueError::Full(_))));

        queue.set_capacity(0);
        for i in 0..extra {
            prop_assert!(queue.try_push(capacity + i).is_ok());
        }
        prop_assert_eq!(queue.len(), capacity + extra);
    }

    /// Shrinking the bound never evicts buffered items
    #[test]
    fn test_shrink_keeps_items(len in 2usize..32) {
        let queue = BlockingQueue::bounded(len);
        for i in 0..len {
            queue.push(i).unwrap();
        }

        queue.set_capacity(1);
        prop_assert_eq!(queue.len(), len);

        let mut drained = Vec::new();
        queue.close();
        while let Ok(item) = queue.pop() {
            drained.push(item);
        }
        prop_assert_eq!(drained, (0..len).collect::<Vec<_>>());
    }
}

// ============================================================================
// Close Semantics Tests
// ============================================================================

proptest! {
    /// Everything pushed before a close is popped before end of stream
    #[test]
    fn test_close_drains_completely(items in prop::collection::vec(any::<u8>(), 0..64)) {
        let queue = BlockingQueue::new();
        for item in &items {
            queue.push(*item).unwrap();
        }
        queue.close();
        queue.close(); // idempotent

        let mut count = 0;
        while queue.pop().is_ok() {
            count += 1;
        }
        prop_assert_eq!(count, items.len());
        prop_assert!(matches!(queue.pop(), Err(QueueError::Disconnected)));
    }
}

// ============================================================================
// WorkerConfig Tests
// ============================================================================

proptest! {
    /// Any non-zero interval pair validates
    #[test]
    fn test_config_validation(
        heartbeat_ms in 1u64..10_000,
        tick_ms in 1u64..1_000,
        capacity in 0usize..10_000
    ) {
        let config = WorkerConfig::new()
            .with_heartbeat_interval(Duration::from_millis(heartbeat_ms))
            .with_tick_interval(Duration::from_millis(tick_ms))
            .with_queue_capacity(capacity);

        prop_assert!(config.validate().is_ok());
    }
}
