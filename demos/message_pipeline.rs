//! Message pipeline example
//!
//! Demonstrates a producer thread feeding a bounded queue drained by a
//! message worker, including backpressure and clean shutdown.
//!
//! Run with: cargo run --example message_pipeline

use message_thread_system::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Message Thread System - Pipeline Example ===\n");

    let config = WorkerConfig::new()
        .with_queue_capacity(20)
        .with_tick_interval(Duration::from_millis(1))
        .with_heartbeat_interval(Duration::from_millis(500));

    let queue = Arc::new(BlockingQueue::bounded(config.queue_capacity));

    println!("1. Configuration:");
    println!("   Queue capacity: {}", config.queue_capacity);
    println!("   Tick interval: {:?}", config.tick_interval);
    println!("   Heartbeat interval: {:?}", config.heartbeat_interval);

    let props = BaseProperties::from_config(&config);
    let mut handle = WorkerThread::new(MessageWorker::new(Arc::clone(&queue)), props, &config)?;
    handle.start()?;
    println!("\n2. Worker '{}' started (uuid {})", handle.name(), handle.uuid());

    println!("\n3. Producing 1000 messages through the bounded queue:");
    let producer_queue = Arc::clone(&queue);
    let producer = thread::spawn(move || {
        for i in 0..1000u64 {
            let message = Message::new(i, json!({"seq": i, "source": "demo"}));
            // Blocking push: the producer waits whenever the worker lags
            if producer_queue.push(message).is_err() {
                println!("   queue closed early, stopping producer");
                break;
            }
        }
        producer_queue.close();
    });

    producer.join().expect("producer panicked");
    println!("   Producer finished and closed the queue");

    // Let the worker drain the tail
    while !queue.is_empty() {
        thread::sleep(Duration::from_millis(5));
    }

    handle.stop();

    let snapshot = handle.metrics();
    println!("\n4. Final metrics:");
    println!("   Ticks: {}", snapshot.tick_count);
    println!("   Bytes processed: {}", snapshot.bytes_processed);
    println!("   Message rate: {:.1} msg/s", snapshot.message_rate);
    println!("   Errors: {}", snapshot.error_count);

    Ok(())
}
