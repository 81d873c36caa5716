//! Example: Implementing the Worker trait for a custom periodic task
//!
//! Shows a hand-written worker with its own properties type, custom tick
//! logic and error accounting.
//!
//! Run with: `cargo run --example custom_worker`

use message_thread_system::prelude::*;
use std::time::Duration;

/// Properties for a worker that polls a flaky sensor.
struct SensorProperties {
    metrics: WorkerMetrics,
    heartbeat_interval: Duration,
    sensor_name: &'static str,
}

impl WorkerProperties for SensorProperties {
    fn metrics(&self) -> &WorkerMetrics {
        &self.metrics
    }

    fn heartbeat_interval(&self) -> Duration {
        self.heartbeat_interval
    }
}

/// A worker that samples a simulated sensor; every seventh read fails.
struct SensorPoller {
    samples: u64,
}

impl Worker for SensorPoller {
    fn tick(&mut self, ctx: &WorkerContext) -> Result<()> {
        self.samples += 1;
        if self.samples % 7 == 0 {
            return Err(WorkerError::execution(format!(
                "sensor read {} timed out",
                self.samples
            )));
        }
        // 4 bytes per successful sample
        ctx.metrics().add_bytes(4);
        Ok(())
    }

    fn name(&self) -> &str {
        "sensor-poller"
    }
}

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Message Thread System - Custom Worker Example ===\n");

    let config = WorkerConfig::new()
        .with_tick_interval(Duration::from_millis(10))
        .with_heartbeat_interval(Duration::from_millis(100));

    let props = SensorProperties {
        metrics: WorkerMetrics::new(),
        heartbeat_interval: config.heartbeat_interval,
        sensor_name: "thermocouple-a",
    };
    println!("1. Polling sensor '{}'", props.sensor_name);

    let mut handle = WorkerThread::new(SensorPoller { samples: 0 }, props, &config)?;
    handle.start()?;

    std::thread::sleep(Duration::from_millis(500));
    handle.stop();

    let snapshot = handle.metrics();
    println!("\n2. Results after 500ms:");
    println!("   Ticks: {}", snapshot.tick_count);
    println!("   Failed reads: {}", snapshot.error_count);
    println!("   Bytes sampled: {}", snapshot.bytes_processed);
    println!(
        "   Last heartbeat at monotonic tick {}",
        snapshot.last_heartbeat_tick
    );

    Ok(())
}
