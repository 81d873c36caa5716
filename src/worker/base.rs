//! Worker thread lifecycle: the [`Worker`] trait, the shared
//! [`WorkerContext`], and the owning [`WorkerThread`] handle.

use crate::core::{clock, Result, WorkerConfig, WorkerError};
use crate::worker::metrics::{MetricsSnapshot, WorkerMetrics};
use crate::worker::properties::WorkerProperties;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use uuid::Uuid;

/// State shared between a [`WorkerThread`] handle and its running loop.
///
/// The context carries the cooperative stop flag, the worker's identity and
/// properties, and the heartbeat entry point. It is handed to every
/// [`Worker::tick`] and [`Worker::run`] call.
pub struct WorkerContext {
    properties: Arc<dyn WorkerProperties>,
    running: AtomicBool,
    uuid: Uuid,
    name: String,
    tick_interval: Duration,
}

impl WorkerContext {
    fn new(
        properties: Arc<dyn WorkerProperties>,
        uuid: Uuid,
        name: String,
        tick_interval: Duration,
    ) -> Self {
        Self {
            properties,
            running: AtomicBool::new(false),
            uuid,
            name,
            tick_interval,
        }
    }

    /// Returns `true` while the worker loop should keep going.
    ///
    /// The loop polls this flag; [`WorkerThread::stop`] clears it.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// The worker's metrics block.
    pub fn metrics(&self) -> &WorkerMetrics {
        self.properties.metrics()
    }

    /// The worker's properties.
    pub fn properties(&self) -> &dyn WorkerProperties {
        self.properties.as_ref()
    }

    /// Stable identity generated when the handle was created.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Thread name, also used in log lines.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Interval between work-loop iterations.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Advances the heartbeat timestamp if the heartbeat interval has
    /// elapsed since the last advance, otherwise does nothing.
    ///
    /// Safe to call on every tick regardless of tick frequency.
    pub fn send_heartbeat(&self) {
        let interval = self.properties.heartbeat_interval();
        if self.metrics().update_heartbeat(interval) {
            log::trace!(
                "worker '{}' heartbeat at +{}",
                self.name,
                clock::format_duration_millis(self.metrics().last_heartbeat_tick())
            );
        }
    }
}

/// A unit-of-work loop executed on a dedicated OS thread.
///
/// Implementors provide [`tick`](Self::tick); the provided
/// [`run`](Self::run) loop polls the stop flag, ticks, records metrics and
/// emits rate-limited heartbeats. Override `run` for workers that need a
/// different loop shape (for example, blocking on a queue instead of
/// sleeping).
pub trait Worker: Send + 'static {
    /// Executes one unit of work.
    ///
    /// # Errors
    ///
    /// An error is counted in the worker's metrics and logged; the loop
    /// keeps running. Panics are fatal to the worker thread.
    fn tick(&mut self, ctx: &WorkerContext) -> Result<()>;

    /// Name used for the OS thread and log correlation.
    fn name(&self) -> &str {
        "worker"
    }

    /// The thread body: loops until the stop flag clears.
    fn run(&mut self, ctx: &WorkerContext) {
        while ctx.is_running() {
            if let Err(e) = self.tick(ctx) {
                ctx.metrics().record_error();
                log::warn!("worker '{}' tick failed: {}", ctx.name(), e);
            }
            ctx.metrics().record_tick();
            ctx.send_heartbeat();
            thread::sleep(ctx.tick_interval());
        }
    }
}

/// Owning handle for one worker thread.
///
/// The handle is the single owner of the OS thread: it is not clonable, and
/// dropping it stops and joins the thread. Lifecycle is
/// `Created → Running → Stopped` and terminal: a stopped worker cannot
/// be restarted.
///
/// # Example
///
/// ```rust
/// use message_thread_system::prelude::*;
/// use std::time::Duration;
///
/// struct Noop;
///
/// impl Worker for Noop {
///     fn tick(&mut self, _ctx: &WorkerContext) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let config = WorkerConfig::new().with_tick_interval(Duration::from_millis(1));
/// let props = BaseProperties::from_config(&config);
/// let mut handle = WorkerThread::new(Noop, props, &config)?;
///
/// handle.start()?;
/// assert!(handle.is_running());
///
/// handle.stop();
/// assert!(!handle.is_running());
/// # Ok(())
/// # }
/// ```
pub struct WorkerThread<W: Worker> {
    worker: Option<W>,
    context: Arc<WorkerContext>,
    handle: Option<JoinHandle<()>>,
}

impl<W: Worker> WorkerThread<W> {
    /// Creates a handle in the `Created` state; no thread is spawned yet.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::InvalidConfig`] if `config` fails validation.
    pub fn new(worker: W, properties: impl WorkerProperties, config: &WorkerConfig) -> Result<Self> {
        config.validate()?;
        let uuid = Uuid::new_v4();
        let short = uuid.simple().to_string();
        let name = format!("{}-{}", worker.name(), &short[..8]);
        let context = Arc::new(WorkerContext::new(
            Arc::new(properties),
            uuid,
            name,
            config.tick_interval,
        ));
        Ok(Self {
            worker: Some(worker),
            context,
            handle: None,
        })
    }

    /// Spawns the OS thread and enters the `Running` state.
    ///
    /// # Errors
    ///
    /// - [`WorkerError::AlreadyRunning`] if the worker is running; no second
    ///   thread is spawned.
    /// - [`WorkerError::Terminated`] if the worker was already stopped.
    /// - [`WorkerError::Spawn`] if the OS refuses the thread; the worker is
    ///   not considered running afterwards.
    pub fn start(&mut self) -> Result<()> {
        if self
            .context
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(WorkerError::already_running(self.context.name()));
        }

        let Some(mut worker) = self.worker.take() else {
            self.context.running.store(false, Ordering::Release);
            return Err(WorkerError::terminated(self.context.name()));
        };

        let ctx = Arc::clone(&self.context);
        let spawned = thread::Builder::new()
            .name(ctx.name().to_string())
            .spawn(move || {
                log::debug!("worker '{}' started (uuid {})", ctx.name(), ctx.uuid());

                let outcome = catch_unwind(AssertUnwindSafe(|| worker.run(&ctx)));
                if let Err(panic_info) = outcome {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    ctx.metrics().record_error();
                    log::error!("worker '{}' panicked: {}", ctx.name(), panic_msg);
                }

                // The loop is done either way; reconcile the flag so
                // is_running() converges without requiring stop().
                ctx.running.store(false, Ordering::Release);
            });

        match spawned {
            Ok(handle) => {
                self.handle = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.context.running.store(false, Ordering::Release);
                Err(WorkerError::spawn(self.context.name(), e))
            }
        }
    }

    /// Clears the stop flag and joins the thread.
    ///
    /// Idempotent and infallible: calling it on a stopped worker is a no-op,
    /// and a panicked worker thread is logged rather than propagated.
    pub fn stop(&mut self) {
        self.context.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok(()) => {
                    let snapshot = self.context.metrics().snapshot();
                    let uptime = snapshot.uptime_millis(clock::tick_count_millis());
                    log::debug!(
                        "worker '{}' stopped after {} ({} ticks, {} errors)",
                        self.context.name(),
                        clock::format_duration_millis(uptime),
                        snapshot.tick_count,
                        snapshot.error_count
                    );
                }
                Err(_) => {
                    log::error!(
                        "worker '{}' thread panicked before join",
                        self.context.name()
                    );
                }
            }
        }
    }

    /// Returns `true` while the worker thread is running its loop.
    pub fn is_running(&self) -> bool {
        self.context.is_running()
    }

    /// Stable identity generated when the handle was created.
    pub fn uuid(&self) -> Uuid {
        self.context.uuid()
    }

    /// Thread name, derived from [`Worker::name`] and the UUID.
    pub fn name(&self) -> &str {
        self.context.name()
    }

    /// Returns a point-in-time copy of the worker's metrics.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.context.metrics().snapshot()
    }

    /// The worker's properties.
    pub fn properties(&self) -> &dyn WorkerProperties {
        self.context.properties()
    }
}

impl<W: Worker> Drop for WorkerThread<W> {
    fn drop(&mut self) {
        self.stop();
    }
}
