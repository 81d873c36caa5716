//! Error types for the worker lifecycle layer.
//!
//! Queue conditions (full, closed, empty) are structural and stay in
//! [`QueueError`](crate::queue::QueueError); the errors here cover thread
//! lifecycle and configuration only.

/// Result type for worker lifecycle operations
pub type Result<T> = std::result::Result<T, WorkerError>;

/// Errors that can occur in the worker lifecycle layer
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WorkerError {
    /// Worker thread is already running
    #[error("Worker '{worker}' is already running")]
    AlreadyRunning {
        /// Name of the worker
        worker: String,
    },

    /// Worker has been stopped and cannot be restarted
    #[error("Worker '{worker}' has been stopped and cannot be restarted")]
    Terminated {
        /// Name of the worker
        worker: String,
    },

    /// Failed to spawn the worker thread
    #[error("Failed to spawn worker thread '{worker}'")]
    Spawn {
        /// Name of the worker
        worker: String,
        /// Underlying IO error from thread creation
        #[source]
        source: std::io::Error,
    },

    /// Failed to join the worker thread
    #[error("Failed to join worker thread '{worker}': {message}")]
    Join {
        /// Name of the worker
        worker: String,
        /// Error message
        message: String,
    },

    /// Invalid configuration with parameter
    #[error("Invalid configuration for '{parameter}': {message}")]
    InvalidConfig {
        /// Configuration parameter name
        parameter: String,
        /// Error message
        message: String,
    },

    /// A unit of work inside the worker loop failed
    #[error("Worker tick failed: {0}")]
    Execution(String),
}

impl WorkerError {
    /// Create an already running error
    pub fn already_running(worker: impl Into<String>) -> Self {
        WorkerError::AlreadyRunning {
            worker: worker.into(),
        }
    }

    /// Create a terminated error
    pub fn terminated(worker: impl Into<String>) -> Self {
        WorkerError::Terminated {
            worker: worker.into(),
        }
    }

    /// Create a spawn error from the underlying IO failure
    pub fn spawn(worker: impl Into<String>, source: std::io::Error) -> Self {
        WorkerError::Spawn {
            worker: worker.into(),
            source,
        }
    }

    /// Create a join error
    pub fn join(worker: impl Into<String>, message: impl Into<String>) -> Self {
        WorkerError::Join {
            worker: worker.into(),
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        WorkerError::InvalidConfig {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create an execution error
    pub fn execution(message: impl Into<String>) -> Self {
        WorkerError::Execution(message.into())
    }
}
