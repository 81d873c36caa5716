//! Core types shared by the queue and worker layers

pub mod clock;
pub mod config;
pub mod error;
pub mod message;

pub use config::WorkerConfig;
pub use error::{Result, WorkerError};
pub use message::Message;
