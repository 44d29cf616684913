//! Error types for the runtime module.

use thiserror::Error;

/// Errors raised by timers and event delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The receiving side of the event bus is gone.
    #[error("event channel closed")]
    ChannelClosed,

    /// A timer was scheduled outside a tokio runtime.
    #[error("no tokio runtime available to drive timers")]
    NoRuntime,
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
