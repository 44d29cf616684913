//! Error types for the capability ports.

use thiserror::Error;

/// Errors a capability can raise. A rejected document is not an error;
/// see [`nour_core::ValidationOutcome`].
#[derive(Debug, Error)]
pub enum PortError {
    /// Reading a picked file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The capability cannot serve requests (camera missing, picker closed).
    #[error("capability unavailable: {0}")]
    Unavailable(String),
}

/// Result type for port operations.
pub type Result<T> = std::result::Result<T, PortError>;
