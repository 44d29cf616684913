//! Error types for the application shell.

use nour_core::{CoreError, Screen};
use nour_ports::PortError;
use nour_runtime::RuntimeError;
use thiserror::Error;

/// Errors surfaced to the embedding front-end.
///
/// None of these come from ordinary user input: refused navigation and
/// rejected uploads are states, not errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// A tag from outside the crate did not parse.
    #[error("parse error: {0}")]
    Core(#[from] CoreError),

    /// A capability failed (file could not be read, camera detached).
    #[error("capability error: {0}")]
    Port(#[from] PortError),

    /// Timer or event channel failure.
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    /// Configuration could not be loaded or is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An action was addressed to a screen that is not mounted.
    #[error("action for {requested} but {mounted} is mounted")]
    ScreenNotMounted { requested: Screen, mounted: Screen },
}

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, AppError>;
