//! # Nour Runtime
//!
//! Cancellable timers and the channel that brings fired timers back to the
//! application shell.
//!
//! ## Overview
//!
//! Screens never sleep. They ask for a timer, and a [`TimerScope`] owned by
//! the mounted screen spawns a tokio task that posts an [`Envelope`] onto the
//! [`EventBus`] when the delay elapses. Replacing the screen drops its scope,
//! which aborts every pending task.
//!
//! ```text
//! screen ──schedule──▶ TimerScope ──spawn──▶ sleep ──Envelope──▶ EventBus ──▶ shell
//!                          │
//!                        drop ──▶ abort all
//! ```
//!
//! ## Key Types
//!
//! - [`TimerScope`] - Timers of one mounted screen
//! - [`TimerHandle`] - Cancels a single timer
//! - [`EventBus`] / [`EventSender`] - Bounded mpsc channel of envelopes
//! - [`MountId`] - Identity of a mounted screen instance

pub mod bus;
pub mod error;
pub mod timer;

pub use bus::{Envelope, EventBus, EventSender, MountId};
pub use error::{Result, RuntimeError};
pub use timer::{TimerHandle, TimerScope};
