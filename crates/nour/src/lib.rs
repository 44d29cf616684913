//! # Nour
//!
//! Headless application core of the Nour digital identity wallet: the
//! screen set, the auth gate, document upload with AI validation, bank
//! credential sharing, the PIN-gated wallet and the timed onboarding and
//! transfer sequences.
//!
//! ## Overview
//!
//! - **App**: Owns the auth gate and exactly one mounted screen
//! - **Screens**: Pure state machines from `nour-flows`, driven by [`Action`]s
//! - **Ports**: File sources and the validator are injected capabilities
//! - **Timers**: Scoped to the mounted screen and cancelled on remount
//!
//! ## Key Concepts
//!
//! - **Auth gate**: Signed out, only sign-up and sign-in are reachable.
//!   Signed in, neither is.
//! - **Mount**: Showing a screen creates fresh state for it. Leaving it
//!   discards that state and every timer it scheduled.
//! - **Command**: Effects a screen asks for. The App executes them and
//!   feeds results back as events.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nour::flows::{SignInEvent, UploadEvent};
//! use nour::{Action, App, AppConfig, DocumentType, Screen};
//!
//! async fn example() -> nour::Result<()> {
//!     let config = AppConfig {
//!         initial_screen: Screen::SignIn,
//!         ..AppConfig::default()
//!     };
//!     let mut app = App::new(config)?;
//!
//!     app.dispatch(Action::SignIn(SignInEvent::Biometric)).await?;
//!     app.navigate(Screen::Upload).await?;
//!     app.dispatch(Action::Upload(UploadEvent::ChooseType(DocumentType::Passport))).await?;
//!     app.dispatch(Action::Upload(UploadEvent::TakePhoto)).await?;
//!
//!     // Wait out the validation delay.
//!     app.run_until_idle().await?;
//!     println!("{:?}", app.mounted().upload().map(|u| u.stage().name()));
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `nour::core` - Data model, screen set, fixtures
//! - `nour::ports` - Validator and file source capabilities
//! - `nour::flows` - Screen state machines
//! - `nour::runtime` - Timer scope and event bus

pub mod app;
pub mod config;
pub mod error;
pub mod screens;
pub mod shell;

// Re-export component crates
pub use nour_core as core;
pub use nour_flows as flows;
pub use nour_ports as ports;
pub use nour_runtime as runtime;

pub use app::{App, AppBuilder, UPLOAD_ISSUER};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use screens::{Action, MountedScreen};
pub use shell::{AppState, NavOutcome};

// Re-export commonly used core types
pub use nour_core::{
    Document, DocumentId, DocumentType, FileBlob, NavItem, NavTab, Screen, VerificationStatus,
};
