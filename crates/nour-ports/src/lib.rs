//! # Nour Ports
//!
//! Capability interfaces the wallet core is driven through, with the
//! implementations a demo or a test needs.
//!
//! ## Key Types
//!
//! - [`FileSource`] - Produces a file on request (picker, camera)
//! - [`Validator`] - Judges an uploaded document
//! - [`SimulatedValidator`] - Demo coin flip with a configurable success rate
//! - [`ScriptedValidator`] - Deterministic verdicts for tests
//! - [`FixedFileSource`], [`CameraCapture`], [`PathFileSource`] - File sources
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nour_core::DocumentType;
//! use nour_ports::{CameraCapture, FileSource, SimulatedValidator, Validator};
//!
//! async fn example() {
//!     let photo = CameraCapture::new().select_file().await.unwrap().unwrap();
//!     let outcome = SimulatedValidator::seeded(1, 0.7)
//!         .validate(DocumentType::Passport, &photo)
//!         .await;
//!     println!("verified: {}", outcome.is_verified());
//! }
//! ```

pub mod error;
pub mod source;
pub mod traits;
pub mod validator;

pub use error::{PortError, Result};
pub use source::{CameraCapture, FixedFileSource, PathFileSource};
pub use traits::{FileSource, Validator};
pub use validator::{demo_fields, ScriptedValidator, SimulatedValidator, REJECTION_MESSAGE};
