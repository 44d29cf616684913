//! # Nour Flows
//!
//! Per-screen state machines and view models for the Nour identity wallet.
//!
//! ## Overview
//!
//! Every screen is a plain struct. Interactive screens expose
//! `apply(event) -> Vec<Command>`: the event mutates the screen's own state
//! and the returned [`Command`]s describe effects (navigation, timers,
//! capability calls) for the shell to carry out. Nothing here sleeps, reads
//! files or rolls dice, which keeps every transition unit-testable.
//!
//! ## Screens
//!
//! - [`SignUpFlow`], [`SignInFlow`] - Authentication wizards
//! - [`UploadFlow`] - Select, validate, succeed or fail
//! - [`ShareFlow`] - Bank search, buckets, per-bank document progress
//! - [`WalletFlow`] - PIN gate over the document wallet
//! - [`HelpFlow`], [`ChecklistFlow`] - FAQ search and document checklist
//! - [`EnbdFlow`], [`TransferFlow`] - Timed sequences
//! - [`ComplianceFlow`] and the [`overview`] screens - Fixture views

pub mod checklist;
pub mod command;
pub mod compliance;
pub mod enbd;
pub mod help;
pub mod overview;
pub mod share;
pub mod signin;
pub mod signup;
pub mod transfer;
pub mod upload;
pub mod wallet;

pub use checklist::{ChecklistEvent, ChecklistFlow};
pub use command::{CaptureSource, Command, TimerKey};
pub use compliance::{ComplianceEvent, ComplianceFlow};
pub use enbd::{EnbdEvent, EnbdFlow};
pub use help::{HelpEvent, HelpFlow};
pub use overview::{
    AccountOverview, AdminOverview, Dashboard, DashboardEvent, HomeEvent, HomeOverview, ProgressOverview,
    SecurityOverview,
};
pub use share::{BankDetail, Bucket, Partition, ShareEvent, ShareFlow};
pub use signin::{SignInEvent, SignInFlow};
pub use signup::{ProfileField, SignUpEvent, SignUpFlow, SignUpStep, TwoFactorMethod};
pub use transfer::{Quote, TransferEvent, TransferFlow, TransferSettings};
pub use upload::{UploadEvent, UploadFlow, UploadStage};
pub use wallet::{WalletEvent, WalletFlow, WalletTotals};
