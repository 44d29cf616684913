//! # Nour Core
//!
//! Pure model for the Nour identity wallet: screens, documents, banks,
//! validation outcomes and the fixture catalog every screen presents.
//!
//! This crate contains no I/O, no timers, no randomness. It is plain data
//! plus the lookups and derived values computed over it.
//!
//! ## Key Types
//!
//! - [`Screen`] - The closed set of navigable views
//! - [`Document`] - A credential held in the wallet
//! - [`Bank`] / [`BankApplication`] - Share-credentials targets
//! - [`ValidationOutcome`] - Verified or rejected, never both
//! - [`FileBlob`] - Bytes handed over by a picker or camera
//!
//! ## Fixtures
//!
//! All demo data lives in [`catalog`].

pub mod bank;
pub mod catalog;
pub mod document;
pub mod error;
pub mod file;
pub mod screen;
pub mod search;
pub mod types;
pub mod validation;

pub use bank::{required_documents, ApplicationTone, Bank, BankApplication, DocumentMark, Membership};
pub use catalog::{Language, Residency};
pub use document::{Document, DocumentType, VerificationStatus};
pub use error::{CoreError, Result};
pub use file::{mime_from_filename, FileBlob};
pub use screen::{bottom_nav, NavItem, NavTab, Screen};
pub use types::{BankId, DocumentId, FileFingerprint};
pub use validation::{ExtractedFields, ValidationChecks, ValidationOutcome};
