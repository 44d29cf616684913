//! Error types for the Nour core model.

use thiserror::Error;

/// Errors raised while interpreting tags and identifiers coming from outside
/// the crate (front-end input, config files).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown screen tag: {0}")]
    UnknownScreen(String),

    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),

    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("unknown bank id: {0}")]
    UnknownBank(String),

    #[error("unknown residency profile: {0}")]
    UnknownProfile(String),

    #[error("unknown country code: {0}")]
    UnknownCountry(String),

    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("invalid fingerprint: {0}")]
    InvalidFingerprint(String),
}

/// Result type for core parsing operations.
pub type Result<T> = std::result::Result<T, CoreError>;
