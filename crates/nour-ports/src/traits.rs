//! Capability traits: the two external contracts the wallet depends on.
//!
//! The application core never reads files or judges documents itself. A
//! front-end (or a test) hands it implementations of these traits.

use async_trait::async_trait;
use nour_core::{DocumentType, FileBlob, ValidationOutcome};

use crate::error::Result;

/// Something that produces a file on request: a file picker, a camera.
#[async_trait]
pub trait FileSource: Send + Sync {
    /// Ask for one file.
    ///
    /// # Returns
    /// - `Ok(Some(blob))` when the user picked or captured something.
    /// - `Ok(None)` when the user cancelled.
    /// - `Err` only when the capability itself failed.
    async fn select_file(&self) -> Result<Option<FileBlob>>;
}

/// Something that judges an uploaded document.
///
/// Validation cannot fail: a document that can't be read is a
/// [`ValidationOutcome::Rejected`], not an error.
#[async_trait]
pub trait Validator: Send + Sync {
    async fn validate(&self, kind: DocumentType, file: &FileBlob) -> ValidationOutcome;
}

#[async_trait]
impl<T: FileSource + ?Sized> FileSource for std::sync::Arc<T> {
    async fn select_file(&self) -> Result<Option<FileBlob>> {
        (**self).select_file().await
    }
}

#[async_trait]
impl<T: Validator + ?Sized> Validator for std::sync::Arc<T> {
    async fn validate(&self, kind: DocumentType, file: &FileBlob) -> ValidationOutcome {
        (**self).validate(kind, file).await
    }
}
