//! The file blob handed over by a file picker or camera capture.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::types::FileFingerprint;

/// A user-supplied binary blob with its filename and MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileBlob {
    pub bytes: Bytes,
    pub filename: String,
    pub mime_type: String,
}

impl FileBlob {
    pub fn new(bytes: impl Into<Bytes>, filename: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Content fingerprint of the blob.
    pub fn fingerprint(&self) -> FileFingerprint {
        FileFingerprint::compute(&self.bytes)
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the MIME type is an image type (`image/*`).
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Guess a MIME type from a filename extension.
///
/// Covers the formats the help center lists as supported (JPG, PNG, PDF)
/// plus a few common image types; anything else is `application/octet-stream`.
pub fn mime_from_filename(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
