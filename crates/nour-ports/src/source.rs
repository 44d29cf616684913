//! File source implementations.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use nour_core::{mime_from_filename, FileBlob};
use tracing::debug;

use crate::error::{PortError, Result};
use crate::traits::FileSource;

/// A picker that always returns the same blob, or always reports a cancel.
pub struct FixedFileSource {
    blob: Option<FileBlob>,
    picks: AtomicUsize,
}

impl FixedFileSource {
    pub fn new(blob: FileBlob) -> Self {
        Self {
            blob: Some(blob),
            picks: AtomicUsize::new(0),
        }
    }

    /// A picker whose user always backs out.
    pub fn cancelled() -> Self {
        Self {
            blob: None,
            picks: AtomicUsize::new(0),
        }
    }

    /// Number of times the picker was opened.
    pub fn picks(&self) -> usize {
        self.picks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileSource for FixedFileSource {
    async fn select_file(&self) -> Result<Option<FileBlob>> {
        self.picks.fetch_add(1, Ordering::SeqCst);
        Ok(self.blob.clone())
    }
}

/// Mock camera. Every capture is the same small JPEG placeholder.
#[derive(Debug, Clone)]
pub struct CameraCapture {
    attached: bool,
}

impl CameraCapture {
    pub const FILENAME: &'static str = "camera-photo.jpg";
    pub const MIME_TYPE: &'static str = "image/jpeg";
    pub const PAYLOAD: &'static [u8] = b"mock-image-data";

    pub fn new() -> Self {
        Self { attached: true }
    }

    /// A device without a camera. Captures fail with
    /// [`PortError::Unavailable`].
    pub fn detached() -> Self {
        Self { attached: false }
    }
}

impl Default for CameraCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileSource for CameraCapture {
    async fn select_file(&self) -> Result<Option<FileBlob>> {
        if !self.attached {
            return Err(PortError::Unavailable("no camera attached".to_string()));
        }
        Ok(Some(FileBlob::new(
            Bytes::from_static(Self::PAYLOAD),
            Self::FILENAME,
            Self::MIME_TYPE,
        )))
    }
}

/// A picker backed by a path on disk, as a desktop shell or CLI would pass.
#[derive(Debug, Clone)]
pub struct PathFileSource {
    path: PathBuf,
}

impl PathFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FileSource for PathFileSource {
    async fn select_file(&self) -> Result<Option<FileBlob>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let filename = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_from_filename(&filename);
        debug!(path = %self.path.display(), len = bytes.len(), mime_type, "read picked file");
        Ok(Some(FileBlob::new(bytes, filename, mime_type)))
    }
}
