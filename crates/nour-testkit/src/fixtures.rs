//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use nour::{Action, App, AppConfig, Result, Screen};
use nour_core::FileBlob;
use nour_flows::SignInEvent;
use nour_ports::{CameraCapture, FixedFileSource, ScriptedValidator};

/// A scanned passport, as a file picker would return it.
pub fn passport_scan() -> FileBlob {
    FileBlob::new(&b"%PDF-1.7 passport scan"[..], "passport.pdf", "application/pdf")
}

/// An app wired to deterministic capabilities.
///
/// The fixture keeps its own handles on the validator and the picker so a
/// test can count calls after the app consumed them.
pub struct TestFixture {
    pub config: AppConfig,
    pub validator: Arc<ScriptedValidator>,
    pub files: Arc<FixedFileSource>,
}

impl TestFixture {
    /// Every document verifies; the picker returns [`passport_scan`].
    pub fn new() -> Self {
        Self::with_verdicts([true])
    }

    /// Validator verdicts in order, repeating once exhausted.
    pub fn with_verdicts(verdicts: impl IntoIterator<Item = bool>) -> Self {
        Self {
            config: AppConfig::default(),
            validator: Arc::new(ScriptedValidator::new(verdicts)),
            files: Arc::new(FixedFileSource::new(passport_scan())),
        }
    }

    /// Replace the picker with one that is always dismissed.
    pub fn with_cancelled_picker(mut self) -> Self {
        self.files = Arc::new(FixedFileSource::cancelled());
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// A fresh, signed-out app.
    pub fn app(&self) -> Result<App> {
        App::builder(self.config.clone())
            .validator(Arc::clone(&self.validator))
            .file_source(Arc::clone(&self.files))
            .camera(CameraCapture::new())
            .build()
    }

    /// An app already past the auth gate, showing the dashboard.
    pub async fn signed_in_app(&self) -> Result<App> {
        let mut app = self.app()?;
        app.navigate(Screen::SignIn).await?;
        app.dispatch(Action::SignIn(SignInEvent::Biometric)).await?;
        Ok(app)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
