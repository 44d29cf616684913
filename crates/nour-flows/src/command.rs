//! Effects a screen asks the shell to perform.
//!
//! Screens are pure: applying an event mutates the screen's own state and
//! returns a list of [`Command`]s. The shell executes them (navigation,
//! timers, capability calls) and feeds results back as events.

use std::time::Duration;

use nour_core::{DocumentType, ExtractedFields, FileBlob, FileFingerprint, Screen};
use serde::Serialize;

/// Identifies a timer within the screen that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimerKey {
    /// The upload validation delay.
    UploadValidation,
    /// Completion of the ENBD step with this zero-based index.
    EnbdStep(u8),
    /// One stage advance of a running transfer.
    TransferTick,
}

/// Where a file request goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureSource {
    /// The device file picker.
    Picker,
    /// The camera.
    Camera,
}

/// An effect requested by a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Ask the shell to show another screen (subject to the auth gate).
    Navigate(Screen),
    /// Mark the session signed in and show the dashboard.
    Authenticate,
    /// Deliver `key` back to this screen after `after`.
    Schedule { key: TimerKey, after: Duration },
    /// Open a file source; the result comes back as a selection event.
    SelectFile(CaptureSource),
    /// Run the validator; the outcome comes back as a validation event.
    Validate { kind: DocumentType, file: FileBlob },
    /// Append a validated upload to the session's wallet.
    SaveDocument {
        kind: DocumentType,
        fields: ExtractedFields,
        source: FileFingerprint,
    },
}
