//! Document upload flow.
//!
//! ```text
//! Select ──FileSelected──▶ Validating ──ValidationFinished──▶ Success | Error
//!   ▲                                                            │
//!   └────────────────── Reset / Retake / SaveToWallet ───────────┘
//! ```
//!
//! A document type must be chosen before a file can be requested. The
//! validation itself is not run here: the flow schedules a delay, asks the
//! shell to validate when the delay fires, and records whatever comes back.

use std::time::Duration;

use nour_core::catalog::CAPTURE_HINTS;
use nour_core::{DocumentType, ExtractedFields, FileBlob, ValidationChecks, ValidationOutcome};
use tracing::{debug, info};

use crate::command::{CaptureSource, Command, TimerKey};

/// Default validation delay.
pub const VALIDATION_DELAY: Duration = Duration::from_millis(2000);

/// Where the flow stands. Success and error are separate variants, so at
/// most one of them can ever be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStage {
    Select,
    Validating {
        file: FileBlob,
    },
    Success {
        file: FileBlob,
        fields: ExtractedFields,
        checks: ValidationChecks,
    },
    Error {
        file: FileBlob,
        message: String,
        checks: ValidationChecks,
    },
}

impl UploadStage {
    pub fn name(&self) -> &'static str {
        match self {
            UploadStage::Select => "select",
            UploadStage::Validating { .. } => "validating",
            UploadStage::Success { .. } => "success",
            UploadStage::Error { .. } => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStage::Success { .. } | UploadStage::Error { .. })
    }

    /// The file being validated or already judged.
    pub fn file(&self) -> Option<&FileBlob> {
        match self {
            UploadStage::Select => None,
            UploadStage::Validating { file }
            | UploadStage::Success { file, .. }
            | UploadStage::Error { file, .. } => Some(file),
        }
    }

    pub fn checks(&self) -> Option<&ValidationChecks> {
        match self {
            UploadStage::Success { checks, .. } | UploadStage::Error { checks, .. } => Some(checks),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    ChooseType(DocumentType),
    /// "Choose File".
    ChooseFile,
    /// "Take Photo".
    TakePhoto,
    /// A file source produced a file.
    FileSelected(FileBlob),
    /// A file source was dismissed without a file.
    SelectionCancelled,
    /// The validation delay elapsed.
    ValidationDue,
    ValidationFinished(ValidationOutcome),
    /// "Upload Another" / "Try Different Document".
    Reset,
    /// "Retake Photo".
    Retake,
    SaveToWallet,
}

#[derive(Debug, Clone)]
pub struct UploadFlow {
    delay: Duration,
    kind: Option<DocumentType>,
    stage: UploadStage,
}

impl UploadFlow {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            kind: None,
            stage: UploadStage::Select,
        }
    }

    pub fn stage(&self) -> &UploadStage {
        &self.stage
    }

    pub fn document_type(&self) -> Option<DocumentType> {
        self.kind
    }

    /// Tips shown under the camera button.
    pub fn capture_hints(&self) -> &'static [&'static str] {
        &CAPTURE_HINTS
    }

    /// File requests are accepted only in `Select` with a type chosen.
    pub fn can_select_file(&self) -> bool {
        self.kind.is_some() && self.stage == UploadStage::Select
    }

    pub fn apply(&mut self, event: UploadEvent) -> Vec<Command> {
        match event {
            UploadEvent::ChooseType(kind) => {
                // The type stays bound to the file until the flow is back in Select.
                if self.stage == UploadStage::Select {
                    self.kind = Some(kind);
                }
                Vec::new()
            }
            UploadEvent::ChooseFile => self.request_file(CaptureSource::Picker),
            UploadEvent::TakePhoto => self.request_file(CaptureSource::Camera),
            UploadEvent::FileSelected(file) => {
                if !self.can_select_file() {
                    debug!(stage = self.stage.name(), "file ignored outside select");
                    return Vec::new();
                }
                info!(
                    filename = %file.filename,
                    fingerprint = %file.fingerprint(),
                    len = file.len(),
                    "upload validating"
                );
                self.stage = UploadStage::Validating { file };
                vec![Command::Schedule {
                    key: TimerKey::UploadValidation,
                    after: self.delay,
                }]
            }
            UploadEvent::SelectionCancelled => Vec::new(),
            UploadEvent::ValidationDue => match (&self.stage, self.kind) {
                (UploadStage::Validating { file }, Some(kind)) => vec![Command::Validate {
                    kind,
                    file: file.clone(),
                }],
                _ => Vec::new(),
            },
            UploadEvent::ValidationFinished(outcome) => {
                let file = match &self.stage {
                    UploadStage::Validating { file } => file.clone(),
                    other => {
                        debug!(stage = other.name(), "stale validation result dropped");
                        return Vec::new();
                    }
                };
                // The stage fixes the check pattern, whatever the validator reported.
                self.stage = match outcome {
                    ValidationOutcome::Verified { fields, .. } => UploadStage::Success {
                        file,
                        fields,
                        checks: ValidationChecks::all_passed(),
                    },
                    ValidationOutcome::Rejected { message, .. } => UploadStage::Error {
                        file,
                        message,
                        checks: ValidationChecks::unreadable(),
                    },
                };
                info!(stage = self.stage.name(), "upload finished");
                Vec::new()
            }
            UploadEvent::Reset => {
                if self.stage.is_terminal() {
                    self.stage = UploadStage::Select;
                }
                Vec::new()
            }
            UploadEvent::Retake => {
                if matches!(self.stage, UploadStage::Error { .. }) {
                    self.stage = UploadStage::Select;
                }
                Vec::new()
            }
            UploadEvent::SaveToWallet => {
                let stage = std::mem::replace(&mut self.stage, UploadStage::Select);
                match (stage, self.kind) {
                    (UploadStage::Success { file, fields, .. }, Some(kind)) => vec![Command::SaveDocument {
                        kind,
                        fields,
                        source: file.fingerprint(),
                    }],
                    (stage, _) => {
                        self.stage = stage;
                        Vec::new()
                    }
                }
            }
        }
    }

    fn request_file(&self, source: CaptureSource) -> Vec<Command> {
        if self.can_select_file() {
            vec![Command::SelectFile(source)]
        } else {
            Vec::new()
        }
    }
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self::new(VALIDATION_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob() -> FileBlob {
        FileBlob::new(&b"mock-image-data"[..], "camera-photo.jpg", "image/jpeg")
    }

    fn fields() -> ExtractedFields {
        ExtractedFields {
            document_number: "AB1234567".into(),
            name: "John Doe".into(),
            date_of_birth: "1990-05-15".into(),
            expiry_date: "2030-10-15".into(),
        }
    }

    fn validating() -> UploadFlow {
        let mut flow = UploadFlow::default();
        flow.apply(UploadEvent::ChooseType(DocumentType::Passport));
        flow.apply(UploadEvent::FileSelected(blob()));
        flow
    }

    #[test]
    fn test_file_requires_type() {
        let mut flow = UploadFlow::default();
        assert!(flow.apply(UploadEvent::ChooseFile).is_empty());
        assert!(flow.apply(UploadEvent::FileSelected(blob())).is_empty());
        assert_eq!(flow.stage(), &UploadStage::Select);

        flow.apply(UploadEvent::ChooseType(DocumentType::Visa));
        assert_eq!(
            flow.apply(UploadEvent::TakePhoto),
            vec![Command::SelectFile(CaptureSource::Camera)]
        );
    }

    #[test]
    fn test_file_selected_schedules_validation() {
        let mut flow = UploadFlow::new(Duration::from_millis(2000));
        flow.apply(UploadEvent::ChooseType(DocumentType::Passport));
        let cmds = flow.apply(UploadEvent::FileSelected(blob()));
        assert_eq!(
            cmds,
            vec![Command::Schedule {
                key: TimerKey::UploadValidation,
                after: Duration::from_millis(2000),
            }]
        );
        assert_eq!(flow.stage().name(), "validating");
    }

    #[test]
    fn test_cancelled_pick_stays_in_select() {
        let mut flow = UploadFlow::default();
        flow.apply(UploadEvent::ChooseType(DocumentType::Tax));
        flow.apply(UploadEvent::ChooseFile);
        flow.apply(UploadEvent::SelectionCancelled);
        assert_eq!(flow.stage(), &UploadStage::Select);
        assert_eq!(flow.document_type(), Some(DocumentType::Tax));
    }

    #[test]
    fn test_outcome_checks_follow_the_stage() {
        let mut flow = validating();
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::Verified {
            fields: fields(),
            checks: ValidationChecks::unreadable(),
        }));
        assert_eq!(flow.stage().checks(), Some(&ValidationChecks::all_passed()));

        let mut flow = validating();
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::Rejected {
            message: "bad".into(),
            checks: ValidationChecks::all_passed(),
        }));
        assert!(matches!(flow.stage(), UploadStage::Error { .. }));
        assert_eq!(flow.stage().checks(), Some(&ValidationChecks::unreadable()));
    }

    #[test]
    fn test_due_asks_for_validation() {
        let mut flow = validating();
        let cmds = flow.apply(UploadEvent::ValidationDue);
        assert_eq!(
            cmds,
            vec![Command::Validate {
                kind: DocumentType::Passport,
                file: blob(),
            }]
        );
    }

    #[test]
    fn test_success_then_reset() {
        let mut flow = validating();
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::verified(fields())));
        assert!(matches!(flow.stage(), UploadStage::Success { .. }));
        assert!(flow.stage().checks().unwrap().passed());

        flow.apply(UploadEvent::Reset);
        assert_eq!(flow.stage(), &UploadStage::Select);
        assert!(flow.stage().checks().is_none());
        assert_eq!(flow.document_type(), Some(DocumentType::Passport));
    }

    #[test]
    fn test_error_then_retake() {
        let mut flow = validating();
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::rejected("blurry")));
        match flow.stage() {
            UploadStage::Error { message, checks, .. } => {
                assert_eq!(message, "blurry");
                assert!(!checks.readability);
            }
            other => panic!("expected error, got {}", other.name()),
        }
        flow.apply(UploadEvent::Retake);
        assert_eq!(flow.stage(), &UploadStage::Select);
    }

    #[test]
    fn test_retake_only_from_error() {
        let mut flow = validating();
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::verified(fields())));
        flow.apply(UploadEvent::Retake);
        assert!(matches!(flow.stage(), UploadStage::Success { .. }));
    }

    #[test]
    fn test_stale_result_ignored() {
        let mut flow = UploadFlow::default();
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::verified(fields())));
        assert_eq!(flow.stage(), &UploadStage::Select);

        let mut flow = validating();
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::rejected("blurry")));
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::verified(fields())));
        assert!(matches!(flow.stage(), UploadStage::Error { .. }));
    }

    #[test]
    fn test_save_to_wallet() {
        let mut flow = validating();
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::verified(fields())));
        let cmds = flow.apply(UploadEvent::SaveToWallet);
        assert_eq!(
            cmds,
            vec![Command::SaveDocument {
                kind: DocumentType::Passport,
                fields: fields(),
                source: blob().fingerprint(),
            }]
        );
        assert_eq!(flow.stage(), &UploadStage::Select);
    }

    #[test]
    fn test_save_ignored_after_error() {
        let mut flow = validating();
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::rejected("blurry")));
        assert!(flow.apply(UploadEvent::SaveToWallet).is_empty());
        assert!(matches!(flow.stage(), UploadStage::Error { .. }));
    }

    #[test]
    fn test_type_locked_while_validating() {
        let mut flow = validating();
        flow.apply(UploadEvent::ChooseType(DocumentType::Salary));
        assert_eq!(flow.document_type(), Some(DocumentType::Passport));
    }

    #[test]
    fn test_type_locked_until_back_in_select() {
        let mut flow = validating();
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::verified(fields())));
        flow.apply(UploadEvent::ChooseType(DocumentType::Visa));
        assert_eq!(flow.document_type(), Some(DocumentType::Passport));

        let mut flow = validating();
        flow.apply(UploadEvent::ValidationFinished(ValidationOutcome::rejected("blurry")));
        flow.apply(UploadEvent::ChooseType(DocumentType::Visa));
        assert_eq!(flow.document_type(), Some(DocumentType::Passport));

        flow.apply(UploadEvent::Retake);
        assert_eq!(flow.document_type(), Some(DocumentType::Passport));
        flow.apply(UploadEvent::ChooseType(DocumentType::Visa));
        assert_eq!(flow.document_type(), Some(DocumentType::Visa));
    }
}
