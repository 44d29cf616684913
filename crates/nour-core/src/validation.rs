//! Document validation results.
//!
//! A validation produces exactly one of two outcomes:
//!
//! - **Verified**: extracted fields plus four checks, all passed
//! - **Rejected**: a human-readable message plus the same four checks,
//!   with `readability` failed
//!
//! Use [`ValidationOutcome::verified`] and [`ValidationOutcome::rejected`]
//! to build outcomes with the check pattern of each variant. The upload
//! flow applies the same pattern to whatever a validator returns.

use serde::{Deserialize, Serialize};

/// The four sub-checks of a document validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationChecks {
    pub expiry: bool,
    pub format: bool,
    pub authenticity: bool,
    pub readability: bool,
}

impl ValidationChecks {
    /// All four checks passed.
    pub const fn all_passed() -> Self {
        Self {
            expiry: true,
            format: true,
            authenticity: true,
            readability: true,
        }
    }

    /// Everything passed except readability.
    pub const fn unreadable() -> Self {
        Self {
            readability: false,
            ..Self::all_passed()
        }
    }

    /// Checks as `(name, passed)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, bool); 4] {
        [
            ("expiry", self.expiry),
            ("format", self.format),
            ("authenticity", self.authenticity),
            ("readability", self.readability),
        ]
    }

    pub fn passed(&self) -> bool {
        self.expiry && self.format && self.authenticity && self.readability
    }
}

/// Fields read off a validated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub document_number: String,
    pub name: String,
    pub date_of_birth: String,
    pub expiry_date: String,
}

/// Result of validating one uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Verified {
        fields: ExtractedFields,
        checks: ValidationChecks,
    },
    Rejected {
        message: String,
        checks: ValidationChecks,
    },
}

impl ValidationOutcome {
    pub fn verified(fields: ExtractedFields) -> Self {
        ValidationOutcome::Verified {
            fields,
            checks: ValidationChecks::all_passed(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        ValidationOutcome::Rejected {
            message: message.into(),
            checks: ValidationChecks::unreadable(),
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, ValidationOutcome::Verified { .. })
    }

    pub fn checks(&self) -> &ValidationChecks {
        match self {
            ValidationOutcome::Verified { checks, .. } | ValidationOutcome::Rejected { checks, .. } => {
                checks
            }
        }
    }

    pub fn fields(&self) -> Option<&ExtractedFields> {
        match self {
            ValidationOutcome::Verified { fields, .. } => Some(fields),
            ValidationOutcome::Rejected { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Verified { .. } => None,
            ValidationOutcome::Rejected { message, .. } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ExtractedFields {
        ExtractedFields {
            document_number: "AB1234567".into(),
            name: "John Doe".into(),
            date_of_birth: "1990-05-15".into(),
            expiry_date: "2030-10-15".into(),
        }
    }

    #[test]
    fn test_verified_has_all_checks() {
        let outcome = ValidationOutcome::verified(fields());
        assert!(outcome.is_verified());
        assert!(outcome.checks().passed());
        assert_eq!(outcome.fields().unwrap().name, "John Doe");
        assert!(outcome.message().is_none());
    }

    #[test]
    fn test_rejected_fails_readability_only() {
        let outcome = ValidationOutcome::rejected("Document image is blurry or unclear");
        let checks = outcome.checks();
        assert!(!checks.readability);
        assert!(checks.expiry && checks.format && checks.authenticity);
        assert_eq!(outcome.message(), Some("Document image is blurry or unclear"));
        assert!(outcome.fields().is_none());
    }

    #[test]
    fn test_check_entries_order() {
        let names: Vec<_> = ValidationChecks::all_passed()
            .entries()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(names, ["expiry", "format", "authenticity", "readability"]);
    }

    #[test]
    fn test_outcome_serde_tag() {
        let json = serde_json::to_value(ValidationOutcome::rejected("blurry")).unwrap();
        assert_eq!(json["outcome"], "rejected");
        assert_eq!(json["checks"]["readability"], false);
    }
}
