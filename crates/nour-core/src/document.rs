//! Documents: the credentials held in the wallet and requested by banks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::{DocumentId, FileFingerprint};

/// Verification status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    NotStarted,
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub const fn tag(self) -> &'static str {
        match self {
            VerificationStatus::NotStarted => "not_started",
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }

    /// Label shown next to the document.
    pub const fn label(self) -> &'static str {
        match self {
            VerificationStatus::NotStarted => "Not Started",
            VerificationStatus::Pending => "Under Review",
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A document type that can be uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Passport,
    NationalId,
    Visa,
    Address,
    Employment,
    Salary,
    Tax,
}

impl DocumentType {
    /// Upload choices in display order.
    pub const ALL: [DocumentType; 7] = [
        DocumentType::Passport,
        DocumentType::NationalId,
        DocumentType::Visa,
        DocumentType::Address,
        DocumentType::Employment,
        DocumentType::Salary,
        DocumentType::Tax,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            DocumentType::Passport => "passport",
            DocumentType::NationalId => "national_id",
            DocumentType::Visa => "visa",
            DocumentType::Address => "address",
            DocumentType::Employment => "employment",
            DocumentType::Salary => "salary",
            DocumentType::Tax => "tax",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DocumentType::Passport => "Passport",
            DocumentType::NationalId => "National ID",
            DocumentType::Visa => "Visa Document",
            DocumentType::Address => "Proof of Address",
            DocumentType::Employment => "Employment Certificate",
            DocumentType::Salary => "Salary Proof",
            DocumentType::Tax => "Tax ID",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            DocumentType::Passport => "🛂",
            DocumentType::NationalId => "🪪",
            DocumentType::Visa => "✈️",
            DocumentType::Address => "🏠",
            DocumentType::Employment => "💼",
            DocumentType::Salary => "💰",
            DocumentType::Tax => "📋",
        }
    }

    /// Wallet category a document of this type is filed under.
    pub const fn wallet_category(self) -> &'static str {
        match self {
            DocumentType::Passport | DocumentType::NationalId => "identification",
            DocumentType::Visa | DocumentType::Address => "residence",
            DocumentType::Employment => "employment",
            DocumentType::Salary | DocumentType::Tax => "financial",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DocumentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| CoreError::UnknownDocumentType(s.to_string()))
    }
}

/// A document held in (or destined for) the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    /// Display name ("Passport", "Tenancy Contract", ...).
    pub name: String,
    /// Category tag ("identification", "residence", ...).
    pub category: String,
    pub status: VerificationStatus,
    /// Issuer label ("UAE Ministry of Interior").
    pub issuer: String,
    /// Expiry date as `YYYY-MM-DD`, if the document expires.
    pub expiry: Option<String>,
    pub icon: String,
    /// Fingerprint of the uploaded file, for documents saved from an upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<FileFingerprint>,
}

impl Document {
    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }
}
