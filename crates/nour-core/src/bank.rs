//! Banks and bank applications for credential sharing.

use serde::Serialize;

use crate::catalog;
use crate::types::BankId;

/// Relationship the user already has with a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    /// An account is open or an application has been submitted.
    Existing,
    /// An application is being prepared.
    Preparing,
}

/// A bank the user can share credentials with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bank {
    pub id: BankId,
    pub name: &'static str,
    /// Country flag glyph.
    pub country: &'static str,
    pub logo: &'static str,
    /// `None` when the user has no relationship with the bank yet.
    pub membership: Option<Membership>,
}

/// Display tone of an application card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationTone {
    Green,
    Yellow,
    Blue,
}

/// State of an application with a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BankApplication {
    pub bank: BankId,
    /// Status label ("In Review", "Approved", "Preparing").
    pub status: &'static str,
    pub submitted: &'static [&'static str],
    pub remaining: &'static [&'static str],
    pub last_update: &'static str,
    pub tone: ApplicationTone,
}

impl BankApplication {
    /// Submitted share of the bank's required documents, in percent.
    pub fn progress_percent(&self) -> f64 {
        let required = required_documents(self.bank);
        if required.is_empty() {
            return 0.0;
        }
        let submitted = required
            .iter()
            .filter(|doc| self.submitted.contains(*doc))
            .count();
        submitted as f64 / required.len() as f64 * 100.0
    }

    /// How a single required document stands in this application.
    pub fn mark(&self, document: &str) -> DocumentMark {
        if self.submitted.iter().any(|d| *d == document) {
            DocumentMark::Submitted
        } else if self.remaining.iter().any(|d| *d == document) {
            DocumentMark::Remaining
        } else {
            DocumentMark::NotRequested
        }
    }

    pub fn has_remaining(&self) -> bool {
        !self.remaining.is_empty()
    }
}

/// Standing of one required document against an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentMark {
    Submitted,
    Remaining,
    NotRequested,
}

/// Documents a bank requires: the common documents followed by the bank's
/// own requirements, without duplicates.
pub fn required_documents(bank: BankId) -> Vec<&'static str> {
    let mut docs: Vec<&'static str> = Vec::new();
    for doc in catalog::COMMON_DOCUMENTS
        .iter()
        .chain(catalog::bank_requirements(bank))
    {
        if !docs.contains(doc) {
            docs.push(*doc);
        }
    }
    docs
}
