//! Share-credentials browser.
//!
//! Filters the bank catalog by a search query, buckets the matches by the
//! user's relationship with each bank, and expands one bank at a time to
//! show which required documents have been handed over.

use nour_core::catalog::{self, BANKS};
use nour_core::search::any_contains;
use nour_core::{required_documents, Bank, BankApplication, BankId, DocumentMark, Membership, Screen};
use serde::Serialize;

use crate::command::Command;

/// Display bucket of a bank. A function of the bank's membership only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Active,
    InProgress,
    Available,
}

impl Bucket {
    pub fn of(bank: &Bank) -> Self {
        match bank.membership {
            Some(Membership::Existing) => Bucket::Active,
            Some(Membership::Preparing) => Bucket::InProgress,
            None => Bucket::Available,
        }
    }
}

/// Filtered banks split into buckets, each in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub active: Vec<&'static Bank>,
    pub in_progress: Vec<&'static Bank>,
    pub available: Vec<&'static Bank>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.active.len() + self.in_progress.len() + self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-bank breakdown shown when a bank is expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankDetail {
    pub bank: &'static Bank,
    pub application: Option<&'static BankApplication>,
    pub documents: Vec<(&'static str, DocumentMark)>,
    /// Submitted share of required documents, when an application exists.
    pub progress_percent: Option<f64>,
}

impl BankDetail {
    pub fn for_bank(bank: &'static Bank) -> Self {
        let application = catalog::application(bank.id);
        let documents = required_documents(bank.id)
            .into_iter()
            .map(|doc| {
                let mark = application.map_or(DocumentMark::NotRequested, |app| app.mark(doc));
                (doc, mark)
            })
            .collect();
        Self {
            bank,
            application,
            documents,
            progress_percent: application.map(BankApplication::progress_percent),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareEvent {
    SetQuery(String),
    /// Expand a bank, or collapse it if it is already expanded.
    Toggle(BankId),
    /// "Upload Remaining Documents" on an application card.
    UploadRemaining(BankId),
    /// "Start Application" on an available bank.
    StartApplication(BankId),
}

#[derive(Debug, Clone, Default)]
pub struct ShareFlow {
    query: String,
    expanded: Option<BankId>,
}

impl ShareFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn expanded(&self) -> Option<BankId> {
        self.expanded
    }

    /// Banks whose name or country glyph contains the query.
    pub fn filtered(&self) -> Vec<&'static Bank> {
        filter_banks(&self.query)
    }

    pub fn partition(&self) -> Partition {
        partition(self.filtered())
    }

    pub fn expanded_detail(&self) -> Option<BankDetail> {
        self.expanded
            .and_then(|id| catalog::bank(id.as_str()))
            .map(BankDetail::for_bank)
    }

    pub fn apply(&mut self, event: ShareEvent) -> Vec<Command> {
        match event {
            ShareEvent::SetQuery(query) => self.query = query,
            ShareEvent::Toggle(id) => {
                self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
            }
            ShareEvent::UploadRemaining(id) => {
                if catalog::application(id).is_some_and(BankApplication::has_remaining) {
                    return vec![Command::Navigate(Screen::Upload)];
                }
            }
            ShareEvent::StartApplication(id) => {
                let available = catalog::bank(id.as_str()).is_some_and(|b| b.membership.is_none());
                if available {
                    return vec![Command::Navigate(Screen::Upload)];
                }
            }
        }
        Vec::new()
    }
}

pub fn filter_banks(query: &str) -> Vec<&'static Bank> {
    BANKS
        .iter()
        .filter(|bank| any_contains([bank.name, bank.country], query))
        .collect()
}

pub fn partition(banks: impl IntoIterator<Item = &'static Bank>) -> Partition {
    let mut out = Partition::default();
    for bank in banks {
        match Bucket::of(bank) {
            Bucket::Active => out.active.push(bank),
            Bucket::InProgress => out.in_progress.push(bank),
            Bucket::Available => out.available.push(bank),
        }
    }
    out
}
