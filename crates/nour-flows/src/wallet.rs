//! PIN-gated identity wallet.

use nour_core::catalog::{wallet_categories, WalletCategory};
use nour_core::{Document, DocumentId};
use serde::Serialize;
use tracing::{debug, info};

/// Length of a wallet PIN.
pub const PIN_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// Replace the PIN entry. Anything past four characters is dropped.
    EnterPin(String),
    Unlock,
    Lock,
    ToggleCategory(&'static str),
    ToggleDocument(DocumentId),
}

/// Header totals of the unlocked wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalletTotals {
    pub documents: usize,
    pub verified: usize,
    pub categories: usize,
}

#[derive(Debug, Clone)]
pub struct WalletFlow {
    pin: String,
    entry: String,
    unlocked: bool,
    failed_attempts: u32,
    categories: Vec<WalletCategory>,
    expanded: Option<&'static str>,
    selected: Option<DocumentId>,
}

impl WalletFlow {
    /// A locked wallet opened by `pin`. `session` documents are filed into
    /// their categories after the fixtures.
    pub fn new(pin: impl Into<String>, session: &[Document]) -> Self {
        let mut categories = wallet_categories();
        for doc in session {
            if let Some(category) = categories.iter_mut().find(|c| c.key == doc.category) {
                category.documents.push(doc.clone());
            }
        }
        Self {
            pin: pin.into(),
            entry: String::new(),
            unlocked: false,
            failed_attempts: 0,
            categories,
            expanded: None,
            selected: None,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Unlock is offered only for a full-length entry.
    pub fn can_unlock(&self) -> bool {
        self.entry.chars().count() == PIN_LENGTH
    }

    /// Categories, hidden while locked.
    pub fn categories(&self) -> Option<&[WalletCategory]> {
        self.unlocked.then_some(self.categories.as_slice())
    }

    pub fn expanded(&self) -> Option<&'static str> {
        self.expanded
    }

    pub fn selected(&self) -> Option<&Document> {
        let id = self.selected?;
        self.categories
            .iter()
            .flat_map(|c| &c.documents)
            .find(|d| d.id == id)
    }

    pub fn totals(&self) -> WalletTotals {
        let docs = self.categories.iter().flat_map(|c| &c.documents);
        WalletTotals {
            documents: docs.clone().count(),
            verified: docs.filter(|d| d.is_verified()).count(),
            categories: self.categories.len(),
        }
    }

    pub fn apply(&mut self, event: WalletEvent) {
        match event {
            WalletEvent::EnterPin(entry) => {
                self.entry = entry.chars().take(PIN_LENGTH).collect();
            }
            WalletEvent::Unlock => {
                if self.unlocked || !self.can_unlock() {
                    return;
                }
                if self.entry == self.pin {
                    info!("wallet unlocked");
                    self.unlocked = true;
                } else {
                    self.failed_attempts += 1;
                    debug!(attempts = self.failed_attempts, "wrong wallet pin");
                }
            }
            WalletEvent::Lock => {
                self.unlocked = false;
                self.entry.clear();
                self.expanded = None;
                self.selected = None;
            }
            WalletEvent::ToggleCategory(key) if self.unlocked => {
                self.expanded = if self.expanded == Some(key) { None } else { Some(key) };
            }
            WalletEvent::ToggleDocument(id) if self.unlocked => {
                self.selected = if self.selected == Some(id) { None } else { Some(id) };
            }
            WalletEvent::ToggleCategory(_) | WalletEvent::ToggleDocument(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nour_core::VerificationStatus;
    use proptest::prelude::*;

    fn unlocked() -> WalletFlow {
        let mut wallet = WalletFlow::new("1234", &[]);
        wallet.apply(WalletEvent::EnterPin("1234".into()));
        wallet.apply(WalletEvent::Unlock);
        wallet
    }

    #[test]
    fn test_correct_pin_unlocks() {
        let wallet = unlocked();
        assert!(wallet.is_unlocked());
        assert_eq!(
            wallet.totals(),
            WalletTotals { documents: 16, verified: 16, categories: 6 }
        );
    }

    #[test]
    fn test_entry_truncated() {
        let mut wallet = WalletFlow::new("1234", &[]);
        wallet.apply(WalletEvent::EnterPin("123456".into()));
        assert_eq!(wallet.entry(), "1234");
        wallet.apply(WalletEvent::Unlock);
        assert!(wallet.is_unlocked());
    }

    #[test]
    fn test_short_entry_cannot_unlock() {
        let mut wallet = WalletFlow::new("1234", &[]);
        wallet.apply(WalletEvent::EnterPin("123".into()));
        assert!(!wallet.can_unlock());
        wallet.apply(WalletEvent::Unlock);
        assert!(!wallet.is_unlocked());
        assert_eq!(wallet.failed_attempts(), 0);
        assert!(wallet.categories().is_none());
    }

    #[test]
    fn test_lock_clears_entry() {
        let mut wallet = unlocked();
        wallet.apply(WalletEvent::ToggleCategory("financial"));
        wallet.apply(WalletEvent::Lock);
        assert!(!wallet.is_unlocked());
        assert_eq!(wallet.entry(), "");
        assert_eq!(wallet.expanded(), None);
    }

    #[test]
    fn test_category_and_document_toggles() {
        let mut wallet = unlocked();
        wallet.apply(WalletEvent::ToggleCategory("identification"));
        wallet.apply(WalletEvent::ToggleCategory("residence"));
        assert_eq!(wallet.expanded(), Some("residence"));
        wallet.apply(WalletEvent::ToggleDocument(DocumentId(5)));
        assert_eq!(wallet.selected().unwrap().name, "Proof of Address");
        wallet.apply(WalletEvent::ToggleDocument(DocumentId(5)));
        assert!(wallet.selected().is_none());
    }

    #[test]
    fn test_toggles_ignored_while_locked() {
        let mut wallet = WalletFlow::new("1234", &[]);
        wallet.apply(WalletEvent::ToggleCategory("identification"));
        assert_eq!(wallet.expanded(), None);
    }

    #[test]
    fn test_session_documents_are_filed() {
        let doc = Document {
            id: DocumentId(17),
            name: "Tax ID".into(),
            category: "financial".into(),
            status: VerificationStatus::Verified,
            issuer: "AI Validation".into(),
            expiry: Some("2030-10-15".into()),
            icon: "📋".into(),
            source: None,
        };
        let wallet = WalletFlow::new("1234", &[doc]);
        assert_eq!(wallet.totals().documents, 17);
    }

    proptest! {
        #[test]
        fn test_only_the_pin_unlocks(entry in "[0-9a-z]{4}") {
            let mut wallet = WalletFlow::new("1234", &[]);
            wallet.apply(WalletEvent::EnterPin(entry.clone()));
            wallet.apply(WalletEvent::Unlock);
            prop_assert_eq!(wallet.is_unlocked(), entry == "1234");
        }
    }
}
