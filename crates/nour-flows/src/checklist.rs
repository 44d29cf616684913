//! Document checklist per residency profile and country.

use nour_core::catalog::{checklist, country, ChecklistItem, Country, COUNTRIES};
use nour_core::{Residency, VerificationStatus};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistEvent {
    SetProfile(Residency),
    /// Select a country by code. Unknown codes are ignored.
    SetCountry(String),
}

#[derive(Debug, Clone)]
pub struct ChecklistFlow {
    profile: Residency,
    country: &'static Country,
}

impl ChecklistFlow {
    pub fn new() -> Self {
        Self {
            profile: Residency::default(),
            country: &COUNTRIES[0],
        }
    }

    pub fn profile(&self) -> Residency {
        self.profile
    }

    pub fn country(&self) -> &'static Country {
        self.country
    }

    /// Countries offered by the selector.
    pub fn countries(&self) -> &'static [Country] {
        &COUNTRIES
    }

    pub fn mandatory(&self) -> &'static [ChecklistItem] {
        checklist(self.profile).0
    }

    pub fn optional(&self) -> &'static [ChecklistItem] {
        checklist(self.profile).1
    }

    /// Completed share of the mandatory items, in percent.
    pub fn progress_percent(&self) -> f64 {
        let mandatory = self.mandatory();
        if mandatory.is_empty() {
            return 0.0;
        }
        let done = mandatory
            .iter()
            .filter(|item| item.status == VerificationStatus::Verified)
            .count();
        done as f64 / mandatory.len() as f64 * 100.0
    }

    pub fn apply(&mut self, event: ChecklistEvent) {
        match event {
            ChecklistEvent::SetProfile(profile) => self.profile = profile,
            ChecklistEvent::SetCountry(code) => match country(&code) {
                Ok(c) => self.country = c,
                Err(err) => debug!(%err, "country ignored"),
            },
        }
    }
}

impl Default for ChecklistFlow {
    fn default() -> Self {
        Self::new()
    }
}
