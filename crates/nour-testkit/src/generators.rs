//! Proptest generators for property-based testing.

use proptest::prelude::*;

use nour_core::catalog::BANKS;
use nour_core::{DocumentType, NavTab, Screen};

/// Any screen.
pub fn screen() -> impl Strategy<Value = Screen> {
    prop::sample::select(Screen::ALL.to_vec())
}

/// A screen behind the auth gate.
pub fn gated_screen() -> impl Strategy<Value = Screen> {
    screen().prop_filter("gated screens only", |s| !s.is_auth())
}

pub fn nav_tab() -> impl Strategy<Value = NavTab> {
    prop::sample::select(NavTab::ALL.to_vec())
}

pub fn document_type() -> impl Strategy<Value = DocumentType> {
    prop::sample::select(DocumentType::ALL.to_vec())
}

/// Bank search input: a fragment of a real bank name or country in random
/// case, or arbitrary short text.
pub fn search_query() -> impl Strategy<Value = String> {
    let fragments: Vec<&'static str> = BANKS.iter().flat_map(|b| [b.name, b.country]).collect();
    prop_oneof![
        (prop::sample::select(fragments), any::<prop::sample::Index>(), any::<bool>()).prop_map(
            |(text, start, upper)| {
                let chars: Vec<char> = text.chars().collect();
                let from = start.index(chars.len());
                let fragment: String = chars[from..].iter().take(4).collect();
                if upper {
                    fragment.to_uppercase()
                } else {
                    fragment.to_lowercase()
                }
            }
        ),
        "[a-zA-Z ]{0,6}",
    ]
}

/// PIN entry as typed: digits, possibly too short or too long.
pub fn pin_entry() -> impl Strategy<Value = String> {
    "[0-9]{0,6}"
}

/// Validator verdict script.
pub fn verdicts() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 1..8)
}
