//! Help & support: FAQ per language with search.

use nour_core::catalog::{faqs, ContactChannel, FaqEntry, UploadTip, CONTACT_CHANNELS, UPLOAD_TIPS};
use nour_core::search::any_contains;
use nour_core::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpEvent {
    SetLanguage(Language),
    SetQuery(String),
    /// Expand the FAQ at this index of the filtered list, or collapse it.
    ToggleFaq(usize),
}

#[derive(Debug, Clone, Default)]
pub struct HelpFlow {
    language: Language,
    query: String,
    expanded: Option<usize>,
}

impl HelpFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// FAQs of the current language whose question or answer matches.
    pub fn results(&self) -> Vec<&'static FaqEntry> {
        faqs(self.language)
            .iter()
            .filter(|faq| any_contains([faq.question, faq.answer], &self.query))
            .collect()
    }

    pub fn tips(&self) -> &'static [UploadTip] {
        &UPLOAD_TIPS
    }

    pub fn contacts(&self) -> &'static [ContactChannel] {
        &CONTACT_CHANNELS
    }

    pub fn apply(&mut self, event: HelpEvent) {
        match event {
            HelpEvent::SetLanguage(language) => {
                if language != self.language {
                    self.language = language;
                    self.expanded = None;
                }
            }
            HelpEvent::SetQuery(query) => {
                if query != self.query {
                    self.query = query;
                    self.expanded = None;
                }
            }
            HelpEvent::ToggleFaq(index) => {
                if self.expanded == Some(index) {
                    self.expanded = None;
                } else if index < self.results().len() {
                    self.expanded = Some(index);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_english() {
        let help = HelpFlow::new();
        assert_eq!(help.language(), Language::En);
        assert_eq!(help.results().len(), 8);
        assert_eq!(help.tips().len(), 4);
        assert_eq!(help.contacts().len(), 3);
    }

    #[test]
    fn test_search_question_and_answer() {
        let mut help = HelpFlow::new();
        help.apply(HelpEvent::SetQuery("aes-256".into()));
        let results = help.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].question, "Is my data secure?");
    }

    #[test]
    fn test_language_switch_resets_expansion() {
        let mut help = HelpFlow::new();
        help.apply(HelpEvent::ToggleFaq(5));
        assert_eq!(help.expanded(), Some(5));
        help.apply(HelpEvent::SetLanguage(Language::Hi));
        assert_eq!(help.expanded(), None);
        assert_eq!(help.results().len(), 3);
    }

    #[test]
    fn test_toggle_out_of_range_ignored() {
        let mut help = HelpFlow::new();
        help.apply(HelpEvent::SetLanguage(Language::Tl));
        help.apply(HelpEvent::ToggleFaq(3));
        assert_eq!(help.expanded(), None);
        help.apply(HelpEvent::ToggleFaq(2));
        help.apply(HelpEvent::ToggleFaq(2));
        assert_eq!(help.expanded(), None);
    }

    proptest! {
        #[test]
        fn test_results_subset_of_language(query in "[a-z ]{0,5}", lang in 0usize..3) {
            let mut help = HelpFlow::new();
            help.apply(HelpEvent::SetLanguage(Language::ALL[lang]));
            help.apply(HelpEvent::SetQuery(query));
            let all = faqs(help.language());
            for faq in help.results() {
                prop_assert!(all.contains(faq));
            }
        }
    }
}
